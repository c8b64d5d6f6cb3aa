use super::*;

#[test]
fn status_error_names_the_code() {
    let err = SiteError::Status { status: 503 };
    assert_eq!(err.to_string(), "status endpoint returned 503");
}

#[test]
fn decode_error_converts_from_serde() {
    let Err(source) = serde_json::from_str::<serde_json::Value>("{") else {
        panic!("truncated json should not parse");
    };
    let err = SiteError::from(source);
    assert!(matches!(err, SiteError::Decode(_)));
    assert!(err.to_string().starts_with("malformed status body:"));
}

#[test]
fn config_error_carries_reason() {
    let err = SiteError::Config("scroll_offset: invalid type".to_owned());
    assert_eq!(err.to_string(), "invalid site config: scroll_offset: invalid type");
}
