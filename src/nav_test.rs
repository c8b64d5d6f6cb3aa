use super::*;

const HOME: &str = "index.html";
const EXT: &str = ".html";

fn hrefs(list: &[&str]) -> Vec<Option<String>> {
    list.iter().map(|h| Some((*h).to_owned())).collect()
}

const NAV: [&str; 5] = ["index.html", "pipeline.html", "sql.html", "powerbi.html", "reports.html"];

// =============================================================
// Menu transitions
// =============================================================

#[test]
fn control_click_flips_state() {
    assert!(toggled(false));
    assert!(!toggled(true));
    assert!(!toggled(toggled(false)));
}

#[test]
fn click_outside_both_closes() {
    assert_eq!(on_document_click(false, false), MenuAction::Close);
}

#[test]
fn click_inside_control_or_panel_keeps() {
    assert_eq!(on_document_click(true, false), MenuAction::Keep);
    assert_eq!(on_document_click(false, true), MenuAction::Keep);
    assert_eq!(on_document_click(true, true), MenuAction::Keep);
}

// =============================================================
// current_page
// =============================================================

#[test]
fn current_page_is_last_segment() {
    assert_eq!(current_page("/site/pipeline.html", HOME), "pipeline.html");
    assert_eq!(current_page("/pipeline", HOME), "pipeline");
}

#[test]
fn trailing_slash_defaults_to_home() {
    assert_eq!(current_page("/", HOME), HOME);
    assert_eq!(current_page("/docs/", HOME), HOME);
    assert_eq!(current_page("", HOME), HOME);
}

// =============================================================
// is_active_link / active_links
// =============================================================

#[test]
fn exact_page_match_is_active() {
    assert!(is_active_link("sql.html", "/sql.html", HOME, EXT));
}

#[test]
fn root_path_activates_home_link_only() {
    let flags = active_links(&hrefs(&NAV), "/", HOME, EXT);
    assert_eq!(flags, vec![true, false, false, false, false]);
}

#[test]
fn extensionless_route_matches_by_substring() {
    let flags = active_links(&hrefs(&NAV), "/pipeline", HOME, EXT);
    assert_eq!(flags, vec![false, true, false, false, false]);
}

#[test]
fn overlapping_names_both_match() {
    let flags = active_links(&hrefs(&["reports.html", "reports-archive.html"]), "/reports-archive", HOME, EXT);
    assert_eq!(flags, vec![true, true]);
}

#[test]
fn only_first_extension_occurrence_is_stripped() {
    assert!(is_active_link("a.html.html", "/a.html", HOME, EXT));
}

#[test]
fn missing_href_is_never_active() {
    let flags = active_links(&[None, Some("sql.html".to_owned())], "/sql.html", HOME, EXT);
    assert_eq!(flags, vec![false, true]);
}

#[test]
fn unrelated_path_marks_nothing() {
    let flags = active_links(&hrefs(&NAV), "/about.html", HOME, EXT);
    assert!(flags.iter().all(|f| !f));
}

#[test]
fn marking_is_idempotent() {
    let links = hrefs(&NAV);
    for path in ["/", "/pipeline", "/sql.html", "/reports", "/nope"] {
        let first = active_links(&links, path, HOME, EXT);
        let second = active_links(&links, path, HOME, EXT);
        assert_eq!(first, second, "path {path}");
        assert_eq!(first.len(), links.len());
    }
}
