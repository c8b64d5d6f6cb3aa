use super::*;

// =============================================================
// NotificationKind
// =============================================================

#[test]
fn known_kinds_parse() {
    assert_eq!(NotificationKind::parse("info"), NotificationKind::Info);
    assert_eq!(NotificationKind::parse("success"), NotificationKind::Success);
    assert_eq!(NotificationKind::parse("warning"), NotificationKind::Warning);
    assert_eq!(NotificationKind::parse("danger"), NotificationKind::Danger);
}

#[test]
fn blank_kind_defaults_to_info() {
    assert_eq!(NotificationKind::parse(""), NotificationKind::Info);
    assert_eq!(NotificationKind::parse("  "), NotificationKind::Info);
    assert_eq!(NotificationKind::default(), NotificationKind::Info);
}

#[test]
fn unknown_kind_is_kept_verbatim() {
    assert_eq!(NotificationKind::parse("neutral"), NotificationKind::Other("neutral".to_owned()));
}

#[test]
fn each_known_kind_has_distinct_class() {
    let kinds = ["info", "success", "warning", "danger"].map(NotificationKind::parse);
    for (i, a) in kinds.iter().enumerate() {
        for (j, b) in kinds.iter().enumerate() {
            if i != j {
                assert_ne!(a.classes(), b.classes());
            }
        }
    }
}

#[test]
fn classes_always_include_base() {
    assert_eq!(NotificationKind::Success.classes(), vec!["notification", "success"]);
    assert_eq!(NotificationKind::parse("neutral").classes(), vec!["notification", "neutral"]);
}

#[test]
fn unknown_kind_with_spaces_splits_into_tokens() {
    let kind = NotificationKind::Other("a b".to_owned());
    assert_eq!(kind.classes(), vec!["notification", "a", "b"]);
}

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_starts_shown() {
    assert_eq!(ToastState::default(), ToastState::Shown);
}

#[test]
fn manual_close_then_expiry_removes_once() {
    let mut state = ToastState::default();
    assert!(state.remove(), "close button removes");
    assert!(!state.remove(), "expiry after close is a no-op");
    assert_eq!(state, ToastState::Removed);
}

#[test]
fn expiry_without_close_removes() {
    let mut state = ToastState::Shown;
    assert!(state.remove());
}

// =============================================================
// Toast removal paths
// =============================================================

/// In-memory element that counts detaches.
#[derive(Debug)]
struct FakeElement {
    attached: std::cell::Cell<bool>,
    detaches: std::cell::Cell<u32>,
}

impl FakeElement {
    fn attached() -> Self {
        Self { attached: std::cell::Cell::new(true), detaches: std::cell::Cell::new(0) }
    }
}

impl Detach for FakeElement {
    fn is_attached(&self) -> bool {
        self.attached.get()
    }

    fn detach(&self) {
        self.attached.set(false);
        self.detaches.set(self.detaches.get() + 1);
    }
}

#[test]
fn close_then_timer_detaches_once() {
    let toast = Toast::new(FakeElement::attached());
    assert!(toast.remove(), "close button detaches");
    assert!(!toast.remove(), "timer after close is a no-op");
    assert_eq!(toast.element().detaches.get(), 1);
    assert_eq!(toast.state(), ToastState::Removed);
}

#[test]
fn timer_alone_detaches() {
    let toast = Toast::new(FakeElement::attached());
    assert_eq!(toast.state(), ToastState::Shown);
    assert!(toast.remove());
    assert!(!toast.element().is_attached());
    assert_eq!(toast.element().detaches.get(), 1);
}

#[test]
fn timer_after_external_detach_does_nothing() {
    let toast = Toast::new(FakeElement::attached());
    toast.element().attached.set(false);
    assert!(!toast.remove());
    assert_eq!(toast.element().detaches.get(), 0);
    assert_eq!(toast.state(), ToastState::Removed);
}

// =============================================================
// ToastPlan
// =============================================================

#[test]
fn plan_defaults_to_info_and_configured_lifetime() {
    let plan = ToastPlan::new("Saved", None, &SiteConfig::default());
    assert_eq!(plan.message, "Saved");
    assert_eq!(plan.kind, NotificationKind::Info);
    assert_eq!(plan.ttl_ms, 5_000);
}

#[test]
fn plan_lifetime_follows_config_override() {
    let config = SiteConfig { notification_ttl_ms: 1_500, ..SiteConfig::default() };
    let plan = ToastPlan::new("Saved", Some("success"), &config);
    assert_eq!(plan.kind, NotificationKind::Success);
    assert_eq!(plan.ttl_ms, 1_500);
}
