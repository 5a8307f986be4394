use super::*;

#[test]
fn error_constructor_sets_severity() {
    let n = Notification::error("Authorization required", "Please log in to access this page");
    assert_eq!(n.severity, Severity::Error);
    assert_eq!(n.title, "Authorization required");
    assert_eq!(n.description, "Please log in to access this page");
}

#[test]
fn tracing_notifier_accepts_all_severities() {
    let sink = TracingNotifier;
    for severity in [Severity::Info, Severity::Success, Severity::Error] {
        sink.notify(Notification { title: "t".into(), description: "d".into(), severity });
    }
}
