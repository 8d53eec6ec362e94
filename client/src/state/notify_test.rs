use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut notices = Notices::default();
    let first = notices.push(Notice::success("Saved", "Profile saved"));
    let second = notices.push(Notice::error("Oops", "Try again"));
    assert!(second > first);
    assert_eq!(notices.items()[0].id, first);
    assert_eq!(notices.items()[1].tone, Tone::Error);
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut notices = Notices::default();
    for n in 0..5 {
        notices.push(Notice::success(format!("n{n}"), ""));
    }
    let titles: Vec<_> = notices.items().iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["n2", "n3", "n4"]);
}

#[test]
fn dismiss_removes_once() {
    let mut notices = Notices::default();
    let id = notices.push(Notice::success("a", "b"));
    assert!(notices.dismiss(id));
    assert!(!notices.dismiss(id));
    assert!(notices.is_empty());
}

#[test]
fn error_notice_prefers_backend_message() {
    let error = ApiError::Rejected { status: 409, message: Some("Email already registered".to_owned()) };
    let notice = error_notice(&error, "Registration failed", "An error occurred during registration").unwrap();
    assert_eq!(notice.title, "Registration failed");
    assert_eq!(notice.description, "Email already registered");
    assert_eq!(notice.tone, Tone::Error);
}

#[test]
fn error_notice_falls_back() {
    let notice = error_notice(&ApiError::Network("offline".to_owned()), "Login failed", "Invalid email or password");
    assert_eq!(notice.map(|n| n.description), Some("Invalid email or password".to_owned()));
}

#[test]
fn error_notice_silent_for_expired_session() {
    assert_eq!(error_notice(&ApiError::Unauthorized, "Login failed", "Invalid email or password"), None);
}
