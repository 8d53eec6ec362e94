use super::*;

// =============================================================================
// FieldErrors
// =============================================================================

#[test]
fn field_errors_keep_first_message_per_field() {
    let mut errors = FieldErrors::new();
    errors.add("email", "first");
    errors.add("email", "second");
    errors.add("password", "too short");
    assert_eq!(errors.get("email"), Some("first"));
    assert_eq!(errors.fields().count(), 2);
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email", "password"]);
}

#[test]
fn field_errors_into_result() {
    assert_eq!(FieldErrors::new().into_result(|| 7), Ok(7));
    let mut errors = FieldErrors::new();
    errors.check("major", Err("bad".to_owned()));
    errors.check("aboutMe", Ok(()));
    let err = errors.into_result(|| 7).unwrap_err();
    assert_eq!(err.get("major"), Some("bad"));
    assert_eq!(err.get("aboutMe"), None);
}

// =============================================================================
// Email / URL rules
// =============================================================================

#[test]
fn valid_emails_pass() {
    for email in ["a@depauw.edu", "first.last@depauw.edu", "x_y+tag@mail.example.org", "o'neil@depauw.edu"] {
        assert!(is_valid_email(email), "{email} should be valid");
    }
}

#[test]
fn invalid_emails_fail() {
    for email in [
        "",
        "plain",
        "@depauw.edu",
        "a@",
        "a@depauw",
        "a@@depauw.edu",
        ".a@depauw.edu",
        "a..b@depauw.edu",
        "a.@depauw.edu",
        "a b@depauw.edu",
        "a@-depauw.edu",
        "a@depauw.e",
    ] {
        assert!(!is_valid_email(email), "{email:?} should be invalid");
    }
}

#[test]
fn url_rule_requires_scheme() {
    assert!(is_valid_url("https://linkedin.com/in/ada"));
    assert!(is_valid_url("http://example.com"));
    assert!(!is_valid_url("linkedin.com/in/ada"));
    assert!(!is_valid_url(""));
    assert!(!is_valid_url("not a url"));
}

// =============================================================================
// Length / set helpers
// =============================================================================

#[test]
fn check_length_counts_characters() {
    assert_eq!(check_length("é", Some((2, "short")), None), Err("short".to_owned()));
    assert_eq!(check_length("éé", Some((2, "short")), Some((2, "long"))), Ok(()));
    assert_eq!(check_length("abc", None, Some((2, "long"))), Err("long".to_owned()));
}

#[test]
fn dedup_keeps_first_occurrence() {
    let values = vec!["b".to_owned(), "a".to_owned(), "b".to_owned()];
    assert_eq!(dedup_preserving_order(&values), vec!["b".to_owned(), "a".to_owned()]);
}
