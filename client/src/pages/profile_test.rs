use super::*;

fn stored(role: Role) -> ProfileData {
    ProfileData {
        id: "u-1".to_owned(),
        email: "a@depauw.edu".to_owned(),
        role,
        grad_year: Some(2026),
        major: Some("Physics".to_owned()),
        about_me: Some("Hi".to_owned()),
        resume_s3_key: None,
        linkedin_profile: Some("https://linkedin.com/in/ada".to_owned()),
        career_interests: vec!["Technology".to_owned()],
        current_company: None,
        job_title: None,
        field_of_expertise: Vec::new(),
        willingness_to_help: Vec::new(),
    }
}

#[test]
fn prefill_with_stored_profile() {
    let (draft, exists) = prefill(Role::Student, Ok(Some(stored(Role::Student))));
    assert!(exists);
    assert_eq!(draft.common().major, "Physics");
    assert_eq!(draft.role(), Role::Student);
}

#[test]
fn prefill_without_profile_is_empty_create_form() {
    let (draft, exists) = prefill(Role::Alumni, Ok(None));
    assert!(!exists);
    assert_eq!(draft, ProfileDraft::empty(Role::Alumni));
}

#[test]
fn prefill_after_failure_falls_back_to_empty_form() {
    for error in [ApiError::Network("offline".to_owned()), ApiError::Unauthorized] {
        let (draft, exists) = prefill(Role::Student, Err(error));
        assert!(!exists);
        assert_eq!(draft, ProfileDraft::empty(Role::Student));
    }
}

#[test]
fn saved_notice_names_role() {
    assert!(saved_notice(Role::Student).description.contains("student"));
    assert!(saved_notice(Role::Alumni).description.contains("alumni"));
    assert_eq!(saved_notice(Role::Alumni).title, "Profile saved!");
}

#[test]
fn help_options_use_wire_values() {
    assert_eq!(help_options(), vec![("COFFEE_CHAT", "Coffee Chat"), ("RESUME_REVIEW", "Resume Review")]);
    assert_eq!(options(&CAREER_INTERESTS).len(), CAREER_INTERESTS.len());
}
