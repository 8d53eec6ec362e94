use super::*;

#[test]
fn submit_requires_selected_type() {
    let mut draft = MatchRequestDraft::default();
    assert!(!can_submit(SubmitPhase::Idle, &draft));
    draft.kind = Some(HelpType::ResumeReview);
    assert!(can_submit(SubmitPhase::Idle, &draft));
}

#[test]
fn submit_blocked_while_in_flight() {
    let draft = MatchRequestDraft { kind: Some(HelpType::CoffeeChat), message: String::new() };
    assert!(!can_submit(SubmitPhase::Submitting, &draft));
    assert!(can_submit(SubmitPhase::Failed, &draft));
}

#[test]
fn every_type_has_a_blurb() {
    for kind in HelpType::ALL {
        assert!(!help_type_blurb(kind).is_empty());
    }
}
