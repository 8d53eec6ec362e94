use leptos::reactive::owner::Owner;

use super::*;

#[test]
fn idle_and_failed_accept_submissions() {
    assert!(SubmitPhase::Idle.can_submit());
    assert!(SubmitPhase::Failed.can_submit());
}

#[test]
fn in_flight_phases_block_submissions() {
    for phase in [SubmitPhase::Validating, SubmitPhase::Submitting, SubmitPhase::Succeeded] {
        assert!(!phase.can_submit(), "{phase:?}");
    }
}

#[test]
fn label_follows_phase() {
    assert_eq!(SubmitPhase::Idle.button_label("Sign In", "Signing in..."), "Sign In");
    assert_eq!(SubmitPhase::Submitting.button_label("Sign In", "Signing in..."), "Signing in...");
    assert_eq!(SubmitPhase::Succeeded.button_label("Sign In", "Signing in..."), "Signing in...");
}

#[test]
fn transitions() {
    assert_eq!(SubmitPhase::after_validation(true), SubmitPhase::Submitting);
    assert_eq!(SubmitPhase::after_validation(false), SubmitPhase::Failed);
    assert_eq!(SubmitPhase::after_request::<(), ()>(&Ok(())), SubmitPhase::Succeeded);
    assert_eq!(SubmitPhase::after_request::<(), ()>(&Err(())), SubmitPhase::Failed);
}

#[test]
fn settle_records_outcome_while_mounted() {
    Owner::new().with(|| {
        let phase = RwSignal::new(SubmitPhase::Submitting);
        assert!(settle::<(), ()>(phase, &Err(())));
        assert_eq!(phase.get_untracked(), SubmitPhase::Failed);
    });
}

#[test]
fn settle_after_unmount_is_a_no_op() {
    let owner = Owner::new();
    let phase = owner.with(|| RwSignal::new(SubmitPhase::Submitting));
    owner.cleanup();
    assert!(!settle::<(), ()>(phase, &Ok(())));
}
