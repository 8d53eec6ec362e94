//! Mentorship request page (students only).

#[cfg(test)]
#[path = "match_request_test.rs"]
mod match_request_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::app_header::AppHeader;
use crate::components::form_field::{FormField, field_error};
use crate::components::gate::RoleGate;
use crate::forms::FieldErrors;
use crate::forms::match_request::MatchRequestDraft;
use crate::net::session_client::ApiClient;
use crate::net::types::{HelpType, Role};
use crate::state::form::SubmitPhase;
use crate::state::notify::Notices;
#[cfg(feature = "hydrate")]
use crate::state::{
    form::settle,
    notify::{Notice, error_notice, notify},
};

/// One-line explanation shown under each mentorship type.
#[must_use]
pub fn help_type_blurb(kind: HelpType) -> &'static str {
    match kind {
        HelpType::CoffeeChat => {
            "Have an informal conversation about career paths, company culture, or industry insights"
        }
        HelpType::ResumeReview => "Get feedback on your resume from an experienced professional",
    }
}

/// Submit stays disabled until a type is picked.
#[must_use]
pub fn can_submit(phase: SubmitPhase, draft: &MatchRequestDraft) -> bool {
    phase.can_submit() && draft.kind.is_some()
}

#[component]
pub fn MatchRequestPage() -> impl IntoView {
    view! {
        <RoleGate required=Role::Student>
            <MatchRequestForm/>
        </RoleGate>
    }
}

#[component]
fn MatchRequestForm() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<Notices>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let draft = RwSignal::new(MatchRequestDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let busy = move || !phase.get().can_submit();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !phase.get_untracked().can_submit() {
            return;
        }
        phase.set(SubmitPhase::Validating);
        let validated = draft.with_untracked(MatchRequestDraft::validate);
        phase.set(SubmitPhase::after_validation(validated.is_ok()));
        let payload = match validated {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                payload
            }
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = client.create_match_request(&payload).await;
                if !settle(phase, &result) {
                    return;
                }
                match result {
                    Ok(()) => {
                        notify(
                            notices,
                            Notice::success("Request submitted!", "We will match you with an alumni mentor soon"),
                        );
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        if let Some(notice) = error_notice(&e, "Error submitting request", "An error occurred") {
                            notify(notices, notice);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, &client, notices);
    };

    let type_options = HelpType::ALL
        .into_iter()
        .map(|kind| {
            let id = format!("type-{}", kind.as_str().to_ascii_lowercase());
            let label_for = id.clone();
            view! {
                <label class="choice" for=label_for>
                    <input
                        id=id
                        type="radio"
                        name="type"
                        value=kind.as_str()
                        prop:checked=move || draft.with(|d| d.kind == Some(kind))
                        on:change=move |_| draft.update(|d| d.kind = Some(kind))
                        disabled=busy
                    />
                    <div>
                        <div class="choice__title">{kind.label()}</div>
                        <div class="choice__description">{help_type_blurb(kind)}</div>
                    </div>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <AppHeader/>
            <main class="page__main page__main--narrow">
                <section class="card">
                    <h2 class="card__title">"Request Mentorship"</h2>
                    <p class="card__description">"Connect with an alumni mentor for career guidance"</p>
                    <form class="match-form" on:submit=on_submit novalidate>
                        <FormField label="Type of Mentorship" required=true error=field_error(errors, "type")>
                            <div class="choice-group">{type_options}</div>
                        </FormField>
                        <FormField
                            label="Message to Your Mentor"
                            required=true
                            html_for="message"
                            error=field_error(errors, "message")
                        >
                            <textarea
                                id="message"
                                class="input input--multiline"
                                rows="6"
                                placeholder=move || draft.with(MatchRequestDraft::message_placeholder)
                                prop:value=move || draft.with(|d| d.message.clone())
                                on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                                disabled=busy
                            ></textarea>
                            <p class="form-field__hint">
                                "Minimum 20 characters, maximum 500 characters ("
                                {move || draft.with(MatchRequestDraft::counter_label)}
                                ")"
                            </p>
                        </FormField>
                        <div class="form-actions">
                            <A href="/dashboard" attr:class="btn btn--outline">"Cancel"</A>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || !draft.with(|d| can_submit(phase.get(), d))
                            >
                                {move || phase.get().button_label("Submit Request", "Submitting...")}
                            </button>
                        </div>
                    </form>
                </section>
            </main>
        </div>
    }
}
