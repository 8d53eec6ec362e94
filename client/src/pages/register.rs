//! Registration page: create an account, then sign straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use super::login::sign_in;
use crate::components::form_field::{FormField, field_error};
use crate::forms::FieldErrors;
use crate::forms::auth::RegistrationDraft;
use crate::net::session_client::{ApiClient, ApiError, SessionClient};
use crate::net::transport::Transport;
use crate::net::types::{Identity, LoginRequest, RegistrationRequest, Role};
use crate::state::auth::AuthSession;
use crate::state::form::SubmitPhase;
use crate::state::notify::Notices;
#[cfg(feature = "hydrate")]
use crate::state::{
    form::settle,
    notify::{Notice, error_notice, notify},
};

/// Register, log in with the same credentials, and load the identity.
///
/// # Errors
///
/// The first failing call's `ApiError`.
pub async fn register_and_sign_in<T: Transport>(
    session: AuthSession,
    client: &SessionClient<T>,
    request: &RegistrationRequest,
) -> Result<Identity, ApiError> {
    client.register(request).await?;
    let login = LoginRequest { email: request.email.clone(), password_hash: request.password_hash.clone() };
    sign_in(session, client, &login).await
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let client = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<Notices>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let draft = RwSignal::new(RegistrationDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let busy = move || !phase.get().can_submit();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !phase.get_untracked().can_submit() {
            return;
        }
        phase.set(SubmitPhase::Validating);
        let validated = draft.with_untracked(RegistrationDraft::validate);
        phase.set(SubmitPhase::after_validation(validated.is_ok()));
        let request = match validated {
            Ok(request) => {
                errors.set(FieldErrors::new());
                request
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
                let result = register_and_sign_in(session, &client, &request).await;
                if !settle(phase, &result) {
                    return;
                }
                match result {
                    Ok(_) => {
                        notify(notices, Notice::success("Registration successful!", "Welcome to TigerLink"));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        let notice =
                            error_notice(&e, "Registration failed", "An error occurred during registration");
                        if let Some(notice) = notice {
                            notify(notices, notice);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, session, &client, notices);
    };

    let role_options = Role::ALL
        .into_iter()
        .map(|role| {
            let id = format!("role-{}", role.as_str().to_ascii_lowercase());
            let label_for = id.clone();
            view! {
                <label class="radio" for=label_for>
                    <input
                        id=id
                        type="radio"
                        name="role"
                        value=role.as_str()
                        prop:checked=move || draft.with(|d| d.role == Some(role))
                        on:change=move |_| draft.update(|d| d.role = Some(role))
                        disabled=busy
                    />
                    <span>{role.label()}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Join TigerLink"</h1>
                <p class="auth-card__subtitle">"Connect with DePauw alumni for mentorship opportunities"</p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <FormField label="Full Name" required=true html_for="fullName" error=field_error(errors, "fullName")>
                        <input
                            id="fullName"
                            class="input"
                            placeholder="John Doe"
                            prop:value=move || draft.with(|d| d.full_name.clone())
                            on:input=move |ev| draft.update(|d| d.full_name = event_target_value(&ev))
                            disabled=busy
                        />
                    </FormField>
                    <FormField label="DePauw Email" required=true html_for="email" error=field_error(errors, "email")>
                        <input
                            id="email"
                            class="input"
                            type="email"
                            placeholder="you@depauw.edu"
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                            disabled=busy
                        />
                    </FormField>
                    <FormField label="Password" required=true html_for="password" error=field_error(errors, "password")>
                        <input
                            id="password"
                            class="input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || draft.with(|d| d.password.clone())
                            on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                            disabled=busy
                        />
                    </FormField>
                    <FormField label="I am a..." required=true error=field_error(errors, "role")>
                        <div class="radio-group">{role_options}</div>
                    </FormField>
                    <button class="btn btn--primary btn--block" type="submit" disabled=busy>
                        {move || phase.get().button_label("Create Account", "Creating Account...")}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
