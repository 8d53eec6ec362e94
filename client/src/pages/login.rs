//! Login page: email + password against the backend session endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::form_field::{FormField, field_error};
use crate::forms::FieldErrors;
use crate::forms::auth::LoginDraft;
use crate::net::session_client::{ApiClient, ApiError, SessionClient};
use crate::net::transport::Transport;
use crate::net::types::{Identity, LoginRequest};
use crate::state::auth::AuthSession;
use crate::state::form::SubmitPhase;
#[cfg(feature = "hydrate")]
use crate::state::{form::settle, notify::notify};
use crate::state::notify::{Notice, Notices};

const BAD_CREDENTIALS: &str = "Invalid email or password";

/// Open a session and load the identity it belongs to.
///
/// The login response carries no identity, so a who-am-I query always
/// follows.
///
/// # Errors
///
/// The first failing call's `ApiError`.
pub async fn sign_in<T: Transport>(
    session: AuthSession,
    client: &SessionClient<T>,
    request: &LoginRequest,
) -> Result<Identity, ApiError> {
    client.login(request).await?;
    session.refresh(client).await
}

/// Notice for a failed sign-in.
///
/// Unlike other forms this one reports 401 too: the backend answers bad
/// credentials with 401, and on the public-only login page the global
/// session path has nothing to redirect.
#[must_use]
pub fn sign_in_failure_notice(error: &ApiError) -> Notice {
    let description = error.user_message(BAD_CREDENTIALS).unwrap_or_else(|| BAD_CREDENTIALS.to_owned());
    Notice::error("Login failed", description)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let client = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<Notices>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let draft = RwSignal::new(LoginDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let busy = move || !phase.get().can_submit();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !phase.get_untracked().can_submit() {
            return;
        }
        phase.set(SubmitPhase::Validating);
        let validated = draft.with_untracked(LoginDraft::validate);
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
                let result = sign_in(session, &client, &request).await;
                if !settle(phase, &result) {
                    return;
                }
                match result {
                    Ok(_) => {
                        notify(notices, Notice::success("Login successful!", "Welcome back to TigerLink"));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => notify(notices, sign_in_failure_notice(&e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, session, &client, notices);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your TigerLink account"</p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <FormField label="Email" required=true html_for="email" error=field_error(errors, "email")>
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
                    <button class="btn btn--primary btn--block" type="submit" disabled=busy>
                        {move || phase.get().button_label("Sign In", "Signing in...")}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/register">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
