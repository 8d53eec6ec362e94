//! Dashboard: signed-in landing page with navigation cards and the current
//! match.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside a protected route gate, so an identity is always present
//! once the body renders. The match result is fetched once on mount.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use crate::components::app_header::AppHeader;
use crate::net::session_client::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::session_client::ApiClient;
use crate::net::types::{MatchResult, ProfileData, Role};
use crate::state::auth::AuthSession;

/// What the match panel shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchView {
    Loading,
    /// No match has been computed yet; distinct from `Loading`.
    NoMatch,
    Ready(MatchResult),
    Failed(String),
}

impl MatchView {
    /// Panel state for a settled match query.
    ///
    /// A 401 keeps the panel loading: the session watcher is already
    /// redirecting.
    #[must_use]
    pub fn from_result(result: Result<Option<MatchResult>, ApiError>) -> Self {
        match result {
            Ok(Some(found)) => Self::Ready(found),
            Ok(None) => Self::NoMatch,
            Err(e) => match e.user_message("Could not load your match") {
                Some(message) => {
                    log::warn!("match result fetch failed: {e}");
                    Self::Failed(message)
                }
                None => Self::Loading,
            },
        }
    }
}

/// Welcome line under the dashboard title.
#[must_use]
pub fn welcome_text(role: Role) -> &'static str {
    match role {
        Role::Student => "Connect with alumni mentors for career guidance and resume reviews",
        Role::Alumni => "Help current students by sharing your expertise and experience",
    }
}

/// Blurb on the profile card.
#[must_use]
pub fn profile_card_text(role: Role) -> &'static str {
    match role {
        Role::Student => "Complete your student profile to start requesting mentorship",
        Role::Alumni => "Update your professional information and mentorship preferences",
    }
}

/// Empty-state copy for the match panel.
#[must_use]
pub fn no_match_text(role: Role) -> &'static str {
    match role {
        Role::Student => "No match yet. Submit a mentorship request and we will pair you with an alumni mentor.",
        Role::Alumni => "No student has been matched with you yet.",
    }
}

/// "Job title at Company" line for a matched profile, if either is known.
#[must_use]
pub fn position_line(profile: &ProfileData) -> Option<String> {
    match (profile.job_title.as_deref(), profile.current_company.as_deref()) {
        (Some(title), Some(company)) => Some(format!("{title} at {company}")),
        (Some(only), None) | (None, Some(only)) => Some(only.to_owned()),
        (None, None) => None,
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let role = move || session.role().unwrap_or(Role::Student);
    let match_view = RwSignal::new(MatchView::Loading);

    #[cfg(feature = "hydrate")]
    {
        let client = expect_context::<ApiClient>();
        leptos::task::spawn_local(async move {
            let view = MatchView::from_result(client.fetch_match_result().await);
            match_view.try_set(view);
        });
    }

    view! {
        <div class="page">
            <AppHeader/>
            <main class="page__main">
                <section class="card">
                    <h2 class="card__title">"Welcome to TigerLink"</h2>
                    <p class="card__description">{move || welcome_text(role())}</p>
                    <div class="card-grid">
                        <A href="/profile" attr:class="card card--link">
                            <h3 class="card__title">"Profile"</h3>
                            <p class="card__description">{move || profile_card_text(role())}</p>
                            <span class="btn btn--primary btn--block">"Manage Profile"</span>
                        </A>
                        <Show when=move || role() == Role::Student>
                            <A href="/match-request" attr:class="card card--link card--accent">
                                <h3 class="card__title">"Request Mentorship"</h3>
                                <p class="card__description">
                                    "Request a coffee chat or resume review with an alumni mentor"
                                </p>
                                <span class="btn btn--accent btn--block">"New Request"</span>
                            </A>
                        </Show>
                    </div>
                </section>
                <MatchPanel state=match_view role=Signal::derive(role)/>
            </main>
        </div>
    }
}

#[component]
fn MatchPanel(state: RwSignal<MatchView>, role: Signal<Role>) -> impl IntoView {
    view! {
        <section class="card match-panel">
            <h2 class="card__title">"Your Match"</h2>
            {move || match state.get() {
                MatchView::Loading => {
                    view! { <p class="match-panel__loading">"Loading your match..."</p> }.into_any()
                }
                MatchView::NoMatch => {
                    view! { <p class="match-panel__empty">{no_match_text(role.get())}</p> }.into_any()
                }
                MatchView::Failed(message) => {
                    view! { <p class="match-panel__error">{message}</p> }.into_any()
                }
                MatchView::Ready(found) => view! { <MatchDetails found=found/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn MatchDetails(found: MatchResult) -> impl IntoView {
    let status = found.status.label();
    let request = found.match_request.map(|request| {
        view! {
            <div class="match-panel__request">
                <span class="badge">{request.kind.label()}</span>
                <p>{request.message}</p>
            </div>
        }
    });
    let profile = found.matched_profile.map(|profile| {
        let position = position_line(&profile);
        let major = match (profile.major.clone(), profile.grad_year) {
            (Some(major), Some(year)) => Some(format!("{major}, class of {year}")),
            (Some(major), None) => Some(major),
            (None, Some(year)) => Some(format!("Class of {year}")),
            (None, None) => None,
        };
        view! {
            <div class="match-panel__profile">
                <p class="match-panel__email">{profile.email}</p>
                {position.map(|line| view! { <p>{line}</p> })}
                {major.map(|line| view! { <p>{line}</p> })}
                {profile.about_me.map(|about| view! { <p class="match-panel__about">{about}</p> })}
                {profile.linkedin_profile.map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer">
                            "LinkedIn"
                        </a>
                    }
                })}
            </div>
        }
    });

    view! {
        <div class="match-panel__details">
            <p class="match-panel__status">"Status: " <strong>{status}</strong></p>
            {profile}
            {request}
        </div>
    }
}
