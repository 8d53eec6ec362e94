//! Route gate and role guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrap route views so redirect decisions from `util::auth` are applied the
//! same way everywhere. Each gate navigates at most once (history replace) and
//! renders a placeholder until its decision is `Render`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::state::auth::AuthSession;
use crate::util::auth::{GateDecision, RedirectLatch, RouteAccess, role_guard, route_gate};

/// Apply a gate decision: navigate once on `Redirect`.
fn install_redirect(decision: Memo<GateDecision>) {
    let navigate = use_navigate();
    let location = use_location();
    let latch = StoredValue::new(RedirectLatch::default());
    Effect::new(move || {
        let decision = decision.get();
        let path = location.pathname.get_untracked();
        let target = latch.try_update_value(|latch| latch.take(decision, &path)).flatten();
        if let Some(target) = target {
            log::debug!("gate redirect {path} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..Default::default() });
        }
    });
}

/// Restrict a route to signed-in (`Protected`) or signed-out (`PublicOnly`) users.
#[component]
pub fn RouteGate(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let state = session.state();
    let decision = Memo::new(move |_| route_gate(&state.get(), access));
    install_redirect(decision);

    view! {
        <Show
            when=move || decision.get() == GateDecision::Render
            fallback=move || {
                view! {
                    <div class="gate-placeholder">
                        <span class="spinner" aria-hidden="true"></span>
                        <p>
                            {move || match decision.get() {
                                GateDecision::Redirect(_) => "Redirecting...",
                                _ => "Loading...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Restrict a view inside a protected route to one role.
///
/// Renders nothing for a mismatched role while the redirect to the dashboard
/// is in flight.
#[component]
pub fn RoleGate(required: Role, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let state = session.state();
    let decision = Memo::new(move |_| role_guard(&state.get(), required));
    install_redirect(decision);

    view! {
        <Show
            when=move || decision.get() == GateDecision::Render
            fallback=move || {
                view! {
                    <Show when=move || decision.get() == GateDecision::Pending>
                        <div class="gate-placeholder">
                            <span class="spinner" aria-hidden="true"></span>
                        </div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
