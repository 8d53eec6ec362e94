//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the three shared values pages read from context: the
//! `AuthSession`, the `ApiClient`, and the notice queue. The client's session
//! event channel is drained by `SessionWatcher`, which clears the session on
//! 401; the route gates own every navigation that follows.

use futures::channel::mpsc::UnboundedReceiver;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::gate::RouteGate;
use crate::components::toast::ToastHost;
use crate::net::session_client::{ApiClient, SessionEvent};
use crate::net::transport::BrowserTransport;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, match_request::MatchRequestPage, not_found::NotFoundPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::state::auth::AuthSession;
use crate::state::notify::Notices;
use crate::util::auth::RouteAccess;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared contexts, starts the identity query, and sets up
/// client-side routing with the route gates.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (client, events) = ApiClient::new(BrowserTransport::default());
    let session = AuthSession::new();
    let notices = RwSignal::new(Notices::default());

    provide_context(client.clone());
    provide_context(session);
    provide_context(notices);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(identity) = session.refresh(&client).await {
            log::info!("signed in as {} ({})", identity.email, identity.role);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    drop(client);

    view! {
        <Title text="TigerLink"/>

        <Router>
            <SessionWatcher events=events/>
            <ToastHost/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <RouteGate access=RouteAccess::PublicOnly><LoginPage/></RouteGate> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <RouteGate access=RouteAccess::PublicOnly><RegisterPage/></RouteGate> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RouteGate access=RouteAccess::Protected><DashboardPage/></RouteGate> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <RouteGate access=RouteAccess::Protected><ProfilePage/></RouteGate> }
                />
                <Route
                    path=StaticSegment("match-request")
                    view=|| view! { <RouteGate access=RouteAccess::Protected><MatchRequestPage/></RouteGate> }
                />
            </Routes>
        </Router>
    }
}

/// Applies session events from the API client to the session.
///
/// The watcher never navigates: a cleared session flips the protected route
/// gate to `Redirect("/login")`, and that gate navigates once. Public-only
/// pages stay put.
#[component]
fn SessionWatcher(events: UnboundedReceiver<SessionEvent>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use futures::StreamExt as _;

        let session = expect_context::<AuthSession>();
        let mut events = events;
        leptos::task::spawn_local(async move {
            while let Some(event) = events.next().await {
                let SessionEvent::Unauthorized { path } = &event;
                if session.apply(&event) {
                    log::info!("session expired ({path}); returning to login");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    drop(events);
}
