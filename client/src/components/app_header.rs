//! Top bar shared by the signed-in pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::session_client::ApiClient;
use crate::state::auth::AuthSession;

/// Brand link, signed-in user, and logout.
///
/// Logout clears the session; the surrounding route gate then sends the user
/// to `/login`.
#[component]
pub fn AppHeader() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let client = expect_context::<ApiClient>();
    let busy = RwSignal::new(false);

    let who = move || {
        session
            .identity()
            .map(|user| format!("{} ({})", user.full_name, user.role))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                // Local state is cleared either way; the failure is already logged.
                let _ = session.logout(&client).await;
                busy.try_set(false);
            });
        }
    };

    view! {
        <header class="app-header">
            <A href="/dashboard" attr:class="app-header__brand">
                "TigerLink"
            </A>
            <div class="app-header__session">
                <span class="app-header__user">{who}</span>
                <button class="btn btn--outline" on:click=on_logout disabled=move || busy.get()>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
