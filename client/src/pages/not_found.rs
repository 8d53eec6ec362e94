//! Catch-all view for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    Effect::new(move || {
        log::warn!("no route for {}", location.pathname.get());
    });

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Oops! Page not found"</p>
            <A href="/">"Return to Home"</A>
        </div>
    }
}
