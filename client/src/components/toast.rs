//! Toast stack for top-level notices.
//!
//! Each toast dismisses itself after `TOAST_TTL` in the browser; a click
//! dismisses it immediately.

use leptos::prelude::*;

use crate::state::notify::{Notice, Notices, Tone};

#[cfg(feature = "hydrate")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(5);

#[component]
pub fn ToastHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<Notices>>();

    view! {
        <Show when=move || !notices.with(Notices::is_empty)>
            <div class="toast-host" role="status" aria-live="polite">
                <For
                    each=move || notices.with(|queue| queue.items().to_vec())
                    key=|notice| notice.id
                    children=move |notice: Notice| view! { <Toast notice=notice notices=notices/> }
                />
            </div>
        </Show>
    }
}

#[component]
fn Toast(notice: Notice, notices: RwSignal<Notices>) -> impl IntoView {
    let id = notice.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_TTL).await;
        notices.try_update(|queue| queue.dismiss(id));
    });

    let class = match notice.tone {
        Tone::Success => "toast toast--success",
        Tone::Error => "toast toast--error",
    };

    view! {
        <div class=class on:click=move |_| {
            notices.try_update(|queue| queue.dismiss(id));
        }>
            <p class="toast__title">{notice.title}</p>
            <p class="toast__description">{notice.description}</p>
        </div>
    }
}
