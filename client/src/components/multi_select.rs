//! Checkbox group for multi-valued profile fields.

#[cfg(test)]
#[path = "multi_select_test.rs"]
mod multi_select_test;

use leptos::prelude::*;

/// Checkbox list over `(value, label)` options.
#[component]
pub fn MultiSelect(
    /// Prefix for checkbox ids so two groups on one page never collide.
    name: &'static str,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let rows = options
        .into_iter()
        .map(|(value, label)| {
            let id = format!("{name}-{}", value.to_ascii_lowercase().replace([' ', '_'], "-"));
            let checked = move || selected.with(|current| current.iter().any(|v| v == value));
            let on_toggle = move |_| {
                let next = selected.with_untracked(|current| toggle_option(current, value));
                on_change.run(next);
            };
            view! {
                <div class="multi-select__option">
                    <input
                        type="checkbox"
                        id=id.clone()
                        prop:checked=checked
                        disabled=move || disabled.get()
                        on:change=on_toggle
                    />
                    <label for=id class="multi-select__label">{label}</label>
                </div>
            }
        })
        .collect_view();

    view! { <div class="multi-select">{rows}</div> }
}

/// Selection after clicking `value`: removed if present, appended otherwise.
#[must_use]
pub fn toggle_option(current: &[String], value: &str) -> Vec<String> {
    if current.iter().any(|v| v == value) {
        current.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(value.to_owned());
        next
    }
}
