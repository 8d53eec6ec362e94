//! Labelled form field wrapper with an inline error line.

use leptos::prelude::*;

use crate::forms::FieldErrors;

/// Label, control, and the field's first validation message.
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] html_for: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=html_for>
                {label}
                <Show when=move || required>
                    <span class="form-field__required">"*"</span>
                </Show>
            </label>
            {children()}
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

/// Reactive view of one field's message in a page's error signal.
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|errors| errors.get(field).map(str::to_owned)))
}
