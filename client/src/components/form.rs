//! Small form helpers shared by auth, contact and settings pages.

use leptos::prelude::*;

use crate::util::validation::{Field, FieldErrors};

/// Inline error text for one field; renders nothing when the field is valid.
#[component]
pub fn FieldMessage(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    let message = move || errors.with(|e| e.message(field));
    view! {
        <Show when=move || message().is_some()>
            <p class="field__error" role="alert">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}

/// Labelled text input bound to a string signal.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] autocomplete: Option<String>,
) -> impl IntoView {
    let invalid = move || errors.with(|e| e.message(field).is_some());
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                class:field__input--invalid=invalid
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldMessage errors=errors field=field/>
        </label>
    }
}
