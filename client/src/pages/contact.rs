//! Contact form page.

use leptos::prelude::*;

use crate::components::form::{FieldMessage, TextField};
use crate::components::toast_host::notify;
use crate::net::mock_api::{self, ContactForm};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::validation::{Field, FieldErrors, MIN_CONTACT_MESSAGE_LEN};

const CONTACT_EMAIL: &str = "hello@nestmate.app";

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let reset = move || {
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
        errors.set(FieldErrors::default());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = ContactForm { name: name.get(), email: email.get(), subject: subject.get(), message: message.get() };
        if let Err(field_errors) = mock_api::check_contact(&form) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        busy.set(true);

        leptos::task::spawn_local(async move {
            match mock_api::send_contact(&form).await {
                Ok(()) => {
                    notify(toasts, ToastKind::Success, "Thanks! We'll get back to you within a day.");
                    reset();
                }
                Err(field_errors) => errors.set(field_errors),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page contact">
            <header class="page__header">
                <h1>"Get in touch"</h1>
                <p class="page__lead">
                    "Questions about matching, listings or your account? Drop us a line or email "
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a> "."
                </p>
            </header>
            <form class="form contact__form" on:submit=on_submit novalidate>
                <TextField label="Name" value=name errors=errors field=Field::Name autocomplete="name"/>
                <TextField
                    label="Email"
                    value=email
                    errors=errors
                    field=Field::Email
                    input_type="email"
                    autocomplete="email"
                />
                <label class="field">
                    <span class="field__label">"Subject (optional)"</span>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Message"</span>
                    <textarea
                        class="field__input field__input--area"
                        rows="6"
                        placeholder=format!("At least {MIN_CONTACT_MESSAGE_LEN} characters")
                        class:field__input--invalid=move || errors.with(|e| e.message(Field::Message).is_some())
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <FieldMessage errors=errors field=Field::Message/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending…" } else { "Send message" }}
                </button>
            </form>
        </section>
    }
}
