//! Simulated backend calls.
//!
//! Each call waits a fixed delay (browser only) and then resolves against
//! local rules. There is no server behind any of this; the delay exists so
//! pages exercise their busy/disabled states the same way a real API would.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with [`AuthError`] so failures surface as
//! toasts or inline messages instead of panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "mock_api_test.rs"]
mod mock_api_test;

use crate::data::types::User;
use crate::util::validation::{self, Field, FieldErrors, ValidationError};

/// Simulated round-trip latency.
pub const NETWORK_DELAY_MS: u32 = 800;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("{0}")]
    Invalid(ValidationError),
    #[error("Please fix the highlighted fields")]
    Form(FieldErrors),
    #[error("New password must differ from the current one")]
    SamePassword,
}

/// Registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

/// Contact form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Password change input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

async fn simulate_latency() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(NETWORK_DELAY_MS).await;
}

/// Derive a display name from an e-mail local part: `jane.doe@x` -> `"Jane Doe"`.
pub fn name_from_email(email: &str) -> String {
    let local = email.trim().split('@').next().unwrap_or_default();
    let words: Vec<String> = local
        .split(['.', '_', '-', '+'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect();
    if words.is_empty() { "Nestmate User".to_owned() } else { words.join(" ") }
}

fn mint_user(email: &str, name: String) -> User {
    User {
        id: uuid::Uuid::new_v4().to_string(),
        email: email.trim().to_lowercase(),
        name,
        avatar_url: None,
    }
}

/// Login rules: both fields present, e-mail well formed.
///
/// # Errors
///
/// [`AuthError::MissingFields`] or [`AuthError::Invalid`].
pub fn check_login(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    validation::email(email).map_err(AuthError::Invalid)
}

/// Registration rules, reported per field.
///
/// # Errors
///
/// [`AuthError::Form`] listing every failing field.
pub fn check_register(form: &RegisterForm) -> Result<(), AuthError> {
    let mut errors = FieldErrors::default();
    errors.check(Field::Name, validation::display_name(&form.name));
    errors.check(Field::Email, validation::email(&form.email));
    errors.check(Field::Password, validation::new_password(&form.password));
    errors.check(
        Field::ConfirmPassword,
        validation::password_confirmation(&form.password, &form.confirm_password),
    );
    if !form.accept_terms {
        errors.push(Field::Terms, ValidationError::TermsNotAccepted);
    }
    errors.into_result(()).map_err(AuthError::Form)
}

/// Contact form rules, reported per field.
///
/// # Errors
///
/// [`FieldErrors`] listing every failing field.
pub fn check_contact(form: &ContactForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check(Field::Name, validation::required("Name", &form.name));
    errors.check(Field::Email, validation::email(&form.email));
    errors.check(Field::Message, validation::contact_message(&form.message));
    errors.into_result(())
}

/// Profile edit rules, reported per field.
///
/// # Errors
///
/// [`FieldErrors`] listing every failing field.
pub fn check_profile(user: &User) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check(Field::Name, validation::display_name(&user.name));
    errors.check(Field::Email, validation::email(&user.email));
    errors.check(Field::AvatarUrl, validation::avatar_url(user.avatar_url.as_deref().unwrap_or_default()));
    errors.into_result(())
}

/// Password change rules, reported per field.
///
/// # Errors
///
/// [`AuthError::Form`] listing every failing field.
pub fn check_password_change(change: &PasswordChange) -> Result<(), AuthError> {
    let mut errors = FieldErrors::default();
    errors.check(Field::CurrentPassword, validation::required("Current password", &change.current));
    errors.check(Field::Password, validation::new_password(&change.new));
    errors.check(Field::ConfirmPassword, validation::password_confirmation(&change.new, &change.confirm));
    errors.into_result(()).map_err(AuthError::Form)
}

/// Mock login. Any well-formed credentials succeed.
///
/// # Errors
///
/// See [`check_login`].
pub async fn login(email: &str, password: &str) -> Result<User, AuthError> {
    simulate_latency().await;
    check_login(email, password)?;
    Ok(mint_user(email, name_from_email(email)))
}

/// Mock registration.
///
/// # Errors
///
/// See [`check_register`].
pub async fn register(form: &RegisterForm) -> Result<User, AuthError> {
    simulate_latency().await;
    check_register(form)?;
    Ok(mint_user(&form.email, form.name.trim().to_owned()))
}

/// Mock contact submission.
///
/// # Errors
///
/// See [`check_contact`].
pub async fn send_contact(form: &ContactForm) -> Result<(), FieldErrors> {
    simulate_latency().await;
    check_contact(form)
}

/// Mock profile save; returns the normalized profile.
///
/// # Errors
///
/// See [`check_profile`].
pub async fn update_profile(user: User) -> Result<User, FieldErrors> {
    simulate_latency().await;
    check_profile(&user)?;
    let avatar_url = user.avatar_url.map(|u| u.trim().to_owned()).filter(|u| !u.is_empty());
    Ok(User {
        name: user.name.trim().to_owned(),
        email: user.email.trim().to_lowercase(),
        avatar_url,
        ..user
    })
}

/// Mock password change.
///
/// # Errors
///
/// See [`check_password_change`]; reusing the current password yields
/// [`AuthError::SamePassword`].
pub async fn change_password(change: &PasswordChange) -> Result<(), AuthError> {
    simulate_latency().await;
    check_password_change(change)?;
    if change.current == change.new {
        return Err(AuthError::SamePassword);
    }
    Ok(())
}
