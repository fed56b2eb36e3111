//! Form validation shared by auth, contact and settings forms.
//!
//! ERROR HANDLING
//! ==============
//! Validators return [`ValidationError`] values; pages render the `Display`
//! text inline next to the offending field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_NAME_LEN: usize = 50;
pub const MIN_CONTACT_MESSAGE_LEN: usize = 10;

/// A single field-level validation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Password must contain a letter and a number")]
    PasswordTooWeak,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("Message must be at least {min} characters")]
    MessageTooShort { min: usize },
    #[error("Avatar URL must start with http:// or https://")]
    InvalidUrl,
    #[error("You must accept the terms to continue")]
    TermsNotAccepted,
}

/// Form fields that can carry an inline error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    CurrentPassword,
    Message,
    AvatarUrl,
    Terms,
}

/// A validation error bound to the field it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub error: ValidationError,
}

/// Collected field errors for one form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: Field, error: ValidationError) {
        self.0.push(FieldError { field, error });
    }

    /// Record the error from `result`, if any.
    pub fn check(&mut self, field: Field, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.push(field, error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First error message recorded for `field`.
    pub fn message(&self, field: Field) -> Option<String> {
        self.0.iter().find(|e| e.field == field).map(|e| e.error.to_string())
    }

    /// `Ok(value)` when no errors were recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Trimmed, non-empty value.
pub fn required(label: &'static str, raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() { Err(ValidationError::Required(label)) } else { Ok(()) }
}

/// Pragmatic e-mail shape check: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    let Some(tld) = labels.last() else {
        return false;
    };
    labels.len() >= 2 && tld.len() >= 2 && labels.iter().all(|label| is_domain_label(label))
}

/// Non-empty DNS label that does not start or end with a hyphen.
fn is_domain_label(label: &str) -> bool {
    !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
}

pub fn email(raw: &str) -> Result<(), ValidationError> {
    required("Email", raw)?;
    if is_valid_email(raw) { Ok(()) } else { Err(ValidationError::InvalidEmail) }
}

/// Display name: required, at most [`MAX_NAME_LEN`] characters.
pub fn display_name(raw: &str) -> Result<(), ValidationError> {
    required("Name", raw)?;
    if raw.trim().chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong { field: "Name", max: MAX_NAME_LEN });
    }
    Ok(())
}

/// New password: minimum length plus at least one letter and one digit.
pub fn new_password(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Required("Password"));
    }
    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    let has_letter = raw.chars().any(char::is_alphabetic);
    let has_digit = raw.chars().any(|c| c.is_ascii_digit());
    if has_letter && has_digit { Ok(()) } else { Err(ValidationError::PasswordTooWeak) }
}

pub fn password_confirmation(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if confirm.is_empty() {
        return Err(ValidationError::Required("Password confirmation"));
    }
    if password == confirm { Ok(()) } else { Err(ValidationError::PasswordMismatch) }
}

/// Optional avatar URL: empty, or an absolute http(s) URL.
pub fn avatar_url(raw: &str) -> Result<(), ValidationError> {
    let url = raw.trim();
    if url.is_empty() || url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl)
    }
}

pub fn contact_message(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().chars().count() < MIN_CONTACT_MESSAGE_LEN {
        Err(ValidationError::MessageTooShort { min: MIN_CONTACT_MESSAGE_LEN })
    } else {
        Ok(())
    }
}
