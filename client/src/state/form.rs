//! Credential form validation and field-level error state.
//!
//! DESIGN
//! ======
//! Validation runs before any request is issued; a form with field errors
//! never reaches the API client.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::Credentials;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Editable inputs on the sign-in and sign-up forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Name,
    Password,
}

/// Per-field validation messages; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub name: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.name.is_none() && self.password.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Username => self.username,
            Field::Name => self.name,
            Field::Password => self.password,
        }
    }

    /// Drop the message for `field`, typically when the user edits it.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Username => self.username = None,
            Field::Name => self.name = None,
            Field::Password => self.password = None,
        }
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Sign-in only requires both fields to be filled.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_signin(credentials: &Credentials) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if credentials.username.is_empty() {
        errors.username = Some("Email is required");
    }
    if credentials.password.is_empty() {
        errors.password = Some("Password is required");
    }
    errors.into_result()
}

/// Sign-up checks email shape and minimum name/password lengths.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_signup(credentials: &Credentials) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if credentials.username.is_empty() {
        errors.username = Some("Email is required");
    } else if !is_email_shaped(&credentials.username) {
        errors.username = Some("Please enter a valid email address");
    }

    let name = credentials.name.as_deref().unwrap_or_default();
    if name.is_empty() {
        errors.name = Some("Name is required");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.name = Some("Name must be at least 2 characters long");
    }

    if credentials.password.is_empty() {
        errors.password = Some("Password is required");
    } else if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some("Password must be at least 6 characters long");
    }

    errors.into_result()
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the
/// domain with text on both sides.
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
