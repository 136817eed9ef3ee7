use email_address::EmailAddress;

use super::types::{FieldErrors, RegistrationForm};

pub const USERNAME_MIN_CHARS: usize = 2;
pub const USERNAME_MAX_CHARS: usize = 20;
pub const PASSWORD_MIN_CHARS: usize = 4;
pub const PASSWORD_MAX_CHARS: usize = 255;

/// Check every field of a registration form, collecting all failures
pub fn validate(form: &RegistrationForm) -> FieldErrors {
    let mut errors = form.binding_errors.clone();

    check_size(
        &mut errors,
        "username",
        &form.username,
        USERNAME_MIN_CHARS,
        USERNAME_MAX_CHARS,
    );
    if !form.username.is_empty() && form.username.trim().is_empty() {
        errors.add("username", "must not be blank");
    }

    check_size(
        &mut errors,
        "password",
        &form.password,
        PASSWORD_MIN_CHARS,
        PASSWORD_MAX_CHARS,
    );

    if form.email.trim().is_empty() {
        errors.add("email", "must not be blank");
    } else if !EmailAddress::is_valid(&form.email) {
        errors.add("email", "must be a well-formed email address");
    }

    if let Some(authority) = form.authority {
        if authority != form.granted_authority() {
            errors.add("authority", "does not match the admin setting");
        }
    }

    if !errors.is_empty() {
        tracing::debug!(error_count = errors.len(), "Registration form rejected");
    }
    errors
}

fn check_size(errors: &mut FieldErrors, field: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.add(field, format!("size must be between {min} and {max}"));
    }
}
