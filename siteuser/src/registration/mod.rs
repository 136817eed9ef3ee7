mod types;
mod validation;

pub use types::{FieldErrors, RegistrationForm};
pub use validation::{
    PASSWORD_MAX_CHARS, PASSWORD_MIN_CHARS, USERNAME_MAX_CHARS, USERNAME_MIN_CHARS, validate,
};
