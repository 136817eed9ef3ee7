use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::userdb::Authority;

/// A submitted registration form. Missing fields take their default value.
///
/// Deserialization never fails on a badly typed `gender`, `admin` or
/// `authority`; such values are recorded in `binding_errors` and reported by
/// [`validate`](super::validate) alongside the other field errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RegistrationSubmission")]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub gender: i32,
    pub is_admin: bool,
    pub authority: Option<Authority>,
    pub csrf_token: Option<String>,
    pub binding_errors: FieldErrors,
}

impl RegistrationForm {
    /// The authority a successful registration grants
    pub fn granted_authority(&self) -> Authority {
        if self.is_admin {
            Authority::Admin
        } else {
            Authority::User
        }
    }
}

/// Registration fields exactly as they arrive on the wire
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RegistrationSubmission {
    username: String,
    password: String,
    email: String,
    gender: Option<String>,
    admin: Option<String>,
    authority: Option<String>,
    #[serde(rename = "_csrf")]
    csrf_token: Option<String>,
}

impl From<RegistrationSubmission> for RegistrationForm {
    fn from(submission: RegistrationSubmission) -> Self {
        let mut binding_errors = FieldErrors::new();

        let gender = match submission.gender.as_deref().map(str::trim) {
            None => 0,
            Some(raw) => raw.parse::<i32>().unwrap_or_else(|_| {
                binding_errors.add("gender", "must be a number");
                0
            }),
        };

        let is_admin = match submission.admin.as_deref().map(str::trim) {
            None => false,
            Some(raw) => parse_checkbox(raw).unwrap_or_else(|| {
                binding_errors.add("admin", "must be true or false");
                false
            }),
        };

        let authority = match submission.authority.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.to_ascii_uppercase().parse::<Authority>() {
                Ok(authority) => Some(authority),
                Err(_) => {
                    binding_errors.add("authority", "must be USER or ADMIN");
                    None
                }
            },
        };

        Self {
            username: submission.username,
            password: submission.password,
            email: submission.email,
            gender,
            is_admin,
            authority,
            csrf_token: submission.csrf_token,
            binding_errors,
        }
    }
}

// Checkbox spellings browsers and hand-written clients send
fn parse_checkbox(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" | "" => Some(false),
        _ => None,
    }
}

/// Validation messages keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages for one field, empty when the field is valid
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}
