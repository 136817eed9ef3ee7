use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use super::errors::UserError;

/// Role granted to a user, used for route-level access decisions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Authority {
    #[default]
    User,
    Admin,
}

impl Authority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Authority::User => "USER",
            Authority::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Authority {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Authority::User),
            "ADMIN" => Ok(Authority::Admin),
            other => Err(UserError::InvalidData(format!("Unknown authority: {other}"))),
        }
    }
}

impl TryFrom<String> for Authority {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A registered account
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Database-assigned sequence number (primary key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<i64>,
    /// Unique login name, matched exactly
    pub username: String,
    /// Argon2 PHC string, never the plaintext password
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub gender: i32,
    pub is_admin: bool,
    #[sqlx(try_from = "String")]
    pub authority: Authority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: String,
        password_hash: String,
        email: String,
        gender: i32,
        is_admin: bool,
        authority: Authority,
    ) -> Self {
        let now = Utc::now();
        Self {
            sequence_number: None,
            username,
            password: password_hash,
            email,
            gender,
            is_admin,
            authority,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum UserSearchField {
    Username(String),
}

impl fmt::Display for UserSearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSearchField::Username(name) => write!(f, "username={name}"),
        }
    }
}
