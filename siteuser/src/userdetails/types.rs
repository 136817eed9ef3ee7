use serde::{Deserialize, Serialize};

use crate::userdb::{Authority, User};

/// What the authentication layer needs to know about a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserDetails {
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub authorities: Vec<Authority>,
}

impl UserDetails {
    pub fn has_authority(&self, authority: Authority) -> bool {
        self.authorities.contains(&authority)
    }

    pub fn is_admin(&self) -> bool {
        self.has_authority(Authority::Admin)
    }
}

impl From<User> for UserDetails {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            password_hash: user.password,
            authorities: vec![user.authority],
        }
    }
}
