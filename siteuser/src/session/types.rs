use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::errors::SessionError;
use crate::storage::CacheData;
use crate::userdb::Authority;
use crate::userdetails::UserDetails;

/// The authenticated identity attached to a request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub authorities: Vec<Authority>,
}

impl Principal {
    pub fn has_authority(&self, authority: Authority) -> bool {
        self.authorities.contains(&authority)
    }

    pub fn is_admin(&self) -> bool {
        self.has_authority(Authority::Admin)
    }
}

impl From<UserDetails> for Principal {
    fn from(details: UserDetails) -> Self {
        Self {
            username: details.username,
            authorities: details.authorities,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct StoredSession {
    pub(super) principal: Principal,
    pub(super) expires_at: DateTime<Utc>,
    pub(super) ttl: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct StoredCsrfToken {
    pub(super) token: String,
    pub(super) expires_at: DateTime<Utc>,
    pub(super) ttl: u64,
}

macro_rules! cache_data_conversions {
    ($ty:ty) => {
        impl TryFrom<$ty> for CacheData {
            type Error = SessionError;

            fn try_from(data: $ty) -> Result<Self, Self::Error> {
                Ok(Self {
                    value: serde_json::to_string(&data)
                        .map_err(|e| SessionError::Storage(e.to_string()))?,
                })
            }
        }

        impl TryFrom<CacheData> for $ty {
            type Error = SessionError;

            fn try_from(data: CacheData) -> Result<Self, Self::Error> {
                serde_json::from_str(&data.value).map_err(|e| SessionError::Storage(e.to_string()))
            }
        }
    };
}

cache_data_conversions!(StoredSession);
cache_data_conversions!(StoredCsrfToken);
