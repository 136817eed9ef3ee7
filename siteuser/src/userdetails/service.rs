use crate::storage::Stores;
use crate::userdb::UserStore;

use super::errors::UserDetailsError;
use super::types::UserDetails;

/// Looks up users for the authentication layer.
///
/// Every call reads the store afresh; nothing is cached.
#[derive(Clone)]
pub struct UserDetailsService {
    users: UserStore,
}

impl UserDetailsService {
    pub fn new(stores: &Stores) -> Self {
        Self {
            users: UserStore::new(stores),
        }
    }

    /// Load the details of the user whose username matches exactly.
    ///
    /// Fails with [`UserDetailsError::UsernameNotFound`] when no such user exists.
    #[tracing::instrument(skip(self))]
    pub async fn load_user_by_username(
        &self,
        username: &str,
    ) -> Result<UserDetails, UserDetailsError> {
        match self.users.find_by_username(username).await? {
            Some(user) => Ok(UserDetails::from(user)),
            None => {
                tracing::debug!("No user found for username");
                Err(UserDetailsError::UsernameNotFound(username.to_string()))
            }
        }
    }
}
