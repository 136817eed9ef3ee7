use crate::session::Principal;
use crate::storage::Stores;
use crate::userdb::{User, UserStore};

use super::errors::CoordinationError;

/// All registered users, in registration order. Only an ADMIN principal may list them.
#[tracing::instrument(skip(stores, principal), fields(username = %principal.username))]
pub async fn list_users_core(
    stores: &Stores,
    principal: &Principal,
) -> Result<Vec<User>, CoordinationError> {
    if !principal.is_admin() {
        tracing::debug!("Principal is not authorized to list users");
        return Err(CoordinationError::Forbidden.log());
    }

    UserStore::new(stores)
        .get_all_users()
        .await
        .map_err(|e| CoordinationError::Database(e.to_string()).log())
}
