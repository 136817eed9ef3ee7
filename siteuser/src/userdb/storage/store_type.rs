use std::sync::Arc;

use crate::storage::{DataStore, Stores};
use crate::userdb::{
    errors::UserError,
    types::{User, UserSearchField},
};

use super::postgres::*;
use super::sqlite::*;

/// Persistent user records
#[derive(Clone)]
pub struct UserStore {
    data: Arc<dyn DataStore>,
}

impl UserStore {
    pub fn new(stores: &Stores) -> Self {
        Self {
            data: stores.data.clone(),
        }
    }

    /// Create the user table if missing and check its schema
    pub async fn init(&self) -> Result<(), UserError> {
        match (self.data.as_sqlite(), self.data.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool).await?;
                validate_user_tables_sqlite(pool).await
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool).await?;
                validate_user_tables_postgres(pool).await
            }
            _ => Err(UserError::Storage("Unsupported database type".to_string())),
        }
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, UserError> {
        if let Some(pool) = self.data.as_sqlite() {
            get_all_users_sqlite(pool).await
        } else if let Some(pool) = self.data.as_postgres() {
            get_all_users_postgres(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Find the user whose username matches exactly
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        self.get_user_by(UserSearchField::Username(username.to_string()))
            .await
    }

    #[tracing::instrument(skip(self), fields(user_field = %field))]
    pub(crate) async fn get_user_by(&self, field: UserSearchField) -> Result<Option<User>, UserError> {
        let result = if let Some(pool) = self.data.as_sqlite() {
            get_user_by_field_sqlite(pool, &field).await
        } else if let Some(pool) = self.data.as_postgres() {
            get_user_by_field_postgres(pool, &field).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(Some(_)) => tracing::debug!(found = true, "User lookup completed"),
            Ok(None) => tracing::debug!(found = false, "User lookup completed - not found"),
            Err(e) => tracing::error!(error = %e, "User lookup failed"),
        }

        result
    }

    /// Insert a new user. An existing username is a conflict, never overwritten.
    #[tracing::instrument(skip(self, user), fields(username = %user.username))]
    pub async fn save(&self, user: User) -> Result<User, UserError> {
        let result = if let Some(pool) = self.data.as_sqlite() {
            insert_user_sqlite(pool, user).await
        } else if let Some(pool) = self.data.as_postgres() {
            insert_user_postgres(pool, user).await
        } else {
            return Err(UserError::Storage("Unsupported database type".to_string()));
        };

        match &result {
            Ok(user) => tracing::info!(
                sequence_number = user.sequence_number,
                authority = %user.authority,
                "User saved"
            ),
            Err(e) => tracing::error!(error = %e, "User save failed"),
        }

        result
    }
}
