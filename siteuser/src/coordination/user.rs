use crate::password::hash_password;
use crate::registration::{FieldErrors, RegistrationForm, validate};
use crate::storage::Stores;
use crate::userdb::{User, UserError, UserStore};

use super::errors::CoordinationError;

/// Validate a registration form and persist the new user.
///
/// Validation failures, including a username that is already taken, come
/// back as [`CoordinationError::Validation`] so the form can be re-rendered.
#[tracing::instrument(skip(stores, form), fields(username = %form.username))]
pub async fn register_user_core(
    stores: &Stores,
    form: RegistrationForm,
) -> Result<User, CoordinationError> {
    let errors = validate(&form);
    if errors.has_errors() {
        return Err(CoordinationError::Validation(errors).log());
    }

    let users = UserStore::new(stores);
    if users.find_by_username(&form.username).await?.is_some() {
        return Err(username_taken());
    }

    let authority = form.granted_authority();
    let password_hash = hash_password(&form.password).await?;
    let user = User::new(
        form.username,
        password_hash,
        form.email,
        form.gender,
        form.is_admin,
        authority,
    );

    match users.save(user).await {
        Ok(saved) => Ok(saved),
        // Lost a race with a concurrent registration of the same name
        Err(UserError::Conflict(_)) => Err(username_taken()),
        Err(e) => Err(e.into()),
    }
}

fn username_taken() -> CoordinationError {
    let mut errors = FieldErrors::new();
    errors.add("username", "is already taken");
    CoordinationError::Validation(errors).log()
}
