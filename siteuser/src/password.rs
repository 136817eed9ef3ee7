use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use argon2::Argon2;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),

    #[error("Password worker failed: {0}")]
    Task(String),
}

/// Hash a plaintext password into an Argon2id PHC string with a fresh salt.
///
/// Argon2 is CPU bound, so the work runs on the blocking thread pool.
pub(crate) async fn hash_password(password: &str) -> Result<String, PasswordError> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || hash_password_sync(&password))
        .await
        .map_err(|err| PasswordError::Task(err.to_string()))?
}

/// Check a plaintext password against a stored PHC string on the blocking pool
pub(crate) async fn verify_password(
    password: &str,
    stored_hash: &str,
) -> Result<bool, PasswordError> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    tokio::task::spawn_blocking(move || verify_password_sync(&password, &stored_hash))
        .await
        .map_err(|err| PasswordError::Task(err.to_string()))?
}

fn hash_password_sync(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| PasswordError::Hash(err.to_string()))?;
    Ok(hash.to_string())
}

fn verify_password_sync(password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| PasswordError::MalformedHash(err.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
