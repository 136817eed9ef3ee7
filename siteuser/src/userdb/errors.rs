use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum UserError {
    #[error("Username already exists: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        UserError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sqlx_error() {
        let user_error = UserError::from(sqlx::Error::RowNotFound);
        assert!(matches!(user_error, UserError::Storage(_)));
    }

    #[test]
    fn test_conflict_display_names_the_username() {
        let err = UserError::Conflict("Harada".to_string());
        assert_eq!(err.to_string(), "Username already exists: Harada");
    }
}
