use sqlx::{Pool, Postgres};

use crate::storage::validate_postgres_table_schema;
use crate::userdb::{
    errors::UserError,
    types::{User, UserSearchField},
};

use super::config::DB_TABLE_USERS;
use super::map_insert_error;

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            sequence_number BIGSERIAL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            email TEXT NOT NULL,
            gender INTEGER NOT NULL DEFAULT 0,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE,
            authority TEXT NOT NULL DEFAULT 'USER',
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

/// Validates that the User table schema matches what we expect
pub(super) async fn validate_user_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let expected_columns = [
        ("sequence_number", "bigint"),
        ("username", "text"),
        ("password", "text"),
        ("email", "text"),
        ("gender", "integer"),
        ("is_admin", "boolean"),
        ("authority", "text"),
        ("created_at", "timestamp with time zone"),
        ("updated_at", "timestamp with time zone"),
    ];

    validate_postgres_table_schema(
        pool,
        DB_TABLE_USERS.as_str(),
        &expected_columns,
        UserError::Storage,
    )
    .await
}

pub(super) async fn get_all_users_postgres(pool: &Pool<Postgres>) -> Result<Vec<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let users = sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {table_name} ORDER BY sequence_number ASC
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub(super) async fn get_user_by_field_postgres(
    pool: &Pool<Postgres>,
    field: &UserSearchField,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let user = match field {
        UserSearchField::Username(username) => {
            sqlx::query_as::<_, User>(&format!(
                r#"
                SELECT * FROM {table_name} WHERE username = $1
                "#
            ))
            .bind(username)
            .fetch_optional(pool)
            .await?
        }
    };

    Ok(user)
}

pub(super) async fn insert_user_postgres(
    pool: &Pool<Postgres>,
    user: User,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();
    let mut tx = pool.begin().await?;

    let saved = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO {table_name}
            (username, password, email, gender, is_admin, authority, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#
    ))
    .bind(&user.username)
    .bind(&user.password)
    .bind(&user.email)
    .bind(user.gender)
    .bind(user.is_admin)
    .bind(user.authority.as_str())
    .bind(user.created_at)
    .bind(user.updated_at)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| map_insert_error(e, &user.username))?;

    tx.commit().await?;

    Ok(saved)
}
