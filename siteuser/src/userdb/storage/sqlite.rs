use sqlx::{Pool, Sqlite};

use crate::storage::validate_sqlite_table_schema;
use crate::userdb::{
    errors::UserError,
    types::{User, UserSearchField},
};

use super::config::DB_TABLE_USERS;
use super::map_insert_error;

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            sequence_number INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            email TEXT NOT NULL,
            gender INTEGER NOT NULL DEFAULT 0,
            is_admin BOOLEAN NOT NULL DEFAULT false,
            authority TEXT NOT NULL DEFAULT 'USER',
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

/// Validates that the User table schema matches what we expect
pub(super) async fn validate_user_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let expected_columns = [
        ("sequence_number", "INTEGER"),
        ("username", "TEXT"),
        ("password", "TEXT"),
        ("email", "TEXT"),
        ("gender", "INTEGER"),
        ("is_admin", "BOOLEAN"),
        ("authority", "TEXT"),
        ("created_at", "TIMESTAMP"),
        ("updated_at", "TIMESTAMP"),
    ];

    validate_sqlite_table_schema(
        pool,
        DB_TABLE_USERS.as_str(),
        &expected_columns,
        UserError::Storage,
    )
    .await
}

pub(super) async fn get_all_users_sqlite(pool: &Pool<Sqlite>) -> Result<Vec<User>, UserError> {
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

pub(super) async fn get_user_by_field_sqlite(
    pool: &Pool<Sqlite>,
    field: &UserSearchField,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let user = match field {
        UserSearchField::Username(username) => {
            sqlx::query_as::<_, User>(&format!(
                r#"
                SELECT * FROM {table_name} WHERE username = ?
                "#
            ))
            .bind(username)
            .fetch_optional(pool)
            .await?
        }
    };

    Ok(user)
}

/// Insert a new user inside a single transaction and read it back with its sequence number
pub(super) async fn insert_user_sqlite(pool: &Pool<Sqlite>, user: User) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();
    let mut tx = pool.begin().await?;

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name}
            (username, password, email, gender, is_admin, authority, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
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
    .execute(&mut *tx)
    .await
    .map_err(|e| map_insert_error(e, &user.username))?;

    let saved = sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE username = ?
        "#
    ))
    .bind(&user.username)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(saved)
}
