/**
 * User Model and Database Operations
 *
 * User records are created at signup and immutable afterwards; there are no
 * update or delete operations. Uniqueness of username and email is enforced
 * by the store's UNIQUE constraints; a violation surfaces as
 * `sqlx::Error::Database` with `is_unique_violation()`, which the error
 * module maps to a conflict response.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A user record as stored.
///
/// `password_hash` never leaves the server; response types carry only the
/// public profile fields, so this type is deliberately not serializable.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user id
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unique username
    pub username: String,
    /// Unique email address
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Created-at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user.
///
/// # Errors
///
/// A duplicate username or email yields a database error whose
/// `is_unique_violation()` is true; other errors indicate store failure.
pub async fn create_user(
    pool: &SqlitePool,
    name: String,
    username: String,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, username, email, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, username, email, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(&name)
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Look up a user by email.
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, username, email, password_hash, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
