/**
 * Tweet Model and Database Operations
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// A tweet record.
///
/// Serialized with camelCase field names to match the wire format.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    /// Unique tweet id
    pub id: Uuid,
    /// Author: always the verified token subject
    pub user_id: Uuid,
    /// Tweet text, non-blank after trim
    pub text: String,
    /// Created-at timestamp
    pub created_at: DateTime<Utc>,
}

/// Insert a new tweet authored by `user_id`.
///
/// Text validation happens in the handler; this inserts as given.
pub async fn create_tweet(
    pool: &SqlitePool,
    user_id: Uuid,
    text: &str,
) -> Result<Tweet, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let tweet = sqlx::query_as::<_, Tweet>(
        r#"
        INSERT INTO tweets (id, user_id, text, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, text, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(text)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(tweet)
}

/// List all tweets in creation order. No pagination.
pub async fn list_tweets(pool: &SqlitePool) -> Result<Vec<Tweet>, sqlx::Error> {
    let tweets = sqlx::query_as::<_, Tweet>(
        r#"
        SELECT id, user_id, text, created_at
        FROM tweets
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(tweets)
}
