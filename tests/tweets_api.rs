//! Tweets API integration tests
//!
//! Covers the authentication gate on both tweet endpoints, text validation,
//! and that authorship always comes from the token subject.

mod common;

use axum::http::StatusCode;
use common::{auth_header, signup_user, test_server, test_server_with_pool};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_list_tweets_without_header_is_unauthorized() {
    let server = test_server().await;

    let response = server.get("/tweets").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_tweet_without_header_is_unauthorized() {
    let (server, pool) = test_server_with_pool().await;

    let response = server
        .post("/tweets")
        .json(&serde_json::json!({ "text": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    // The store was never touched
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tweets")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_create_and_list_tweet() {
    let server = test_server().await;

    let signup_body = signup_user(&server, "ada", "ada@example.com", "hunter2").await;
    let token = signup_body["accessToken"].as_str().unwrap();

    let response = server
        .post("/tweets")
        .add_header("Authorization", auth_header(token))
        .json(&serde_json::json!({ "text": "hello world" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    assert_eq!(created["text"], "hello world");
    assert_eq!(created["userId"], signup_body["id"]);

    let list_response = server
        .get("/tweets")
        .add_header("Authorization", auth_header(token))
        .await;

    assert_eq!(list_response.status_code(), StatusCode::OK);
    let tweets: serde_json::Value = list_response.json();
    assert_eq!(tweets.as_array().unwrap().len(), 1);
    assert_eq!(tweets[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_blank_text_is_rejected_and_creates_no_record() {
    let (server, pool) = test_server_with_pool().await;

    let signup_body = signup_user(&server, "ada", "ada@example.com", "hunter2").await;
    let token = signup_body["accessToken"].as_str().unwrap();

    for text in ["", "   ", "\n\t "] {
        let response = server
            .post("/tweets")
            .add_header("Authorization", auth_header(token))
            .json(&serde_json::json!({ "text": text }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tweets")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_author_comes_from_token_not_body() {
    let server = test_server().await;

    let ada = signup_user(&server, "ada", "ada@example.com", "hunter2").await;
    let eve = signup_user(&server, "eve", "eve@example.com", "hunter2").await;

    // Eve posts a tweet claiming Ada's id in the body; the field is ignored
    let response = server
        .post("/tweets")
        .add_header("Authorization", auth_header(eve["accessToken"].as_str().unwrap()))
        .json(&serde_json::json!({
            "text": "impersonation attempt",
            "userId": ada["id"],
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    assert_eq!(created["userId"], eve["id"]);
}

#[tokio::test]
async fn test_tampered_token_is_unauthorized() {
    let server = test_server().await;

    let signup_body = signup_user(&server, "ada", "ada@example.com", "hunter2").await;
    let token = signup_body["accessToken"].as_str().unwrap();

    // Flip the last character of the signature segment
    let mut tampered = token.to_string();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = server
        .get("/tweets")
        .add_header("Authorization", auth_header(&tampered))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
