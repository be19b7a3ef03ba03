//! Registration, login and token handling.

use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

mod common;
use common::utils::{create_test_user_and_login, spawn_app};

#[tokio::test]
async fn register_and_login_works() {
    let test_app = spawn_app().await;
    let user = create_test_user_and_login(&test_app.address).await;
    assert!(!user.token.is_empty());
}

#[tokio::test]
async fn register_rejects_missing_fields() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/register_user", test_app.address))
        .json(&json!({
            "username": "",
            "password": "password123",
            "email": "someone@example.com"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let username = format!("user{}", Uuid::new_v4().simple());

    for (attempt, expected_success) in [(1, true), (2, false)] {
        let response = client
            .post(format!("{}/register_user", test_app.address))
            .json(&json!({
                "username": username,
                "password": "password123",
                "email": format!("{}-{}@example.com", username, attempt)
            }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().is_success(), expected_success);
    }
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let test_app = spawn_app().await;
    let user = create_test_user_and_login(&test_app.address).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/login", test_app.address))
        .json(&json!({
            "username": user.username,
            "password": "not-the-password"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn protected_routes_reject_missing_token() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/profile/me", test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn new_accounts_start_with_default_profile() {
    let test_app = spawn_app().await;
    let user = create_test_user_and_login(&test_app.address).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/profile/me", test_app.address))
        .bearer_auth(&user.token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse profile");
    let profile = &body["data"];
    assert_eq!(profile["role"], "student");
    assert_eq!(profile["age"], 30);
    assert_eq!(profile["fitness_level"], "beginner");
    assert_eq!(profile["progress"].as_array().map(Vec::len), Some(0));
}
