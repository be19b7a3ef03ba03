use reqwest::Client;

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn backend_health_works() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/backend_health", test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}
