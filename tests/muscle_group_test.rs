//! Muscle group management: seeding, validation and the delete cascade
//! over exercise memberships.

use reqwest::Client;
use serde_json::{json, Value};

mod common;
use common::utils::{create_trainer_and_login, seed_and_list_exercises, spawn_app};

async fn list_muscle_groups(address: &str, token: &str) -> Vec<Value> {
    let client = Client::new();
    let response = client
        .get(format!("{}/muscle_groups", address))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to list muscle groups.");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse groups");
    body["data"].as_array().expect("No group list").clone()
}

async fn create_muscle_group(address: &str, token: &str, name: &str) -> Value {
    let client = Client::new();
    let response = client
        .post(format!("{}/muscle_groups", address))
        .bearer_auth(token)
        .json(&json!({
            "name": name,
            "image_background": "https://example.com/bg.png",
            "confirmed": true
        }))
        .send()
        .await
        .expect("Failed to create muscle group.");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    body["data"].clone()
}

#[tokio::test]
async fn empty_collection_is_seeded_on_first_list() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;

    let groups = list_muscle_groups(&test_app.address, &trainer.token).await;
    assert_eq!(groups.len(), 8);
    assert!(groups.iter().any(|g| g["name"] == "Pernas"));
}

#[tokio::test]
async fn create_requires_name_image_and_confirmation() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let client = Client::new();

    let missing_image = client
        .post(format!("{}/muscle_groups", test_app.address))
        .bearer_auth(&trainer.token)
        .json(&json!({
            "name": "Antebraço",
            "image_background": "",
            "confirmed": true
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(missing_image.status(), 400);

    let unconfirmed = client
        .post(format!("{}/muscle_groups", test_app.address))
        .bearer_auth(&trainer.token)
        .json(&json!({
            "name": "Antebraço",
            "image_background": "https://example.com/bg.png",
            "confirmed": false
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(unconfirmed.status(), 400);

    // Only the seeded groups exist, the rejected ones were never written
    let groups = list_muscle_groups(&test_app.address, &trainer.token).await;
    assert!(groups.iter().all(|g| g["name"] != "Antebraço"));
}

#[tokio::test]
async fn update_muscle_group_works() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let group = create_muscle_group(&test_app.address, &trainer.token, "Panturrilha").await;
    let client = Client::new();

    let response = client
        .put(format!(
            "{}/muscle_groups/{}",
            test_app.address,
            group["id"].as_str().unwrap()
        ))
        .bearer_auth(&trainer.token)
        .json(&json!({
            "name": "Panturrilhas",
            "image_background": "https://example.com/calves.png",
            "confirmed": true
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let groups = list_muscle_groups(&test_app.address, &trainer.token).await;
    assert!(groups.iter().any(|g| g["name"] == "Panturrilhas"));
}

#[tokio::test]
async fn deleting_a_group_scrubs_it_from_exercises_but_keeps_other_memberships() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let exercises = seed_and_list_exercises(&test_app.address, &trainer.token).await;
    let exercise_id = exercises[0]["id"].as_str().unwrap().to_string();
    let client = Client::new();

    let doomed = create_muscle_group(&test_app.address, &trainer.token, "Cardio").await;
    let survivor = create_muscle_group(&test_app.address, &trainer.token, "Mobilidade").await;

    for group in [&doomed, &survivor] {
        let response = client
            .post(format!("{}/muscle_groups/assign_exercise", test_app.address))
            .bearer_auth(&trainer.token)
            .json(&json!({
                "exercise_id": exercise_id,
                "muscle_group_id": group["id"],
                "confirmed": true
            }))
            .send()
            .await
            .expect("Failed to assign exercise.");
        assert!(response.status().is_success());
    }

    let delete = client
        .delete(format!(
            "{}/muscle_groups/{}?confirm=true",
            test_app.address,
            doomed["id"].as_str().unwrap()
        ))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(delete.status().is_success());

    let catalog = seed_and_list_exercises(&test_app.address, &trainer.token).await;
    let exercise = catalog
        .iter()
        .find(|ex| ex["id"].as_str() == Some(exercise_id.as_str()))
        .unwrap();
    let memberships: Vec<&str> = exercise["muscle_groups"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(!memberships.contains(&"Cardio"));
    assert!(memberships.contains(&"Mobilidade"));
}
