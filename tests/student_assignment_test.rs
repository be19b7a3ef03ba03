//! Trainer/student management: listing, claiming and workout assignment.

use reqwest::Client;
use serde_json::{json, Value};

mod common;
use common::utils::{
    create_test_user_and_login, create_trainer_and_login, create_workout_from_picks,
    seed_and_list_exercises, spawn_app,
};

async fn find_student(address: &str, trainer_token: &str, username: &str) -> Value {
    let client = Client::new();
    let response = client
        .get(format!("{}/students?search={}", address, username))
        .bearer_auth(trainer_token)
        .send()
        .await
        .expect("Failed to list students.");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    let students = body["data"].as_array().unwrap();
    assert_eq!(students.len(), 1, "expected exactly one student match");
    students[0].clone()
}

#[tokio::test]
async fn unclaimed_students_are_visible_and_claimable() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let student = create_test_user_and_login(&test_app.address).await;
    let client = Client::new();

    let listed = find_student(&test_app.address, &trainer.token, &student.username).await;
    assert!(listed["trainer_id"].is_null());

    let claim = client
        .post(format!(
            "{}/students/{}/claim",
            test_app.address,
            listed["id"].as_str().unwrap()
        ))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .expect("Failed to claim student.");
    assert!(claim.status().is_success());

    let listed = find_student(&test_app.address, &trainer.token, &student.username).await;
    assert!(!listed["trainer_id"].is_null());
}

#[tokio::test]
async fn search_filters_by_username() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let student_a = create_test_user_and_login(&test_app.address).await;
    let _student_b = create_test_user_and_login(&test_app.address).await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/students?search={}",
            test_app.address, student_a.username
        ))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .expect("Failed to list students.");
    let body: Value = response.json().await.unwrap();
    let students = body["data"].as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["username"], student_a.username.as_str());
}

#[tokio::test]
async fn assignment_requires_workouts_or_a_group() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let student = create_test_user_and_login(&test_app.address).await;
    let listed = find_student(&test_app.address, &trainer.token, &student.username).await;
    let client = Client::new();

    let response = client
        .post(format!(
            "{}/students/{}/assign",
            test_app.address,
            listed["id"].as_str().unwrap()
        ))
        .bearer_auth(&trainer.token)
        .json(&json!({ "confirmed": true }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn repeated_assignment_keeps_the_set_deduplicated() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let student = create_test_user_and_login(&test_app.address).await;
    let exercises = seed_and_list_exercises(&test_app.address, &trainer.token).await;
    let exercise_id = exercises[0]["id"].as_str().unwrap();
    let workout = create_workout_from_picks(
        &test_app.address,
        &trainer.token,
        "Leg Day",
        &[(exercise_id, 60)],
    )
    .await;
    let listed = find_student(&test_app.address, &trainer.token, &student.username).await;
    let student_id = listed["id"].as_str().unwrap().to_string();
    let client = Client::new();

    for _ in 0..2 {
        let response = client
            .post(format!(
                "{}/students/{}/assign",
                test_app.address, student_id
            ))
            .bearer_auth(&trainer.token)
            .json(&json!({
                "workout_ids": [workout["id"]],
                "confirmed": true
            }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert!(response.status().is_success());
    }

    let listed = find_student(&test_app.address, &trainer.token, &student.username).await;
    assert_eq!(listed["workout_ids"].as_array().unwrap().len(), 1);
}
