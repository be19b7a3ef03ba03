//! Dashboard recommendation end to end: default profile, suppression
//! while a session is unfinished, same-day exclusion and performance
//! scaling fed by the progress log.

use reqwest::Client;
use serde_json::{json, Value};

mod common;
use common::utils::{
    create_trainer_and_login, create_workout_from_picks, seed_and_list_exercises, spawn_app,
};

async fn dashboard(address: &str, token: &str) -> Value {
    let client = Client::new();
    let response = client
        .get(format!("{}/dashboard/recommendation", address))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to load dashboard.");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    body["data"].clone()
}

fn beginner_exercise(exercises: &[Value]) -> (&str, &str) {
    let exercise = exercises
        .iter()
        .find(|ex| ex["difficulty"] == "beginner")
        .expect("seed catalog should contain a beginner exercise");
    (
        exercise["id"].as_str().unwrap(),
        exercise["name"].as_str().unwrap(),
    )
}

async fn run_full_session(address: &str, token: &str, workout_id: &str, exercise_name: &str) {
    let client = Client::new();
    let start = client
        .post(format!("{}/execution/start/{}", address, workout_id))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to start session.");
    assert!(start.status().is_success());

    let complete = client
        .post(format!("{}/execution/complete_exercise", address))
        .bearer_auth(token)
        .json(&json!({ "exercise_name": exercise_name }))
        .send()
        .await
        .expect("Failed to complete exercise.");
    assert!(complete.status().is_success());

    let finish = client
        .post(format!("{}/execution/finish", address))
        .bearer_auth(token)
        .json(&json!({ "confirmed": true }))
        .send()
        .await
        .expect("Failed to finish session.");
    assert!(finish.status().is_success());
}

#[tokio::test]
async fn fresh_beginner_gets_unscaled_recommendation() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let exercises = seed_and_list_exercises(&test_app.address, &trainer.token).await;
    let (exercise_id, _) = beginner_exercise(&exercises);

    create_workout_from_picks(&test_app.address, &trainer.token, "Leg Day", &[(exercise_id, 60)])
        .await;

    let data = dashboard(&test_app.address, &trainer.token).await;
    let recommendation = &data["recommendation"];
    assert_eq!(recommendation["name"], "Leg Day");
    // Default profile (age 30, beginner, empty progress) keeps the
    // catalog prescription untouched: multiplier 1.0
    assert_eq!(recommendation["exercises"][0]["sets"], 3);
    assert_eq!(recommendation["exercises"][0]["reps"], 10);
    assert_eq!(data["completed_today"], 0);
    assert_eq!(data["has_incomplete_workout"], false);
}

#[tokio::test]
async fn empty_catalog_of_workouts_recommends_nothing() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;

    let data = dashboard(&test_app.address, &trainer.token).await;
    assert!(data["recommendation"].is_null());
}

#[tokio::test]
async fn incomplete_session_suppresses_recommendation() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let exercises = seed_and_list_exercises(&test_app.address, &trainer.token).await;
    let (first_id, _) = beginner_exercise(&exercises);
    let second_id = exercises[1]["id"].as_str().unwrap();
    let workout = create_workout_from_picks(
        &test_app.address,
        &trainer.token,
        "Leg Day",
        &[(first_id, 0), (second_id, 0)],
    )
    .await;
    let client = Client::new();

    // Finish without completing anything: the record lands incomplete
    let start = client
        .post(format!(
            "{}/execution/start/{}",
            test_app.address,
            workout["id"].as_str().unwrap()
        ))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .expect("Failed to start session.");
    assert!(start.status().is_success());

    let finish = client
        .post(format!("{}/execution/finish", test_app.address))
        .bearer_auth(&trainer.token)
        .json(&json!({ "confirmed": true, "acknowledge_skipped": true }))
        .send()
        .await
        .expect("Failed to finish session.");
    assert!(finish.status().is_success());

    let data = dashboard(&test_app.address, &trainer.token).await;
    assert!(data["recommendation"].is_null());
    assert_eq!(data["has_incomplete_workout"], true);
}

#[tokio::test]
async fn workout_completed_today_is_not_recommended_again() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let exercises = seed_and_list_exercises(&test_app.address, &trainer.token).await;
    let (exercise_id, exercise_name) = beginner_exercise(&exercises);
    let workout = create_workout_from_picks(
        &test_app.address,
        &trainer.token,
        "Leg Day",
        &[(exercise_id, 0)],
    )
    .await;

    run_full_session(
        &test_app.address,
        &trainer.token,
        workout["id"].as_str().unwrap(),
        exercise_name,
    )
    .await;

    // The only workout in the catalog was completed today, so even the
    // widened availability pass has nothing to offer
    let data = dashboard(&test_app.address, &trainer.token).await;
    assert!(data["recommendation"].is_null());
    assert_eq!(data["completed_today"], 1);
}

#[tokio::test]
async fn strong_performance_scales_the_next_recommendation() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let exercises = seed_and_list_exercises(&test_app.address, &trainer.token).await;
    let (exercise_id, exercise_name) = beginner_exercise(&exercises);

    let first = create_workout_from_picks(
        &test_app.address,
        &trainer.token,
        "Leg Day",
        &[(exercise_id, 0)],
    )
    .await;
    create_workout_from_picks(
        &test_app.address,
        &trainer.token,
        "Leg Day B",
        &[(exercise_id, 0)],
    )
    .await;

    // A fully completed session logs performance 100, pushing the
    // average above 80 and the multiplier to 1.2
    run_full_session(
        &test_app.address,
        &trainer.token,
        first["id"].as_str().unwrap(),
        exercise_name,
    )
    .await;

    let data = dashboard(&test_app.address, &trainer.token).await;
    let recommendation = &data["recommendation"];
    assert_eq!(recommendation["name"], "Leg Day B");
    assert_eq!(recommendation["exercises"][0]["sets"], 4); // round(3 * 1.2)
    assert_eq!(recommendation["exercises"][0]["reps"], 12); // round(10 * 1.2)
}

#[tokio::test]
async fn suggestions_target_underworked_muscle_groups() {
    let test_app = spawn_app().await;
    let trainer = create_trainer_and_login(&test_app.address).await;
    let exercises = seed_and_list_exercises(&test_app.address, &trainer.token).await;
    let client = Client::new();

    // Make sure the muscle group collection is seeded
    let groups = client
        .get(format!("{}/muscle_groups", test_app.address))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .expect("Failed to list muscle groups.");
    assert!(groups.status().is_success());

    let chest = exercises
        .iter()
        .find(|ex| ex["muscle_groups"].as_array().unwrap().contains(&json!("Peito")))
        .unwrap();
    let legs = exercises
        .iter()
        .find(|ex| ex["muscle_groups"].as_array().unwrap().contains(&json!("Pernas")))
        .unwrap();

    let chest_day = create_workout_from_picks(
        &test_app.address,
        &trainer.token,
        "Chest Day",
        &[(chest["id"].as_str().unwrap(), 0)],
    )
    .await;
    create_workout_from_picks(
        &test_app.address,
        &trainer.token,
        "Leg Day",
        &[(legs["id"].as_str().unwrap(), 0)],
    )
    .await;

    run_full_session(
        &test_app.address,
        &trainer.token,
        chest_day["id"].as_str().unwrap(),
        chest["name"].as_str().unwrap(),
    )
    .await;

    let response = client
        .get(format!("{}/dashboard/suggestions", test_app.address))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .expect("Failed to load suggestions.");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    let suggestions = body["data"].as_array().unwrap();

    assert!(suggestions.iter().any(|w| w["name"] == "Leg Day"));
    assert!(suggestions.iter().all(|w| w["name"] != "Chest Day"));
}
