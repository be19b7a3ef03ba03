use once_cell::sync::Lazy;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;

use muscleminds_backend::config::settings::{get_config, get_jwt_settings, DatabaseSettings};
use muscleminds_backend::run;
use muscleminds_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    let connection_pool = configure_db(&configuration.database).await;
    let jwt_settings = get_jwt_settings(&configuration);
    let server =
        run(listener, connection_pool.clone(), jwt_settings).expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);
    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(&config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

#[derive(Debug, Clone)]
pub struct TestUser {
    pub username: String,
    pub token: String,
}

pub async fn create_test_user_and_login(app_address: &str) -> TestUser {
    let client = Client::new();
    let username = format!("user{}", Uuid::new_v4().simple());
    let password = "password123";
    let email = format!("{}@example.com", username);

    let register_response = client
        .post(format!("{}/register_user", app_address))
        .json(&json!({
            "username": username,
            "password": password,
            "email": email
        }))
        .send()
        .await
        .expect("Failed to register user.");
    assert!(register_response.status().is_success());

    let login_response = client
        .post(format!("{}/login", app_address))
        .json(&json!({
            "username": username,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to execute login request.");

    let login_response: Value = login_response
        .json()
        .await
        .expect("Failed to parse login response");
    let token = login_response["token"]
        .as_str()
        .expect("No token in response");

    TestUser {
        username,
        token: token.to_string(),
    }
}

/// Flip a freshly registered student into a trainer and return the user
/// with the refreshed token the toggle endpoint hands back.
pub async fn promote_to_trainer(app_address: &str, user: &TestUser) -> TestUser {
    let client = Client::new();
    let response = client
        .post(format!("{}/profile/role_toggle", app_address))
        .bearer_auth(&user.token)
        .send()
        .await
        .expect("Failed to toggle role.");
    assert!(response.status().is_success());

    let body: Value = response
        .json()
        .await
        .expect("Failed to parse toggle response");
    let token = body["data"]["token"]
        .as_str()
        .expect("No refreshed token in toggle response");

    TestUser {
        username: user.username.clone(),
        token: token.to_string(),
    }
}

pub async fn create_trainer_and_login(app_address: &str) -> TestUser {
    let user = create_test_user_and_login(app_address).await;
    promote_to_trainer(app_address, &user).await
}

/// Seed the exercise catalog (the first list call seeds defaults) and
/// return the exercises as JSON values.
pub async fn seed_and_list_exercises(app_address: &str, token: &str) -> Vec<Value> {
    let client = Client::new();
    let response = client
        .get(format!("{}/exercises", app_address))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to list exercises.");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse exercises");
    body["data"].as_array().expect("No exercise list").clone()
}

/// Create a workout from explicit (exercise_id, rest override) picks.
/// Returns the created workout as JSON.
pub async fn create_workout_from_picks(
    app_address: &str,
    token: &str,
    name: &str,
    picks: &[(&str, i64)],
) -> Value {
    let client = Client::new();
    let exercises: Vec<Value> = picks
        .iter()
        .map(|(id, rest)| json!({ "exercise_id": id, "rest": rest }))
        .collect();

    let response = client
        .post(format!("{}/workouts", app_address))
        .bearer_auth(token)
        .json(&json!({
            "name": name,
            "exercises": exercises,
            "confirmed": true
        }))
        .send()
        .await
        .expect("Failed to create workout.");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse workout");
    body["data"].clone()
}
