use actix_web::{web, HttpResponse};
use chrono::Utc;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::common::ApiResponse;
use crate::models::user::{FitnessLevel, RegistrationRequest, Role};
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    if user_form.username.trim().is_empty()
        || user_form.email.trim().is_empty()
        || user_form.password.expose_secret().is_empty()
    {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Username, email and password are required",
        ));
    }

    match insert_user(&user_form, &pool).await {
        Ok(user_id) => HttpResponse::Ok().json(ApiResponse::success(
            "Account created",
            serde_json::json!({ "user_id": user_id }),
        )),
        Err(e) if is_unique_violation(&e) => {
            tracing::info!("Registration rejected, username or email taken");
            HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Username or email already taken"))
        }
        Err(e) => {
            tracing::error!("Failed to register user: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create account"))
        }
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// New accounts start as students with the default coaching profile:
/// age 30, beginner, no trainer, nothing assigned, empty progress log.
async fn insert_user(
    user_form: &web::Json<RegistrationRequest>,
    pool: &PgPool,
) -> Result<Uuid, sqlx::Error> {
    let user_id = Uuid::new_v4();
    let password_hash = hash_password(user_form.password.expose_secret()).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        sqlx::Error::Protocol("password hashing failed".into())
    })?;

    sqlx::query(
        r#"
        INSERT INTO users
            (id, username, email, password_hash, role, age, fitness_level, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        "#,
    )
    .bind(user_id)
    .bind(&user_form.username)
    .bind(&user_form.email)
    .bind(&password_hash)
    .bind(Role::Student.to_string())
    .bind(30_i32)
    .bind(FitnessLevel::Beginner.to_string())
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute user insert query: {:?}", e);
        e
    })?;

    Ok(user_id)
}
