// src/handlers/auth_handler.rs
use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::jwt::JwtSettings;
use crate::middleware::auth::Claims;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::user::Role;
use crate::utils::password::verify_password;

/// Issue an HS256 token carrying the user's id, name and role. Also
/// used after a role toggle so the client keeps a token that matches
/// its new capabilities.
pub fn issue_token(
    user_id: Uuid,
    username: &str,
    role: Role,
    jwt_settings: &JwtSettings,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = (Utc::now() + Duration::hours(jwt_settings.expiration_hours)).timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        role,
        exp: expiration as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    )
}

#[tracing::instrument(
    name = "Login user attempt",
    skip(login_form, pool, jwt_settings),
    fields(
        username = %login_form.username
    )
)]
pub async fn login_user(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    let user_result = sqlx::query_as::<_, (Uuid, String, String, String)>(
        r#"
        SELECT id, username, password_hash, role
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(&login_form.username)
    .fetch_optional(pool.get_ref())
    .await;

    // Return database error to user as 500
    let (user_id, username, password_hash, role) = match user_result {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!("User not found or invalid credentials");
            return HttpResponse::Unauthorized().finish();
        }
        Err(e) => {
            tracing::error!("Database error occurred: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    if !verify_password(login_form.password.expose_secret(), &password_hash) {
        tracing::info!("Invalid password");
        return HttpResponse::Unauthorized().finish();
    }

    let token = match issue_token(
        user_id,
        &username,
        Role::parse_lossy(&role),
        jwt_settings.get_ref(),
    ) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Error generating JWT token: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    HttpResponse::Ok().json(LoginResponse { token })
}
