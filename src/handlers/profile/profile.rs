use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::db;
use crate::handlers::auth_handler::issue_token;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::user::UpdateProfileRequest;
use crate::utils::parse_user::parse_user_id;

#[tracing::instrument(
    name = "Get own profile",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_my_profile(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match db::users::get_profile(&pool, user_id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(ApiResponse::success("Profile", profile)),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "error": "User profile not found"
        })),
        Err(e) => {
            tracing::error!("Database error fetching profile: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch profile"))
        }
    }
}

#[tracing::instrument(
    name = "Update own profile",
    skip(pool, claims, data),
    fields(username = %claims.username)
)]
pub async fn update_my_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<UpdateProfileRequest>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if let Some(age) = data.age {
        if age <= 0 {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Age must be positive"));
        }
    }

    if let Err(e) = db::users::update_profile(&pool, user_id, data.age, data.fitness_level).await {
        tracing::error!("Database error updating profile: {}", e);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Failed to update profile"));
    }

    match db::users::get_profile(&pool, user_id).await {
        Ok(Some(profile)) => {
            HttpResponse::Ok().json(ApiResponse::success("Profile updated", profile))
        }
        Ok(None) => HttpResponse::NotFound().json(json!({
            "error": "User profile not found"
        })),
        Err(e) => {
            tracing::error!("Database error fetching profile: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch profile"))
        }
    }
}

/// Flip between trainer and student. The response carries a fresh token
/// because the old one still claims the previous role.
#[tracing::instrument(
    name = "Toggle role",
    skip(pool, claims, jwt_settings),
    fields(username = %claims.username)
)]
pub async fn toggle_role(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let profile = match db::users::get_profile(&pool, user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({
                "error": "User profile not found"
            }));
        }
        Err(e) => {
            tracing::error!("Database error fetching profile: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch profile"));
        }
    };

    let new_role = profile.role.toggled();
    if let Err(e) = db::users::set_role(&pool, user_id, new_role).await {
        tracing::error!("Database error updating role: {}", e);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Failed to update role"));
    }

    let token = match issue_token(user_id, &claims.username, new_role, jwt_settings.get_ref()) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Error generating JWT token after role toggle: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to refresh session"));
        }
    };

    HttpResponse::Ok().json(ApiResponse::success(
        "Role updated",
        json!({ "role": new_role, "token": token }),
    ))
}
