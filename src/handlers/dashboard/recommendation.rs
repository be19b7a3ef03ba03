use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use sqlx::PgPool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::completed_workout::WorkoutStatus;
use crate::models::workout::Workout;
use crate::utils::parse_user::parse_user_id;
use crate::workout::recommendation::{completed_today_count, recommend_workout};

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    /// At most one suggested workout, reps/sets already scaled by the
    /// intensity multiplier. None while a session is unfinished or when
    /// nothing is available.
    pub recommendation: Option<Workout>,
    pub completed_today: usize,
    pub has_incomplete_workout: bool,
}

#[tracing::instrument(
    name = "Get dashboard recommendation",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_recommendation(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
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
                .json(ApiResponse::<()>::error("Failed to load dashboard"));
        }
    };

    let workouts = match db::workouts::list_by_trainer(&pool, user_id).await {
        Ok(workouts) => workouts,
        Err(e) => {
            tracing::error!("Database error listing workouts: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load dashboard"));
        }
    };

    let exercises = match db::exercises::list(&pool).await {
        Ok(exercises) => exercises,
        Err(e) => {
            tracing::error!("Database error listing exercises: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load dashboard"));
        }
    };

    let completed = match db::completed_workouts::list_for_owner(&pool, user_id, None).await {
        Ok(completed) => completed,
        Err(e) => {
            tracing::error!("Database error listing completed workouts: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load dashboard"));
        }
    };

    let now = Utc::now();
    let response = RecommendationResponse {
        recommendation: recommend_workout(&profile, &workouts, &exercises, &completed, now),
        completed_today: completed_today_count(&completed, now),
        has_incomplete_workout: completed
            .iter()
            .any(|cw| cw.status == WorkoutStatus::Incomplete),
    };

    HttpResponse::Ok().json(ApiResponse::success("Dashboard", response))
}
