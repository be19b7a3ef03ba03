use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::utils::parse_user::parse_user_id;
use crate::workout::suggestion::suggest_for_underworked_groups;

/// Workouts targeting muscle groups the user has not trained yet.
#[tracing::instrument(
    name = "Get workout suggestions",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_suggestions(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let completed = match db::completed_workouts::list_for_owner(&pool, user_id, None).await {
        Ok(completed) => completed,
        Err(e) => {
            tracing::error!("Database error listing completed workouts: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load suggestions"));
        }
    };

    let muscle_groups = match db::muscle_groups::list(&pool).await {
        Ok(groups) => groups,
        Err(e) => {
            tracing::error!("Database error listing muscle groups: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load suggestions"));
        }
    };

    let workouts = match db::workouts::list_by_trainer(&pool, user_id).await {
        Ok(workouts) => workouts,
        Err(e) => {
            tracing::error!("Database error listing workouts: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load suggestions"));
        }
    };

    let suggestions = suggest_for_underworked_groups(&workouts, &muscle_groups, &completed);
    HttpResponse::Ok().json(ApiResponse::success("Suggestions", suggestions))
}
