use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::completed_workout::WorkoutStatus;
use crate::utils::parse_user::parse_user_id;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// `completed`, `incomplete` or `all` (default).
    pub status: Option<String>,
}

#[tracing::instrument(
    name = "Get workout history",
    skip(pool, claims, query),
    fields(username = %claims.username)
)]
pub async fn get_history(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    query: web::Query<HistoryQuery>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let status = match query.status.as_deref() {
        None | Some("all") => None,
        Some("completed") => Some(WorkoutStatus::Completed),
        Some("incomplete") => Some(WorkoutStatus::Incomplete),
        Some(other) => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error(format!(
                "Unknown status filter: {other}"
            )));
        }
    };

    match db::completed_workouts::list_for_owner(&pool, user_id, status).await {
        Ok(history) => HttpResponse::Ok().json(ApiResponse::success("Workout history", history)),
        Err(e) => {
            tracing::error!("Database error listing workout history: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load workout history"))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[tracing::instrument(
    name = "Delete history entry",
    skip(pool, claims, query),
    fields(username = %claims.username, entry_id = %path)
)]
pub async fn delete_history_entry(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    query: web::Query<DeleteConfirmQuery>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let entry_id = path.into_inner();

    if !query.confirm {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Confirm removing this workout from history first",
        ));
    }

    match db::completed_workouts::delete(&pool, entry_id, user_id).await {
        Ok(true) => {
            HttpResponse::Ok().json(ApiResponse::<()>::success_message("Removed from history"))
        }
        Ok(false) => HttpResponse::NotFound().json(json!({
            "error": "History entry not found"
        })),
        Err(e) => {
            tracing::error!("Database error deleting history entry: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete history entry"))
        }
    }
}
