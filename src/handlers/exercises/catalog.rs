use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;

/// List the exercise catalog, seeding the starter exercises the first
/// time anyone looks at an empty catalog.
#[tracing::instrument(
    name = "List exercises",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_exercises(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    if let Err(e) = db::seed::seed_exercises_if_empty(&pool).await {
        tracing::error!("Failed to seed exercise catalog: {}", e);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Failed to load exercises"));
    }

    match db::exercises::list(&pool).await {
        Ok(exercises) => HttpResponse::Ok().json(ApiResponse::success("Exercises", exercises)),
        Err(e) => {
            tracing::error!("Database error listing exercises: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load exercises"))
        }
    }
}
