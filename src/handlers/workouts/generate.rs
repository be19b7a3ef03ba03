use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::workout::AutoGenerateRequest;
use crate::utils::parse_user::parse_user_id;
use crate::workout::generator::{auto_workout_name, generate_exercises, AUTO_WORKOUT_SIZE};

/// Build a workout from a random catalog sample. The one intentionally
/// non-deterministic operation in the product.
#[tracing::instrument(
    name = "Auto-generate workout",
    skip(pool, claims, data),
    fields(username = %claims.username)
)]
pub async fn auto_generate_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<AutoGenerateRequest>,
) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if !data.confirmed {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Confirm the workout generation first"));
    }

    let catalog = match db::exercises::list(&pool).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Database error listing exercises: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load exercises"));
        }
    };

    let snapshots = match generate_exercises(&catalog, &mut rand::thread_rng()) {
        Some(snapshots) => snapshots,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error(format!(
                "At least {AUTO_WORKOUT_SIZE} catalog exercises are needed to generate a workout"
            )));
        }
    };

    let name = auto_workout_name(Utc::now());
    let workout_id =
        match db::workouts::insert(&pool, &name, &snapshots, trainer_id, None, None).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Database error creating auto workout: {}", e);
                return HttpResponse::InternalServerError()
                    .json(ApiResponse::<()>::error("Failed to create workout"));
            }
        };

    match db::workouts::get(&pool, workout_id).await {
        Ok(Some(workout)) => {
            HttpResponse::Ok().json(ApiResponse::success("Auto workout created", workout))
        }
        Ok(None) | Err(_) => HttpResponse::Ok().json(ApiResponse::success(
            "Auto workout created",
            serde_json::json!({ "id": workout_id }),
        )),
    }
}
