use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::exercise::ExerciseSnapshot;
use crate::models::workout::{CreateWorkoutRequest, ExerciseSelection, UpdateWorkoutRequest};
use crate::utils::parse_user::parse_user_id;

#[tracing::instrument(
    name = "List workouts",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_workouts(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match db::workouts::list_by_trainer(&pool, trainer_id).await {
        Ok(workouts) => HttpResponse::Ok().json(ApiResponse::success("Workouts", workouts)),
        Err(e) => {
            tracing::error!("Database error listing workouts: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load workouts"))
        }
    }
}

#[tracing::instrument(
    name = "Create workout",
    skip(pool, claims, data),
    fields(username = %claims.username, workout_name = %data.name)
)]
pub async fn create_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<CreateWorkoutRequest>,
) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if data.name.trim().is_empty() || data.exercises.is_empty() {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Enter a name and select at least one exercise",
        ));
    }
    if !data.confirmed {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Confirm the workout creation first"));
    }

    let snapshots = match snapshot_selections(&pool, &data.exercises).await {
        Ok(snapshots) => snapshots,
        Err(response) => return response,
    };

    let workout_id =
        match db::workouts::insert(&pool, data.name.trim(), &snapshots, trainer_id, None, None)
            .await
        {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Database error creating workout: {}", e);
                return HttpResponse::InternalServerError()
                    .json(ApiResponse::<()>::error("Failed to create workout"));
            }
        };

    match db::workouts::get(&pool, workout_id).await {
        Ok(Some(workout)) => HttpResponse::Ok().json(ApiResponse::success("Workout created", workout)),
        Ok(None) => HttpResponse::Ok().json(ApiResponse::success(
            "Workout created",
            json!({ "id": workout_id }),
        )),
        Err(e) => {
            tracing::error!("Database error fetching created workout: {}", e);
            HttpResponse::Ok().json(ApiResponse::success(
                "Workout created",
                json!({ "id": workout_id }),
            ))
        }
    }
}

/// Editing re-snapshots the exercise list: the stored copies are
/// replaced wholesale with fresh value copies of the current catalog
/// entries.
#[tracing::instrument(
    name = "Update workout",
    skip(pool, claims, data),
    fields(username = %claims.username, workout_id = %path)
)]
pub async fn update_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<UpdateWorkoutRequest>,
) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let workout_id = path.into_inner();

    if data.name.trim().is_empty() || data.exercises.is_empty() {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Enter a name and select at least one exercise",
        ));
    }
    if !data.confirmed {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Confirm the workout edit first"));
    }

    let snapshots = match snapshot_selections(&pool, &data.exercises).await {
        Ok(snapshots) => snapshots,
        Err(response) => return response,
    };

    match db::workouts::update(&pool, workout_id, trainer_id, data.name.trim(), &snapshots).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("Workout updated")),
        Ok(false) => HttpResponse::NotFound().json(json!({
            "error": "Workout not found"
        })),
        Err(e) => {
            tracing::error!("Database error updating workout: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update workout"))
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct DeleteConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[tracing::instrument(
    name = "Delete workout",
    skip(pool, claims, query),
    fields(username = %claims.username, workout_id = %path)
)]
pub async fn delete_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    query: web::Query<DeleteConfirmQuery>,
) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let workout_id = path.into_inner();

    if !query.confirm {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Confirm the workout deletion first"));
    }

    match db::workouts::delete(&pool, workout_id, trainer_id).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("Workout removed")),
        Ok(false) => HttpResponse::NotFound().json(json!({
            "error": "Workout not found"
        })),
        Err(e) => {
            tracing::error!("Database error deleting workout: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete workout"))
        }
    }
}

/// Resolve every picked exercise against the catalog and copy it by
/// value. An unknown exercise id aborts the whole operation before any
/// write happens.
pub(crate) async fn snapshot_selections(
    pool: &PgPool,
    selections: &[ExerciseSelection],
) -> Result<Vec<ExerciseSnapshot>, HttpResponse> {
    let mut snapshots = Vec::with_capacity(selections.len());
    for selection in selections {
        let exercise = match db::exercises::get(pool, selection.exercise_id).await {
            Ok(Some(exercise)) => exercise,
            Ok(None) => {
                return Err(HttpResponse::BadRequest().json(ApiResponse::<()>::error(format!(
                    "Unknown exercise: {}",
                    selection.exercise_id
                ))));
            }
            Err(e) => {
                tracing::error!("Database error resolving exercise: {}", e);
                return Err(HttpResponse::InternalServerError()
                    .json(ApiResponse::<()>::error("Failed to resolve exercises")));
            }
        };
        snapshots.push(ExerciseSnapshot::from_catalog(
            &exercise,
            selection.sets,
            selection.reps,
            selection.weight,
            selection.rest,
        ));
    }
    Ok(snapshots)
}
