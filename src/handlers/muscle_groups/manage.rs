use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::muscle_group::{
    AssignExerciseRequest, CreateMuscleGroupRequest, MuscleGroup, UpdateMuscleGroupRequest,
};

#[tracing::instrument(
    name = "List muscle groups",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_muscle_groups(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    if let Err(e) = db::seed::seed_muscle_groups_if_empty(&pool).await {
        tracing::error!("Failed to seed muscle groups: {}", e);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Failed to load muscle groups"));
    }

    match db::muscle_groups::list(&pool).await {
        Ok(groups) => HttpResponse::Ok().json(ApiResponse::success("Muscle groups", groups)),
        Err(e) => {
            tracing::error!("Database error listing muscle groups: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load muscle groups"))
        }
    }
}

#[tracing::instrument(
    name = "Create muscle group",
    skip(pool, claims, data),
    fields(username = %claims.username)
)]
pub async fn create_muscle_group(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<CreateMuscleGroupRequest>,
) -> HttpResponse {
    if data.name.trim().is_empty() || data.image_background.trim().is_empty() {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Muscle group name and image are required",
        ));
    }
    if !data.confirmed {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Confirm the muscle group creation first",
        ));
    }

    let group = MuscleGroup {
        id: Uuid::new_v4(),
        name: data.name.trim().to_string(),
        image_background: data.image_background.trim().to_string(),
    };

    match db::muscle_groups::insert(&pool, &group).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success("Muscle group created", group)),
        Err(e) => {
            tracing::error!("Database error creating muscle group: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create muscle group"))
        }
    }
}

#[tracing::instrument(
    name = "Update muscle group",
    skip(pool, claims, data),
    fields(username = %claims.username, group_id = %path)
)]
pub async fn update_muscle_group(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<UpdateMuscleGroupRequest>,
) -> HttpResponse {
    let group_id = path.into_inner();
    if data.name.trim().is_empty() || data.image_background.trim().is_empty() {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Muscle group name and image are required",
        ));
    }
    if !data.confirmed {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Confirm the muscle group edit first"));
    }

    match db::muscle_groups::update(&pool, group_id, data.name.trim(), data.image_background.trim())
        .await
    {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::<()>::success_message(
            "Muscle group updated",
        )),
        Ok(false) => HttpResponse::NotFound().json(json!({
            "error": "Muscle group not found"
        })),
        Err(e) => {
            tracing::error!("Database error updating muscle group: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update muscle group"))
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct DeleteConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// Deleting a muscle group also scrubs its name from every exercise's
/// membership list; other group memberships stay untouched.
#[tracing::instrument(
    name = "Delete muscle group",
    skip(pool, claims, query),
    fields(username = %claims.username, group_id = %path)
)]
pub async fn delete_muscle_group(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    query: web::Query<DeleteConfirmQuery>,
) -> HttpResponse {
    let group_id = path.into_inner();
    if !query.confirm {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Confirm the muscle group deletion first",
        ));
    }

    let group = match db::muscle_groups::get(&pool, group_id).await {
        Ok(Some(group)) => group,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({
                "error": "Muscle group not found"
            }));
        }
        Err(e) => {
            tracing::error!("Database error fetching muscle group: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete muscle group"));
        }
    };

    if let Err(e) = db::muscle_groups::delete(&pool, group_id).await {
        tracing::error!("Database error deleting muscle group: {}", e);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Failed to delete muscle group"));
    }

    if let Err(e) = db::exercises::remove_muscle_group_everywhere(&pool, &group.name).await {
        tracing::error!("Database error scrubbing muscle group from exercises: {}", e);
        return HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
            "Muscle group deleted but exercises were not fully updated",
        ));
    }

    HttpResponse::Ok().json(ApiResponse::<()>::success_message("Muscle group removed"))
}

/// Associate an exercise with a muscle group by appending the group name
/// to the exercise's membership list.
#[tracing::instrument(
    name = "Assign exercise to muscle group",
    skip(pool, claims, data),
    fields(username = %claims.username)
)]
pub async fn assign_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<AssignExerciseRequest>,
) -> HttpResponse {
    if !data.confirmed {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Confirm the association first"));
    }

    let group = match db::muscle_groups::get(&pool, data.muscle_group_id).await {
        Ok(Some(group)) => group,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({
                "error": "Muscle group not found"
            }));
        }
        Err(e) => {
            tracing::error!("Database error fetching muscle group: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to assign exercise"));
        }
    };

    match db::exercises::append_muscle_group(&pool, data.exercise_id, &group.name).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::<()>::success_message(format!(
            "Exercise assigned to \"{}\"",
            group.name
        ))),
        Ok(false) => HttpResponse::NotFound().json(json!({
            "error": "Exercise not found"
        })),
        Err(e) => {
            tracing::error!("Database error assigning exercise: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to assign exercise"))
        }
    }
}
