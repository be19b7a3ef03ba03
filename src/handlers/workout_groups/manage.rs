use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::workout_group::{CreateWorkoutGroupRequest, UpdateWorkoutGroupRequest};
use crate::utils::parse_user::parse_user_id;

#[tracing::instrument(
    name = "List workout groups",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_workout_groups(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match db::workout_groups::list_by_trainer(&pool, trainer_id).await {
        Ok(groups) => HttpResponse::Ok().json(ApiResponse::success("Workout groups", groups)),
        Err(e) => {
            tracing::error!("Database error listing workout groups: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load workout groups"))
        }
    }
}

#[tracing::instrument(
    name = "Create workout group",
    skip(pool, claims, data),
    fields(username = %claims.username, group_name = %data.name)
)]
pub async fn create_workout_group(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<CreateWorkoutGroupRequest>,
) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if data.name.trim().is_empty() || data.workout_ids.is_empty() || data.validity_days < 1 {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Enter a name, select workouts and set the group validity",
        ));
    }
    if !data.confirmed {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Confirm the group creation first"));
    }

    // When the group is bound to a student at creation time, resolve the
    // student before writing anything so a bad id causes no partial write.
    let student = match data.student_id {
        Some(student_id) => match db::users::get_profile(&pool, student_id).await {
            Ok(Some(profile)) => Some(profile),
            Ok(None) => {
                return HttpResponse::NotFound().json(json!({
                    "error": "Student not found"
                }));
            }
            Err(e) => {
                tracing::error!("Database error fetching student: {}", e);
                return HttpResponse::InternalServerError()
                    .json(ApiResponse::<()>::error("Failed to create workout group"));
            }
        },
        None => None,
    };

    let group_id = match db::workout_groups::insert(
        &pool,
        data.name.trim(),
        trainer_id,
        &data.workout_ids,
        data.validity_days,
    )
    .await
    {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Database error creating workout group: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create workout group"));
        }
    };

    // Merge the group's workouts into the student's assigned set,
    // deduplicated, existing assignments first.
    if let Some(student) = student {
        let mut merged = student.workout_ids.clone();
        for id in &data.workout_ids {
            if !merged.contains(id) {
                merged.push(*id);
            }
        }
        if let Err(e) = db::users::set_workout_ids(&pool, student.id, &merged).await {
            tracing::error!("Database error assigning group to student: {}", e);
            return HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Group created but could not be assigned to the student",
            ));
        }
    }

    match db::workout_groups::get(&pool, group_id).await {
        Ok(Some(group)) => {
            HttpResponse::Ok().json(ApiResponse::success("Workout group created", group))
        }
        Ok(None) | Err(_) => HttpResponse::Ok().json(ApiResponse::success(
            "Workout group created",
            json!({ "id": group_id }),
        )),
    }
}

#[tracing::instrument(
    name = "Update workout group",
    skip(pool, claims, data),
    fields(username = %claims.username, group_id = %path)
)]
pub async fn update_workout_group(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<UpdateWorkoutGroupRequest>,
) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let group_id = path.into_inner();

    if data.name.trim().is_empty() || data.workout_ids.is_empty() || data.validity_days < 1 {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Enter a name, select workouts and set the group validity",
        ));
    }
    if !data.confirmed {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Confirm the group edit first"));
    }

    match db::workout_groups::update(
        &pool,
        group_id,
        trainer_id,
        data.name.trim(),
        &data.workout_ids,
        data.validity_days,
    )
    .await
    {
        Ok(true) => {
            HttpResponse::Ok().json(ApiResponse::<()>::success_message("Workout group updated"))
        }
        Ok(false) => HttpResponse::NotFound().json(json!({
            "error": "Workout group not found"
        })),
        Err(e) => {
            tracing::error!("Database error updating workout group: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update workout group"))
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct DeleteConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[tracing::instrument(
    name = "Delete workout group",
    skip(pool, claims, query),
    fields(username = %claims.username, group_id = %path)
)]
pub async fn delete_workout_group(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    query: web::Query<DeleteConfirmQuery>,
) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let group_id = path.into_inner();

    if !query.confirm {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Confirm the group deletion first"));
    }

    match db::workout_groups::delete(&pool, group_id, trainer_id).await {
        Ok(true) => {
            HttpResponse::Ok().json(ApiResponse::<()>::success_message("Workout group removed"))
        }
        Ok(false) => HttpResponse::NotFound().json(json!({
            "error": "Workout group not found"
        })),
        Err(e) => {
            tracing::error!("Database error deleting workout group: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete workout group"))
        }
    }
}
