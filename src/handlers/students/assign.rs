use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::utils::parse_user::parse_user_id;

#[derive(Debug, Deserialize)]
pub struct StudentSearchQuery {
    pub search: Option<String>,
}

/// Students visible to the trainer: already claimed ones plus students
/// with no trainer yet.
#[tracing::instrument(
    name = "List students",
    skip(pool, claims, query),
    fields(username = %claims.username)
)]
pub async fn list_students(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    query: web::Query<StudentSearchQuery>,
) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    match db::users::list_students(&pool, trainer_id, search).await {
        Ok(students) => HttpResponse::Ok().json(ApiResponse::success("Students", students)),
        Err(e) => {
            tracing::error!("Database error listing students: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load students"))
        }
    }
}

/// Claim an unassigned student: sets the caller as their trainer.
#[tracing::instrument(
    name = "Claim student",
    skip(pool, claims),
    fields(username = %claims.username, student_id = %path)
)]
pub async fn claim_student(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let student_id = path.into_inner();

    match db::users::set_trainer(&pool, student_id, trainer_id).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::<()>::success_message(
            "Student assigned to trainer",
        )),
        Ok(false) => HttpResponse::NotFound().json(json!({
            "error": "Student not found"
        })),
        Err(e) => {
            tracing::error!("Database error claiming student: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to assign student"))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AssignWorkoutsRequest {
    #[serde(default)]
    pub workout_ids: Vec<Uuid>,
    pub group_id: Option<Uuid>,
    #[serde(default)]
    pub confirmed: bool,
}

/// Merge individually picked workouts and/or one workout group into a
/// student's assigned set. The result is a deduplicated union, existing
/// assignments first.
#[tracing::instrument(
    name = "Assign workouts to student",
    skip(pool, claims, data),
    fields(username = %claims.username, student_id = %path)
)]
pub async fn assign_workouts(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<AssignWorkoutsRequest>,
) -> HttpResponse {
    let trainer_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let student_id = path.into_inner();

    if data.workout_ids.is_empty() && data.group_id.is_none() {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Select workouts or a workout group",
        ));
    }
    if !data.confirmed {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Confirm the assignment first"));
    }

    let student = match db::users::get_profile(&pool, student_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({
                "error": "Student not found"
            }));
        }
        Err(e) => {
            tracing::error!("Database error fetching student: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to assign workouts"));
        }
    };

    fn push_unique(id: Uuid, merged: &mut Vec<Uuid>) {
        if !merged.contains(&id) {
            merged.push(id);
        }
    }

    let mut merged = student.workout_ids.clone();

    if let Some(group_id) = data.group_id {
        let group = match db::workout_groups::get(&pool, group_id).await {
            Ok(Some(group)) if group.trainer_id == trainer_id => group,
            Ok(_) => {
                return HttpResponse::NotFound().json(json!({
                    "error": "Workout group not found"
                }));
            }
            Err(e) => {
                tracing::error!("Database error fetching workout group: {}", e);
                return HttpResponse::InternalServerError()
                    .json(ApiResponse::<()>::error("Failed to assign workouts"));
            }
        };
        for id in group.workout_ids {
            push_unique(id, &mut merged);
        }
    }

    for id in &data.workout_ids {
        push_unique(*id, &mut merged);
    }

    match db::users::set_workout_ids(&pool, student_id, &merged).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(
            "Workouts assigned to student",
            json!({ "workout_ids": merged }),
        )),
        Err(e) => {
            tracing::error!("Database error assigning workouts: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to assign workouts"))
        }
    }
}
