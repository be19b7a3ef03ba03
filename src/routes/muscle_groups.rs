use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::muscle_groups::manage;
use crate::middleware::auth::Claims;
use crate::models::muscle_group::{
    AssignExerciseRequest, CreateMuscleGroupRequest, UpdateMuscleGroupRequest,
};

#[get("")]
async fn list(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    manage::list_muscle_groups(pool, claims).await
}

#[post("")]
async fn create(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<CreateMuscleGroupRequest>,
) -> HttpResponse {
    manage::create_muscle_group(pool, claims, data).await
}

#[put("/{group_id}")]
async fn update(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<UpdateMuscleGroupRequest>,
) -> HttpResponse {
    manage::update_muscle_group(pool, claims, path, data).await
}

#[delete("/{group_id}")]
async fn delete(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    query: web::Query<manage::DeleteConfirmQuery>,
) -> HttpResponse {
    manage::delete_muscle_group(pool, claims, path, query).await
}

#[post("/assign_exercise")]
async fn assign_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<AssignExerciseRequest>,
) -> HttpResponse {
    manage::assign_exercise(pool, claims, data).await
}
