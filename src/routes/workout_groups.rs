use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::workout_groups::manage;
use crate::middleware::auth::Claims;
use crate::models::workout_group::{CreateWorkoutGroupRequest, UpdateWorkoutGroupRequest};

#[get("")]
async fn list(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    manage::list_workout_groups(pool, claims).await
}

#[post("")]
async fn create(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<CreateWorkoutGroupRequest>,
) -> HttpResponse {
    manage::create_workout_group(pool, claims, data).await
}

#[put("/{group_id}")]
async fn update(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<UpdateWorkoutGroupRequest>,
) -> HttpResponse {
    manage::update_workout_group(pool, claims, path, data).await
}

#[delete("/{group_id}")]
async fn delete(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    query: web::Query<manage::DeleteConfirmQuery>,
) -> HttpResponse {
    manage::delete_workout_group(pool, claims, path, query).await
}
