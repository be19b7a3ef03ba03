use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::workouts::generate::auto_generate_workout;
use crate::handlers::workouts::manage;
use crate::middleware::auth::Claims;
use crate::models::workout::{AutoGenerateRequest, CreateWorkoutRequest, UpdateWorkoutRequest};

#[get("")]
async fn list(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    manage::list_workouts(pool, claims).await
}

#[post("")]
async fn create(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<CreateWorkoutRequest>,
) -> HttpResponse {
    manage::create_workout(pool, claims, data).await
}

#[post("/auto_generate")]
async fn auto_generate(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<AutoGenerateRequest>,
) -> HttpResponse {
    auto_generate_workout(pool, claims, data).await
}

#[put("/{workout_id}")]
async fn update(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<UpdateWorkoutRequest>,
) -> HttpResponse {
    manage::update_workout(pool, claims, path, data).await
}

#[delete("/{workout_id}")]
async fn delete(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    query: web::Query<manage::DeleteConfirmQuery>,
) -> HttpResponse {
    manage::delete_workout(pool, claims, path, query).await
}
