use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::students::assign::{
    assign_workouts, claim_student, list_students, AssignWorkoutsRequest, StudentSearchQuery,
};
use crate::middleware::auth::Claims;

#[get("")]
async fn list(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    query: web::Query<StudentSearchQuery>,
) -> HttpResponse {
    list_students(pool, claims, query).await
}

#[post("/{student_id}/claim")]
async fn claim(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    claim_student(pool, claims, path).await
}

#[post("/{student_id}/assign")]
async fn assign(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<AssignWorkoutsRequest>,
) -> HttpResponse {
    assign_workouts(pool, claims, path, data).await
}
