use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::execution::session;
use crate::middleware::auth::Claims;
use crate::workout::execution::ExecutionSessions;

#[post("/start/{workout_id}")]
async fn start(
    pool: web::Data<PgPool>,
    sessions: web::Data<ExecutionSessions>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    session::start_session(pool, sessions, claims, path).await
}

#[get("/current")]
async fn current(
    sessions: web::Data<ExecutionSessions>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    session::get_current_session(sessions, claims).await
}

#[post("/complete_exercise")]
async fn complete_exercise(
    sessions: web::Data<ExecutionSessions>,
    claims: web::ReqData<Claims>,
    data: web::Json<session::CompleteExerciseRequest>,
) -> HttpResponse {
    session::complete_exercise(sessions, claims, data).await
}

#[post("/finish")]
async fn finish(
    pool: web::Data<PgPool>,
    sessions: web::Data<ExecutionSessions>,
    claims: web::ReqData<Claims>,
    data: web::Json<session::FinishSessionRequest>,
) -> HttpResponse {
    session::finish_session(pool, sessions, claims, data).await
}
