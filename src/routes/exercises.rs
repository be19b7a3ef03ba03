use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::exercises::catalog::list_exercises;
use crate::middleware::auth::Claims;

#[get("")]
async fn list(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    list_exercises(pool, claims).await
}
