use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::dashboard::recommendation::get_recommendation;
use crate::handlers::dashboard::suggestions::get_suggestions;
use crate::middleware::auth::Claims;

#[get("/recommendation")]
async fn recommendation(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    get_recommendation(pool, claims).await
}

#[get("/suggestions")]
async fn suggestions(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    get_suggestions(pool, claims).await
}
