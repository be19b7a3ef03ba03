use actix_web::{delete, get, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::history::history;
use crate::middleware::auth::Claims;

#[get("")]
async fn list(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    query: web::Query<history::HistoryQuery>,
) -> HttpResponse {
    history::get_history(pool, claims, query).await
}

#[delete("/{entry_id}")]
async fn delete(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    query: web::Query<history::DeleteConfirmQuery>,
) -> HttpResponse {
    history::delete_history_entry(pool, claims, path, query).await
}
