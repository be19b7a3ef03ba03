use actix_web::{get, post, put, web, HttpResponse};
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::handlers::profile::profile::{get_my_profile, toggle_role, update_my_profile};
use crate::middleware::auth::Claims;
use crate::models::user::UpdateProfileRequest;

#[get("/me")]
async fn get_me(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    get_my_profile(pool, claims).await
}

#[put("/me")]
async fn update_me(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<UpdateProfileRequest>,
) -> HttpResponse {
    update_my_profile(pool, claims, data).await
}

#[post("/role_toggle")]
async fn role_toggle(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    toggle_role(pool, claims, jwt_settings).await
}
