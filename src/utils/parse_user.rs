use actix_web::HttpResponse;
use uuid::Uuid;

use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;

/// Parse the caller's user id out of the JWT claims. A claim that does
/// not hold a UUID is a bad request, answered in-place so handlers can
/// use the `match`-and-return pattern.
pub fn parse_user_id(claims: &Claims) -> Result<Uuid, HttpResponse> {
    match claims.user_id() {
        Some(id) => Ok(id),
        None => {
            tracing::error!("Token subject is not a valid user id: {}", claims.sub);
            Err(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")))
        }
    }
}
