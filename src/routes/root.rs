use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

pub const GREETING: &str = "Users Service Running";

#[derive(Serialize, ToSchema)]
pub struct RootBody {
    message: String,
}

#[utoipa::path(get, path = "/", responses((status = 200, body = RootBody)), tag = "System")]
pub async fn root() -> Json<RootBody> {
    Json(RootBody { message: GREETING.to_string() })
}
