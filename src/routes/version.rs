use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::types::AppState;

#[derive(Serialize, ToSchema)]
pub struct VersionBody {
    version: String,
}

#[utoipa::path(get, path = "/version", responses((status = 200, body = VersionBody)), tag = "System")]
pub async fn version(State(state): State<AppState>) -> Json<VersionBody> {
    Json(VersionBody { version: state.version.clone() })
}
