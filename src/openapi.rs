use axum::Json;
use utoipa::OpenApi;

use crate::{repos, routes, schemas};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::root::root,
        routes::health::health,
        routes::version::version,
    ),
    components(schemas(
        // Repo models
        repos::user::User,
        // User shapes
        schemas::UserCreate,
        schemas::UserUpdate,
        schemas::UserRead,
        // Route models
        routes::root::RootBody,
        routes::health::HealthBody,
        routes::health::HealthStatus,
        routes::health::DatabaseStatus,
        routes::version::VersionBody,
    )),
    tags(
        (name = "System"),
        (name = "Health"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
