use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{openapi, routes, types::AppState};

pub fn build_router(app_state: AppState) -> Router {

    Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route("/version", get(routes::version::version))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())

}
