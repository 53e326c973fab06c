use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{db, types::AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthBody {
    pub status: HealthStatus,
    pub database: DatabaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HealthBody {
    pub fn connected() -> Self {
        Self {
            status: HealthStatus::Ok,
            database: DatabaseStatus::Connected,
            details: None,
        }
    }

    pub fn unreachable(details: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Error,
            database: DatabaseStatus::Unreachable,
            details: Some(details.into()),
        }
    }
}

/// Always answers 200. Database trouble is reported in the body only.
#[utoipa::path(get, path = "/health", responses((status = 200, body = HealthBody)), tag = "Health")]
pub async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    match db::ping(&state.db_pool).await {
        Ok(()) => Json(HealthBody::connected()),
        Err(err) => {
            tracing::warn!(error = %err, "database health check failed");
            Json(HealthBody::unreachable(err.to_string()))
        }
    }
}
