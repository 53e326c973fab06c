use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::DatabaseError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Read-only access to `users`. Nothing in the HTTP surface writes here yet.
pub struct UserRepo;

impl UserRepo {
    pub fn get_table_name() -> &'static str {
        "users"
    }

    pub async fn count(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<i64, DatabaseError> {
        let query = format!("SELECT COUNT(*) FROM {}", Self::get_table_name());
        let total = sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(tx.as_mut())
            .await?;
        Ok(total)
    }

    pub async fn get(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: i32,
    ) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, password_hash, created_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_one(tx.as_mut())
        .await
        .map_err(|e| DatabaseError::from_sqlx_error(e, &format!("user {}", id)))
    }
}
