use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DatabaseError {
    pub fn from_sqlx_error(error: sqlx::Error, context: &str) -> Self {
        match error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound(context.to_string()),
            _ => DatabaseError::ConnectionError(error),
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        DatabaseError::from_sqlx_error(err, "Database operation failed")
    }
}

impl From<sqlx::migrate::MigrateError> for DatabaseError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DatabaseError::MigrationError(err)
    }
}
