use std::time::Duration;

use sqlx::{Connection, PgConnection, PgPool, postgres::PgPoolOptions};

use crate::error::DatabaseError;

/// Builds the pool without connecting, so the service can start while the
/// database is still down. Every borrowed connection is pinged first.
pub fn make_db_pool(
    db_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .test_before_acquire(true)
        .connect_lazy(db_url)?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Runs `SELECT 1` on a connection scoped to this call. The connection goes
/// back to the pool when it drops, on the error paths as well.
///
/// Returns the driver error as is, so callers can show it verbatim.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = match pool.acquire().await {
        Ok(conn) => conn,
        Err(sqlx::Error::PoolTimedOut) => return Err(connect_error(pool).await),
        Err(e) => return Err(e),
    };
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&mut *conn)
        .await?;
    Ok(())
}

// The pool retries refused connections until its acquire timeout and then
// only reports the timeout. One direct attempt recovers the real cause.
async fn connect_error(pool: &PgPool) -> sqlx::Error {
    let options = pool.connect_options();
    let timeout = pool.options().get_acquire_timeout();
    match tokio::time::timeout(timeout, PgConnection::connect_with(&options)).await {
        Ok(Err(e)) => e,
        Ok(Ok(conn)) => {
            let _ = conn.close().await;
            sqlx::Error::PoolTimedOut
        }
        Err(_) => sqlx::Error::PoolTimedOut,
    }
}
