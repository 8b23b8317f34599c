use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;

use scoops_core::config::DatabaseConfig;

pub type DbPool = sqlx::SqlitePool;

/// Opens the pool described by `database` and applies the session pragmas
/// every connection needs: foreign keys on, WAL journaling, and the
/// configured lock-wait budget.
pub async fn connect(database: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let busy_timeout_ms = database.busy_timeout_ms;

    SqlitePoolOptions::new()
        .max_connections(database.max_connections.max(1))
        .acquire_timeout(Duration::from_secs(database.timeout_secs.max(1)))
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA foreign_keys = ON").execute(&mut *conn).await?;
                sqlx::query("PRAGMA journal_mode = WAL").execute(&mut *conn).await?;
                sqlx::query(&format!("PRAGMA busy_timeout = {busy_timeout_ms}"))
                    .execute(&mut *conn)
                    .await?;
                Ok(())
            })
        })
        .connect(&database.url)
        .await
}

/// In-memory database settings shared by this crate's tests. One connection
/// only: each sqlite `:memory:` connection is its own database.
#[cfg(test)]
pub(crate) fn memory_database() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        timeout_secs: 30,
        busy_timeout_ms: 5000,
    }
}

#[cfg(test)]
mod tests {
    use super::{connect, memory_database};

    #[tokio::test]
    async fn connect_applies_the_configured_session_pragmas() {
        let mut database = memory_database();
        database.busy_timeout_ms = 250;

        let pool = connect(&database).await.expect("connect");

        let foreign_keys = sqlx::query_scalar::<_, i64>("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .expect("pragma lookup");
        assert_eq!(foreign_keys, 1);

        let busy_timeout = sqlx::query_scalar::<_, i64>("PRAGMA busy_timeout")
            .fetch_one(&pool)
            .await
            .expect("pragma lookup");
        assert_eq!(busy_timeout, 250);
    }
}
