use std::env;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use scoops_core::config::{AppConfig, ConfigError, LoadOptions, PROCESS_TIMEZONE};
use scoops_db::{connect, migrations, DbPool, SqlCatalogGateway, SqlOrderGateway};
use scoops_fulfillment::Dispatcher;

pub struct Application {
    pub config: AppConfig,
    pub db_pool: DbPool,
    pub dispatcher: Arc<Dispatcher>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    DatabaseConnect(#[source] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        timezone = PROCESS_TIMEZONE,
        "starting application bootstrap"
    );

    // Fixed operational constant; every turn is handled in this zone.
    env::set_var("TZ", PROCESS_TIMEZONE);

    let db_pool = connect(&config.database).await.map_err(BootstrapError::DatabaseConnect)?;
    info!(event_name = "system.bootstrap.database_connected", "database connection established");

    migrations::run_pending(&db_pool).await.map_err(BootstrapError::Migration)?;
    info!(event_name = "system.bootstrap.migrations_applied", "database migrations applied");

    let catalog = Arc::new(SqlCatalogGateway::new(db_pool.clone(), &config.tables.products));
    let orders = Arc::new(SqlOrderGateway::new(db_pool.clone(), &config.tables.orders));
    let dispatcher = Arc::new(Dispatcher::new(catalog, orders));

    Ok(Application { config, db_pool, dispatcher })
}
