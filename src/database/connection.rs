use crate::config::DatabaseConfig;
use crate::database::{MemoryRecordStore, RecordStore, SeaOrmRecordStore};
use crate::error::AppResult;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    let pool = Database::connect(options).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &DatabaseConnection) -> AppResult<()> {
    Migrator::up(pool, None).await?;
    Ok(())
}

/// Builds the record store named by `database.url`.
pub async fn create_record_store(config: &DatabaseConfig) -> AppResult<Arc<dyn RecordStore>> {
    if config.is_memory() {
        log::warn!("Using in-memory record store, results will not survive a restart");
        return Ok(Arc::new(MemoryRecordStore::new()));
    }

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;
    log::info!("Connected to database, migrations applied");
    Ok(Arc::new(SeaOrmRecordStore::new(pool)))
}
