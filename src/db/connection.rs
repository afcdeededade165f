use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers;
use crate::config::DatabaseConfig;

/// Connects via the provider matching the configured URL, then synchronizes
/// the schema from the entity registry so the declared table, unique index,
/// and column defaults exist before any query runs.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let registry = providers::default_registry()?;
    let provider = registry.provider_for_url(&cfg.url)?;

    let db = provider.connect(cfg).await?;
    provider.post_connect(&db, cfg).await?;

    info!("syncing database schema from entities");
    db.get_schema_registry("admin_directory::db::entities::*")
        .sync(&db)
        .await?;
    Ok(db)
}
