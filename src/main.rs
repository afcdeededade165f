use anyhow::Context;

use admin_directory::{
    config::AppConfig, db::connection, logging::init_tracing, services::ServiceContext,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("provisioning failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging);

    let db_cfg = cfg
        .database
        .as_ref()
        .context("database config is required (APP_DATABASE__URL)")?;
    let db = connection::connect(db_cfg).await?;
    let services = ServiceContext::new(&db);

    match cfg.provision.as_ref() {
        Some(provision) => {
            let admin = services
                .admin_users()
                .ensure_root_admin(&provision.admin_email, &provision.admin_password_hash)
                .await?;
            tracing::info!(id = %admin.id, email = %admin.email, "root admin present");
        }
        None => tracing::info!("schema synced; no provisioning section configured"),
    }

    Ok(())
}
