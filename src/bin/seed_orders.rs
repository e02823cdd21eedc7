use std::process::ExitCode;

use chrono::Utc;
use proshop_seed::{config::AppConfig, exit, logging, seed::seed_orders, store::OrmStore};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    logging::init();

    exit::finish("order seeding", run().await)
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let store = OrmStore::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    let result = seed_orders(&store, Utc::now()).await;
    let closed = store.close().await;

    if let Some(order) = result?.order() {
        tracing::debug!(order = %serde_json::to_string(order)?, "order document");
    }
    closed?;
    Ok(())
}
