use std::process::ExitCode;

use proshop_seed::{
    config::AppConfig,
    credentials::Argon2Hasher,
    exit, logging,
    seed::{demo_users, seed_users},
    store::OrmStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    logging::init();

    exit::finish("user seeding", run().await)
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let store = OrmStore::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    let result = seed_users(&store, &Argon2Hasher::default(), demo_users()).await;
    let closed = store.close().await;

    result?;
    closed?;
    Ok(())
}
