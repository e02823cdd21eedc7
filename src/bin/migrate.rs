use proshop_seed::{
    config::AppConfig,
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
    logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env();
    let orm = create_orm_conn(&config.database_url).await?;
    let applied = run_migrations(&orm, MIGRATIONS_DIR).await;
    orm.close().await?;

    tracing::info!(files = applied?, "Migrations applied");
    Ok(())
}
