use anyhow::Result;
use slug_backfill::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use slug_backfill::config::AppConfig;
use slug_backfill::domain::document::{DocumentReadRepository, DocumentWriteRepository};
use slug_backfill::infrastructure::{
    database,
    observer::TracingObserver,
    repositories::{SqliteDocumentReadRepository, SqliteDocumentWriteRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let read_repo: Arc<dyn DocumentReadRepository> =
        Arc::new(SqliteDocumentReadRepository::new(Arc::clone(&pool)));
    let write_repo: Arc<dyn DocumentWriteRepository> =
        Arc::new(SqliteDocumentWriteRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(read_repo, write_repo, clock, slugger);

    let report = services
        .conversion
        .run(config.conversion(), &TracingObserver)
        .await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
