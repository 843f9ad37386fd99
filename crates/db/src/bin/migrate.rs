//! Apply pending database migrations and exit.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mlregistry_db::DbConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mlregistry_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DbConfig::from_env();

    let pool = mlregistry_db::create_pool(&config)
        .await
        .expect("Failed to connect to database");
    tracing::info!(max_connections = config.max_connections, "Database connection pool created");

    mlregistry_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    mlregistry_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");
}
