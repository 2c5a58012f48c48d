use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use movie_api::{AppState, config::Settings, jwt::JwtService, routes};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting movie API service");

    let jwt_service = JwtService::new(settings.jwt.clone())?;
    let static_dir = settings.server.static_dir.clone();

    let app_state = match &settings.database {
        Some(db_config) => {
            // Initialize database connection pool
            let pool = common::database::init_pool(db_config).await?;

            // Check database connectivity
            if common::database::health_check(&pool).await? {
                info!("Database connection successful");
            } else {
                anyhow::bail!("Failed to connect to database");
            }

            common::database::migrate(&pool).await?;
            AppState::postgres(pool, db_config.seed_catalog, jwt_service, static_dir).await?
        }
        None => {
            info!("No database configured, using in-memory storage");
            AppState::in_memory(jwt_service, static_dir).await?
        }
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Movie API listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
