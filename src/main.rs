use drink_orders::{
    api::{self, AppState},
    config::{database, seed, server::ServerConfig},
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Read settings
    let server_config = ServerConfig::from_env()
        .inspect_err(|e| error!("Invalid server configuration: {}", e))?;
    let addr = server_config.bind_addr()?;
    let database_url = database::get_database_url();

    // 4. Open the database and make sure the tables exist
    let db = database::create_connection(&database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed drinks and users from the seed file
    let seed_config = seed::load_seed_config_if_present(seed::get_seed_path())?;
    seed::seed_database(&db, &seed_config)
        .await
        .inspect_err(|e| error!("Failed to seed database: {}", e))?;

    // 6. Serve until Ctrl-C
    let state = AppState::new(db);
    let app = api::build_router(state.clone());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 7. Release the pool
    match state.into_database() {
        Some(db) => db.close().await?,
        None => warn!("Database still in use at shutdown, dropping pool"),
    }
    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Received Ctrl-C, shutting down");
}
