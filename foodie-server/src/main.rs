use foodie_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env) and logging
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_dir.as_deref());

    tracing::info!(environment = %config.environment, "Foodie Delight server starting...");

    // 2. Database, seed data, services
    let state = match ServerState::initialize(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize server: {}", e);
            return Err(e.into());
        }
    };

    // 3. HTTP server and background tasks
    if let Err(e) = Server::new(config, state).run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
