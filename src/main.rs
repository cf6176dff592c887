//! TEbucks server entry point.
//!
//! ```text
//! console client ──HTTP+JSON──▶ gateway ──▶ services/repositories ──▶ PostgreSQL
//! ```

use std::sync::Arc;

use tebucks::config::AppConfig;
use tebucks::db::Database;
use tebucks::gateway::{self, state::AppState};
use tebucks::user_auth::AuthService;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = tebucks::logging::init_logging(&config);

    tracing::info!("Starting TEbucks server in {} mode", env);

    let db = Arc::new(Database::connect(&config).await?);
    db.health_check().await?;

    let auth = Arc::new(AuthService::new(
        db.pool().clone(),
        config.jwt_secret.clone(),
        config.starting_balance,
    ));

    let state = Arc::new(AppState::new(db, auth));
    gateway::run_gateway(&config, state).await
}
