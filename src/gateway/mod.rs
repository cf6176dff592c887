//! HTTP API layer: router assembly and serving.
//!
//! Route map:
//! - public: POST /register, POST /login, GET /health, /docs
//! - bearer-protected: the account/user/transfer resource endpoints

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::user_auth::middleware::jwt_auth_middleware;
use state::AppState;

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(crate::user_auth::handlers::register))
        .route("/login", post(crate::user_auth::handlers::login));

    let protected_routes = Router::new()
        // Account/user queries
        .route("/accounts/{account_id}", get(handlers::get_account))
        .route("/users/{user_id}/account", get(handlers::get_account_by_user))
        .route("/accounts/{account_id}/balance", get(handlers::get_balance))
        .route("/accounts/{account_id}/user", get(handlers::get_account_owner))
        .route(
            "/users/{user_id}/potentialTransferUsers",
            get(handlers::get_transfer_candidates),
        )
        // Transfers
        .route("/transfers", post(handlers::create_transfer))
        .route("/transfers/{transfer_id}", get(handlers::get_transfer))
        .route(
            "/transfers/{transfer_id}/status",
            put(handlers::update_transfer_status),
        )
        .route(
            "/accounts/{account_id}/transfers",
            get(handlers::list_transfers),
        )
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(auth_routes)
        .merge(protected_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Bind and serve until shutdown
pub async fn run_gateway(config: &AppConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
