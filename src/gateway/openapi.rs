//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::account::{Account, ShareableUser};
use crate::gateway::handlers::health::HealthResponse;
use crate::gateway::handlers::transfer::StatusUpdate;
use crate::transfer::{NewTransfer, Transfer, TransferDetail};
use crate::user_auth::{AuthResponse, LoginRequest, RegisterRequest};

/// JWT bearer-token security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /login"))
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TEbucks API",
        version = "1.0.0",
        description = "Peer-to-peer TE bucks transfers: accounts, balances and transfers."
    ),
    paths(
        crate::user_auth::handlers::register,
        crate::user_auth::handlers::login,
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::get_account,
        crate::gateway::handlers::account::get_account_by_user,
        crate::gateway::handlers::account::get_balance,
        crate::gateway::handlers::account::get_account_owner,
        crate::gateway::handlers::account::get_transfer_candidates,
        crate::gateway::handlers::transfer::create_transfer,
        crate::gateway::handlers::transfer::get_transfer,
        crate::gateway::handlers::transfer::update_transfer_status,
        crate::gateway::handlers::transfer::list_transfers,
    ),
    components(schemas(
        Account,
        ShareableUser,
        Transfer,
        TransferDetail,
        NewTransfer,
        StatusUpdate,
        RegisterRequest,
        LoginRequest,
        AuthResponse,
        HealthResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Account", description = "Account and user queries"),
        (name = "Transfer", description = "Transfer creation, settlement and history"),
        (name = "System", description = "Health")
    )
)]
pub struct ApiDoc;
