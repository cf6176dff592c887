//! Account and user query handlers. All pure reads; a missing entity is an
//! explicit 404, never an empty 200.

use std::sync::Arc;

use axum::extract::{Path, State};
use rust_decimal::Decimal;

use crate::account::{Account, AccountRepository, ShareableUser};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ok};

/// Get an account by account id
///
/// GET /accounts/{account_id}
#[utoipa::path(
    get,
    path = "/accounts/{account_id}",
    params(("account_id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account record", body = Account),
        (status = 404, description = "Account not found"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i64>,
) -> ApiResult<Account> {
    let account = AccountRepository::get_by_account_id(state.pool(), account_id)
        .await
        .map_err(|e| ApiError::db_error(format!("Account query failed: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Account not found: {}", account_id)))?;

    ok(account)
}

/// Get the account owned by a user
///
/// GET /users/{user_id}/account
#[utoipa::path(
    get,
    path = "/users/{user_id}/account",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account record", body = Account),
        (status = 404, description = "No account for that user"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn get_account_by_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> ApiResult<Account> {
    let account = AccountRepository::get_by_user_id(state.pool(), user_id)
        .await
        .map_err(|e| ApiError::db_error(format!("Account query failed: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("No account for user: {}", user_id)))?;

    ok(account)
}

/// Get the current balance of an account
///
/// GET /accounts/{account_id}/balance
#[utoipa::path(
    get,
    path = "/accounts/{account_id}/balance",
    params(("account_id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Current balance", body = String),
        (status = 404, description = "Account not found"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i64>,
) -> ApiResult<Decimal> {
    let balance = AccountRepository::get_balance(state.pool(), account_id)
        .await
        .map_err(|e| ApiError::db_error(format!("Balance query failed: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Account not found: {}", account_id)))?;

    ok(balance)
}

/// Get the display user owning an account
///
/// GET /accounts/{account_id}/user
#[utoipa::path(
    get,
    path = "/accounts/{account_id}/user",
    params(("account_id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Owning user", body = ShareableUser),
        (status = 404, description = "Account not found"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn get_account_owner(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i64>,
) -> ApiResult<ShareableUser> {
    let owner = AccountRepository::get_owner(state.pool(), account_id)
        .await
        .map_err(|e| ApiError::db_error(format!("Owner query failed: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Account not found: {}", account_id)))?;

    ok(owner)
}

/// List transfer counterparts for a user (everyone except self)
///
/// GET /users/{user_id}/potentialTransferUsers
#[utoipa::path(
    get,
    path = "/users/{user_id}/potentialTransferUsers",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Candidate users", body = Vec<ShareableUser>),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
pub async fn get_transfer_candidates(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<ShareableUser>> {
    let users = AccountRepository::find_transfer_candidates(state.pool(), user_id)
        .await
        .map_err(|e| ApiError::db_error(format!("Candidate query failed: {}", e)))?;

    ok(users)
}
