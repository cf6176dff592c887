//! Transfer handlers: creation (with settlement), status transitions,
//! history and drill-down lookup.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::transfer::{NewTransfer, Transfer, TransferDetail, TransferService};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, created, ok};

/// Status filter for the history endpoint. The query parameter keeps the
/// original wire name.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TransferHistoryQuery {
    #[serde(rename = "transferStatusType")]
    pub transfer_status_type: i16,
}

/// Requested status transition (PUT /transfers/{id}/status body)
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusUpdate {
    #[schema(example = 2)]
    pub transfer_status_id: i16,
}

/// Create a transfer
///
/// POST /transfers
///
/// Validation (positive amount, distinct accounts, covering balance) is
/// enforced here, server-side. An Approved transfer settles atomically
/// before the row becomes visible.
#[utoipa::path(
    post,
    path = "/transfers",
    request_body = NewTransfer,
    responses(
        (status = 201, description = "Transfer created (settled when approved)", body = Transfer),
        (status = 400, description = "Invalid amount, self-transfer or insufficient balance"),
        (status = 404, description = "Unknown account"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Transfer"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewTransfer>,
) -> ApiResult<Transfer> {
    match TransferService::create(state.pool(), &req).await {
        Ok(transfer) => created(transfer),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// Get one transfer with counterpart usernames resolved
///
/// GET /transfers/{transfer_id}
#[utoipa::path(
    get,
    path = "/transfers/{transfer_id}",
    params(("transfer_id" = i64, Path, description = "Transfer ID")),
    responses(
        (status = 200, description = "Transfer detail", body = TransferDetail),
        (status = 404, description = "Transfer not found"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Transfer"
)]
pub async fn get_transfer(
    State(state): State<Arc<AppState>>,
    Path(transfer_id): Path<i64>,
) -> ApiResult<TransferDetail> {
    let detail = TransferService::get_detail(state.pool(), transfer_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Transfer not found: {}", transfer_id)))?;

    ok(detail)
}

/// Move a pending transfer to approved or rejected
///
/// PUT /transfers/{transfer_id}/status
///
/// Settlement fires exactly once, on the transition into approved.
#[utoipa::path(
    put,
    path = "/transfers/{transfer_id}/status",
    params(("transfer_id" = i64, Path, description = "Transfer ID")),
    request_body = StatusUpdate,
    responses(
        (status = 200, description = "Transfer after transition", body = Transfer),
        (status = 400, description = "Unknown status id or insufficient balance"),
        (status = 404, description = "Transfer not found"),
        (status = 409, description = "Transfer already in a terminal state"),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Transfer"
)]
pub async fn update_transfer_status(
    State(state): State<Arc<AppState>>,
    Path(transfer_id): Path<i64>,
    Json(req): Json<StatusUpdate>,
) -> ApiResult<Transfer> {
    match TransferService::update_status(state.pool(), transfer_id, req.transfer_status_id).await {
        Ok(transfer) => ok(transfer),
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// List transfers touching an account, filtered by status
///
/// GET /accounts/{account_id}/transfers?transferStatusType=<id>
#[utoipa::path(
    get,
    path = "/accounts/{account_id}/transfers",
    params(
        ("account_id" = i64, Path, description = "Account ID"),
        TransferHistoryQuery
    ),
    responses(
        (status = 200, description = "Matching transfers", body = Vec<Transfer>),
        (status = 401, description = "Authentication failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Transfer"
)]
pub async fn list_transfers(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i64>,
    Query(query): Query<TransferHistoryQuery>,
) -> ApiResult<Vec<Transfer>> {
    let transfers =
        TransferService::list_by_account(state.pool(), account_id, query.transfer_status_type)
            .await
            .map_err(ApiError::from)?;

    ok(transfers)
}
