use crate::api::error::ApiError;
use crate::api::extract::AuthenticatedOwner;
use crate::api::server::AppState;
use crate::application::summary::Dashboard;
use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::values::summary::TradeSummary;
use crate::domain::values::trade_patch::TradePatch;
use crate::domain::values::trade_status::TradeStatus;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /trades`. Any owner field the client sends is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTradeRequest {
    pub item_name: String,
    pub buy_price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

/// GET /trades - Caller's trades, newest purchase first
pub async fn list_trades(
    State(state): State<Arc<AppState>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Trade>>, ApiError> {
    let status = params
        .status
        .map(|s| s.parse::<TradeStatus>())
        .transpose()
        .map_err(DomainError::Validation)?;
    Ok(Json(state.book.list_trades(&owner, status)?))
}

/// POST /trades - Record a purchase
pub async fn create_trade(
    State(state): State<Arc<AppState>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: CreateTradeRequest = serde_json::from_slice(&body)
        .map_err(|e| DomainError::Validation(format!("Invalid trade: {e}")))?;
    let trade = state.book.create_trade(&owner, req.item_name, req.buy_price)?;
    Ok((StatusCode::CREATED, Json(trade)))
}

/// GET /trades/{id}
pub async fn get_trade(
    State(state): State<Arc<AppState>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(id): Path<String>,
) -> Result<Json<Trade>, ApiError> {
    Ok(Json(state.book.get_trade(&owner, &id)?))
}

/// PUT /trades/{id} - Partial update; a sell price marks the trade sold
pub async fn update_trade(
    State(state): State<Arc<AppState>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Trade>, ApiError> {
    let patch = TradePatch::from_json(&body)?;
    Ok(Json(state.book.update_trade(&owner, &id, patch)?))
}

/// DELETE /trades/{id}
pub async fn delete_trade(
    State(state): State<Arc<AppState>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.book.delete_trade(&owner, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /summary - Cash, profit and commission figures
pub async fn summary(
    State(state): State<Arc<AppState>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
) -> Result<Json<TradeSummary>, ApiError> {
    Ok(Json(state.book.summary(&owner)?))
}

/// GET /dashboard - Trades plus summary from one snapshot
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
) -> Result<Json<Dashboard>, ApiError> {
    Ok(Json(state.book.dashboard(&owner)?))
}

/// GET /health - Storage connectivity, no auth
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.book.health() {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({"status": "unavailable", "error": "database_unreachable"})),
            )
        }
    }
}
