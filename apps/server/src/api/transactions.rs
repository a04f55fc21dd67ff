use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use ancla_core::transactions::{NewTransaction, Transaction};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct OwnerQuery {
    pub user_id: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/transactions",
    params(("user_id" = String, Query, description = "Owner of the new transaction")),
    responses((status = 200, description = "Stored transaction"), (status = 400, description = "Negative amount"))
)]
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Query(owner): Query<OwnerQuery>,
    Json(payload): Json<NewTransaction>,
) -> ApiResult<Json<Transaction>> {
    let created = state
        .transaction_service
        .create_transaction(&owner.user_id, payload)
        .await?;
    Ok(Json(created))
}

#[utoipa::path(
    get,
    path = "/api/v1/transactions/{user_id}",
    params(("user_id" = String, Path, description = "Owner")),
    responses((status = 200, description = "Up to 1000 transactions, newest first"))
)]
pub async fn list_transactions(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state.transaction_service.get_transactions(&user_id)?;
    Ok(Json(transactions))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions", post(create_transaction))
        .route("/transactions/{user_id}", get(list_transactions))
}
