use std::sync::Arc;

use crate::{api::transactions::OwnerQuery, error::ApiResult, main_lib::AppState};
use ancla_core::budget_limits::{BudgetLimit, NewBudgetLimit};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

#[utoipa::path(
    post,
    path = "/api/v1/budget-limits",
    params(("user_id" = String, Query, description = "Owner of the new limit")),
    responses((status = 200, description = "Stored budget limit"))
)]
pub async fn create_budget_limit(
    State(state): State<Arc<AppState>>,
    Query(owner): Query<OwnerQuery>,
    Json(payload): Json<NewBudgetLimit>,
) -> ApiResult<Json<BudgetLimit>> {
    let created = state
        .budget_limit_service
        .create_budget_limit(&owner.user_id, payload)
        .await?;
    Ok(Json(created))
}

#[utoipa::path(
    get,
    path = "/api/v1/budget-limits/{user_id}",
    params(("user_id" = String, Path, description = "Owner")),
    responses((status = 200, description = "All limits of the user"))
)]
pub async fn list_budget_limits(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<BudgetLimit>>> {
    let limits = state.budget_limit_service.get_budget_limits(&user_id)?;
    Ok(Json(limits))
}

#[utoipa::path(
    put,
    path = "/api/v1/budget-limits/{limit_id}",
    params(("limit_id" = String, Path, description = "Limit to replace")),
    responses((status = 200, description = "Updated budget limit"), (status = 404, description = "Unknown limit"))
)]
pub async fn update_budget_limit(
    Path(limit_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewBudgetLimit>,
) -> ApiResult<Json<BudgetLimit>> {
    let updated = state
        .budget_limit_service
        .update_budget_limit(&limit_id, payload)
        .await?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    // Listing and updating share a path shape, so one route serves both.
    Router::new()
        .route("/budget-limits", post(create_budget_limit))
        .route(
            "/budget-limits/{id}",
            get(list_budget_limits).put(update_budget_limit),
        )
}
