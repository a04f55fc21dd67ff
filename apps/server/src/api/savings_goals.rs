use std::str::FromStr;
use std::sync::Arc;

use crate::{
    api::transactions::OwnerQuery,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use ancla_core::savings_goals::{NewSavingsGoal, SavingsGoal};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct AddMoneyQuery {
    pub amount: String,
}

#[derive(Serialize)]
pub struct AddMoneyResponse {
    pub message: String,
    pub new_amount: Decimal,
}

#[utoipa::path(
    post,
    path = "/api/v1/savings-goals",
    params(("user_id" = String, Query, description = "Owner of the new goal")),
    responses((status = 200, description = "Stored savings goal"), (status = 400, description = "Missing title"))
)]
pub async fn create_savings_goal(
    State(state): State<Arc<AppState>>,
    Query(owner): Query<OwnerQuery>,
    Json(payload): Json<NewSavingsGoal>,
) -> ApiResult<Json<SavingsGoal>> {
    let created = state
        .savings_goal_service
        .create_savings_goal(&owner.user_id, payload)
        .await?;
    Ok(Json(created))
}

#[utoipa::path(
    get,
    path = "/api/v1/savings-goals/{user_id}",
    params(("user_id" = String, Path, description = "Owner")),
    responses((status = 200, description = "All goals of the user"))
)]
pub async fn list_savings_goals(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<SavingsGoal>>> {
    let goals = state.savings_goal_service.get_savings_goals(&user_id)?;
    Ok(Json(goals))
}

#[utoipa::path(
    put,
    path = "/api/v1/savings-goals/{goal_id}/add-money",
    params(
        ("goal_id" = String, Path, description = "Goal to deposit into"),
        ("amount" = String, Query, description = "Decimal amount to add")
    ),
    responses((status = 200, description = "New current amount"), (status = 404, description = "Unknown goal"))
)]
pub async fn add_money(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<AddMoneyQuery>,
) -> ApiResult<Json<AddMoneyResponse>> {
    let amount = Decimal::from_str(query.amount.trim())
        .map_err(|e| ApiError::BadRequest(format!("Invalid amount '{}': {}", query.amount, e)))?;
    let goal = state.savings_goal_service.add_money(&goal_id, amount).await?;
    Ok(Json(AddMoneyResponse {
        message: "Money added successfully".to_string(),
        new_amount: goal.current_amount,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/savings-goals", post(create_savings_goal))
        .route("/savings-goals/{id}", get(list_savings_goals))
        .route("/savings-goals/{id}/add-money", put(add_money))
}
