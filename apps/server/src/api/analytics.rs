use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use ancla_core::analytics::BudgetAnalytics;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

fn default_period() -> String {
    "monthly".to_string()
}

#[derive(Deserialize)]
pub struct PeriodQuery {
    #[serde(default = "default_period")]
    pub period: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/budget-analytics/{user_id}",
    params(
        ("user_id" = String, Path, description = "Owner"),
        ("period" = Option<String>, Query, description = "weekly, monthly (default) or yearly")
    ),
    responses((status = 200, description = "Totals, breakdown, alerts, trends and projection"))
)]
pub async fn get_budget_analytics(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<BudgetAnalytics>> {
    let analytics = state
        .analytics_service
        .compute_analytics(&user_id, &query.period)?;
    Ok(Json(analytics))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/budget-analytics/{user_id}", get(get_budget_analytics))
}
