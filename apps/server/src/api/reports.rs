use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use ancla_core::reports::FinancialReport;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

fn default_report_type() -> String {
    "monthly".to_string()
}

#[derive(Deserialize)]
pub struct ReportQuery {
    #[serde(default = "default_report_type")]
    pub report_type: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/financial-reports/{user_id}",
    params(
        ("user_id" = String, Path, description = "Owner"),
        ("report_type" = Option<String>, Query, description = "Period token, monthly by default")
    ),
    responses((status = 200, description = "Newly generated and stored report"))
)]
pub async fn generate_report(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Json<FinancialReport>> {
    let report = state
        .report_service
        .generate_report(&user_id, &query.report_type)
        .await?;
    Ok(Json(report))
}

#[utoipa::path(
    get,
    path = "/api/v1/financial-reports/{user_id}/history",
    params(("user_id" = String, Path, description = "Owner")),
    responses((status = 200, description = "Stored reports, newest first"))
)]
pub async fn list_reports(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<FinancialReport>>> {
    let reports = state.report_service.get_reports(&user_id)?;
    Ok(Json(reports))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/financial-reports/{user_id}", get(generate_report))
        .route("/financial-reports/{user_id}/history", get(list_reports))
}
