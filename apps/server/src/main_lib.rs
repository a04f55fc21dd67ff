use std::sync::Arc;

use crate::config::Config;
use ancla_core::{
    analytics::{AnalyticsService, AnalyticsServiceTrait},
    budget_limits::{BudgetLimitService, BudgetLimitServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    savings_goals::{SavingsGoalService, SavingsGoalServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
};
use ancla_storage_sqlite::{
    budget_limits::BudgetLimitRepository,
    db::{self, write_actor},
    reports::FinancialReportRepository,
    savings_goals::SavingsGoalRepository,
    transactions::TransactionRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub transaction_service: Arc<dyn TransactionServiceTrait + Send + Sync>,
    pub budget_limit_service: Arc<dyn BudgetLimitServiceTrait + Send + Sync>,
    pub savings_goal_service: Arc<dyn SavingsGoalServiceTrait + Send + Sync>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait + Send + Sync>,
    pub report_service: Arc<dyn ReportServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("ANCLA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let budget_limit_repository = Arc::new(BudgetLimitRepository::new(pool.clone(), writer.clone()));
    let savings_goal_repository = Arc::new(SavingsGoalRepository::new(pool.clone(), writer.clone()));
    let report_repository = Arc::new(FinancialReportRepository::new(pool.clone(), writer.clone()));

    let transaction_service = Arc::new(TransactionService::new(transaction_repository.clone()));
    let budget_limit_service = Arc::new(BudgetLimitService::new(budget_limit_repository.clone()));
    let savings_goal_service = Arc::new(SavingsGoalService::new(savings_goal_repository.clone()));
    let analytics_service = Arc::new(AnalyticsService::new(
        transaction_repository.clone(),
        budget_limit_repository,
        savings_goal_repository,
    ));
    let report_service = Arc::new(ReportService::new(
        transaction_repository,
        report_repository,
    ));

    Ok(Arc::new(AppState {
        transaction_service,
        budget_limit_service,
        savings_goal_service,
        analytics_service,
        report_service,
    }))
}
