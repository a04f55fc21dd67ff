use super::*;
use crate::budget_limits::{BudgetLimit, BudgetLimitRepositoryTrait, NewBudgetLimit};
use crate::errors::Result;
use crate::period::Period;
use crate::savings_goals::{SavingsGoal, SavingsGoalRepositoryTrait};
use crate::transactions::{Transaction, TransactionKind, TransactionRepositoryTrait};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

// --- Mock store ---

#[derive(Default)]
struct MockStore {
    transactions: Vec<Transaction>,
    limits: Vec<BudgetLimit>,
    goals: Vec<SavingsGoal>,
    transaction_queries: Mutex<Vec<(NaiveDateTime, NaiveDateTime)>>,
}

#[async_trait]
impl TransactionRepositoryTrait for MockStore {
    fn list_transactions(
        &self,
        user_id: &str,
        created_after: NaiveDateTime,
        created_before: NaiveDateTime,
    ) -> Result<Vec<Transaction>> {
        self.transaction_queries
            .lock()
            .unwrap()
            .push((created_after, created_before));
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .filter(|t| t.created_at >= created_after && t.created_at <= created_before)
            .cloned()
            .collect())
    }

    fn list_recent_transactions(&self, _user_id: &str, _limit: i64) -> Result<Vec<Transaction>> {
        unimplemented!()
    }

    async fn insert_transaction(&self, _transaction: Transaction) -> Result<Transaction> {
        unimplemented!()
    }
}

#[async_trait]
impl BudgetLimitRepositoryTrait for MockStore {
    fn list_budget_limits(&self, user_id: &str) -> Result<Vec<BudgetLimit>> {
        Ok(self
            .limits
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_budget_limit(&self, _limit: BudgetLimit) -> Result<BudgetLimit> {
        unimplemented!()
    }

    async fn update_budget_limit(
        &self,
        _limit_id: &str,
        _update: NewBudgetLimit,
    ) -> Result<BudgetLimit> {
        unimplemented!()
    }
}

#[async_trait]
impl SavingsGoalRepositoryTrait for MockStore {
    fn list_savings_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
        Ok(self
            .goals
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_savings_goal(&self, _goal: SavingsGoal) -> Result<SavingsGoal> {
        unimplemented!()
    }

    async fn add_to_current_amount(&self, _goal_id: &str, _amount: Decimal) -> Result<SavingsGoal> {
        unimplemented!()
    }
}

// --- Helpers ---

const USER: &str = "user-1";

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn tx(kind: TransactionKind, category: &str, amount: Decimal, created_at: NaiveDateTime) -> Transaction {
    Transaction {
        id: format!("tx-{}-{}", category, created_at.and_utc().timestamp()),
        user_id: USER.to_string(),
        kind,
        category: category.to_string(),
        description: String::new(),
        amount,
        date: created_at.date(),
        created_at,
    }
}

fn limit(category: &str, amount: Decimal) -> BudgetLimit {
    BudgetLimit {
        id: format!("limit-{}", category),
        user_id: USER.to_string(),
        category: category.to_string(),
        limit_amount: amount,
        period: Period::Monthly,
        current_amount: Decimal::ZERO,
        created_at: now() - Duration::days(90),
    }
}

fn goal(target: Decimal, current: Decimal) -> SavingsGoal {
    SavingsGoal {
        id: "goal-1".to_string(),
        user_id: USER.to_string(),
        title: "Emergency fund".to_string(),
        target_amount: target,
        current_amount: current,
        target_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        description: String::new(),
        created_at: now() - Duration::days(10),
    }
}

fn service(store: MockStore) -> (AnalyticsService, Arc<MockStore>) {
    let store = Arc::new(store);
    let service = AnalyticsService::new(store.clone(), store.clone(), store.clone());
    (service, store)
}

// --- Tests ---

#[test]
fn test_empty_user_yields_zeroed_analytics() {
    let (service, _) = service(MockStore::default());

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert_eq!(analytics.total_income, Decimal::ZERO);
    assert_eq!(analytics.total_expenses, Decimal::ZERO);
    assert_eq!(analytics.net_balance, Decimal::ZERO);
    assert!(analytics.category_breakdown.is_empty());
    assert!(analytics.budget_alerts.is_empty());
    assert!(analytics.savings_progress.is_empty());
    assert_eq!(analytics.expense_trends.len(), 6);
    assert!(analytics
        .expense_trends
        .iter()
        .all(|point| point.amount == Decimal::ZERO));
}

#[test]
fn test_totals_and_expense_only_breakdown() {
    let (service, _) = service(MockStore {
        transactions: vec![
            tx(TransactionKind::Income, "Salary", dec!(1000), now()),
            tx(TransactionKind::Expense, "Food", dec!(500), now()),
        ],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert_eq!(analytics.total_income, dec!(1000));
    assert_eq!(analytics.total_expenses, dec!(500));
    assert_eq!(analytics.net_balance, dec!(500));
    assert_eq!(analytics.category_breakdown.len(), 1);
    assert_eq!(analytics.category_breakdown.get("Food"), Some(&dec!(500)));
}

#[test]
fn test_alert_is_medium_below_the_limit() {
    let (service, _) = service(MockStore {
        transactions: vec![tx(TransactionKind::Expense, "Food", dec!(475), now())],
        limits: vec![limit("Food", dec!(500))],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert_eq!(analytics.budget_alerts.len(), 1);
    let alert = &analytics.budget_alerts[0];
    assert_eq!(alert.category, "Food");
    assert_eq!(alert.percentage, dec!(95));
    assert_eq!(alert.spent, dec!(475));
    assert_eq!(alert.limit, dec!(500));
    assert_eq!(alert.severity, AlertSeverity::Medium);
}

#[test]
fn test_alert_is_high_at_the_limit() {
    let (service, _) = service(MockStore {
        transactions: vec![tx(TransactionKind::Expense, "Food", dec!(500), now())],
        limits: vec![limit("Food", dec!(500))],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert_eq!(analytics.budget_alerts.len(), 1);
    assert_eq!(analytics.budget_alerts[0].percentage, dec!(100));
    assert_eq!(analytics.budget_alerts[0].severity, AlertSeverity::High);
}

#[test]
fn test_income_does_not_count_towards_limits() {
    let (service, _) = service(MockStore {
        transactions: vec![tx(TransactionKind::Income, "Food", dec!(900), now())],
        limits: vec![limit("Food", dec!(500))],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert!(analytics.budget_alerts.is_empty());
}

#[test]
fn test_savings_progress_percentage() {
    let (service, _) = service(MockStore {
        goals: vec![goal(dec!(1000), dec!(250))],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert_eq!(analytics.savings_progress.len(), 1);
    let progress = &analytics.savings_progress[0];
    assert_eq!(progress.progress, dec!(25.0));
    assert_eq!(progress.title, "Emergency fund");
    assert_eq!(progress.current_amount, dec!(250));
}

#[test]
fn test_zero_target_goal_divides_by_one() {
    let (service, _) = service(MockStore {
        goals: vec![goal(Decimal::ZERO, dec!(3))],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert_eq!(analytics.savings_progress[0].progress, dec!(300));
}

#[test]
fn test_predictions_scale_total_expenses() {
    let (service, _) = service(MockStore {
        transactions: vec![
            tx(TransactionKind::Expense, "Rent", dec!(1200), now() - Duration::days(3)),
            tx(TransactionKind::Expense, "Food", dec!(333.33), now() - Duration::days(1)),
        ],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    let expected_next = analytics.total_expenses * dec!(1.05);
    assert_eq!(analytics.predictions.next_month_expenses, expected_next);
    assert_eq!(analytics.predictions.annual_projection, expected_next * dec!(12));
}

#[test]
fn test_extreme_stored_amounts_do_not_panic() {
    let huge = dec!(70000000000000000000000000000);
    let (service, _) = service(MockStore {
        transactions: vec![
            tx(TransactionKind::Expense, "Housing", huge, now()),
            tx(TransactionKind::Expense, "Housing", huge, now() - Duration::hours(1)),
        ],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert_eq!(analytics.total_expenses, Decimal::MAX);
    assert_eq!(analytics.category_breakdown.get("Housing"), Some(&Decimal::MAX));
    assert_eq!(analytics.expense_trends[0].amount, Decimal::MAX);
    assert_eq!(analytics.predictions.annual_projection, Decimal::MAX);
}

#[test]
fn test_window_filters_on_creation_timestamp() {
    let old_entry_dated_today = Transaction {
        date: now().date(),
        ..tx(TransactionKind::Expense, "Food", dec!(80), now() - Duration::days(40))
    };
    let (service, _) = service(MockStore {
        transactions: vec![
            old_entry_dated_today,
            tx(TransactionKind::Expense, "Food", dec!(20), now() - Duration::days(5)),
        ],
        ..Default::default()
    });

    let monthly = service.compute_analytics_at(USER, "monthly", now()).unwrap();
    let yearly = service.compute_analytics_at(USER, "yearly", now()).unwrap();

    assert_eq!(monthly.total_expenses, dec!(20));
    assert_eq!(yearly.total_expenses, dec!(100));
}

#[test]
fn test_weekly_window_excludes_older_rows() {
    let (service, store) = service(MockStore {
        transactions: vec![
            tx(TransactionKind::Income, "Salary", dec!(300), now() - Duration::days(8)),
            tx(TransactionKind::Income, "Salary", dec!(100), now() - Duration::days(2)),
        ],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "weekly", now()).unwrap();

    assert_eq!(analytics.total_income, dec!(100));
    let first_query = store.transaction_queries.lock().unwrap()[0];
    assert_eq!(first_query, (now() - Duration::days(7), now()));
}

#[test]
fn test_unknown_period_behaves_as_monthly() {
    let (service, _) = service(MockStore {
        transactions: vec![
            tx(TransactionKind::Expense, "Food", dec!(10), now() - Duration::days(20)),
            tx(TransactionKind::Expense, "Food", dec!(99), now() - Duration::days(45)),
        ],
        ..Default::default()
    });

    let unknown = service.compute_analytics_at(USER, "quarterly", now()).unwrap();
    let monthly = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert_eq!(unknown, monthly);
    assert_eq!(unknown.total_expenses, dec!(10));
}

#[test]
fn test_trend_buckets_sum_expenses_per_30_days() {
    let (service, store) = service(MockStore {
        transactions: vec![
            tx(TransactionKind::Expense, "Food", dec!(10), now()),
            tx(TransactionKind::Expense, "Food", dec!(15), now() - Duration::days(29)),
            tx(TransactionKind::Expense, "Food", dec!(40), now() - Duration::days(45)),
            tx(TransactionKind::Income, "Salary", dec!(5000), now() - Duration::days(45)),
            tx(TransactionKind::Expense, "Rent", dec!(70), now() - Duration::days(170)),
            tx(TransactionKind::Expense, "Rent", dec!(999), now() - Duration::days(200)),
        ],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    let amounts: Vec<Decimal> = analytics.expense_trends.iter().map(|p| p.amount).collect();
    assert_eq!(
        amounts,
        vec![dec!(25), dec!(40), Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, dec!(70)]
    );
    // One query for the window plus one per bucket.
    assert_eq!(store.transaction_queries.lock().unwrap().len(), 7);
}

#[test]
fn test_bucket_boundary_is_counted_once() {
    let boundary = now() - Duration::days(30);
    let (service, _) = service(MockStore {
        transactions: vec![tx(TransactionKind::Expense, "Food", dec!(12), boundary)],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    let total: Decimal = analytics.expense_trends.iter().map(|p| p.amount).sum();
    assert_eq!(total, dec!(12));
    assert_eq!(analytics.expense_trends[0].amount, dec!(12));
}

#[test]
fn test_trend_labels_follow_bucket_start() {
    let (service, _) = service(MockStore::default());

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    let months: Vec<&str> = analytics
        .expense_trends
        .iter()
        .map(|p| p.month.as_str())
        .collect();
    assert_eq!(
        months,
        vec!["2025-06", "2025-05", "2025-04", "2025-03", "2025-02", "2025-01"]
    );
}

#[test]
fn test_blank_category_is_bucketed_as_uncategorized() {
    let (service, _) = service(MockStore {
        transactions: vec![
            tx(TransactionKind::Expense, "", dec!(7), now()),
            tx(TransactionKind::Expense, "  ", dec!(3), now()),
        ],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert_eq!(
        analytics.category_breakdown.get("Uncategorized"),
        Some(&dec!(10))
    );
}

#[test]
fn test_other_users_are_invisible() {
    let mut foreign = tx(TransactionKind::Expense, "Food", dec!(500), now());
    foreign.user_id = "user-2".to_string();
    let (service, _) = service(MockStore {
        transactions: vec![foreign],
        limits: vec![limit("Food", dec!(100))],
        ..Default::default()
    });

    let analytics = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert_eq!(analytics.total_expenses, Decimal::ZERO);
    assert!(analytics.budget_alerts.is_empty());
}

#[test]
fn test_repeated_calls_are_identical() {
    let (service, _) = service(MockStore {
        transactions: vec![
            tx(TransactionKind::Income, "Salary", dec!(2000), now() - Duration::days(2)),
            tx(TransactionKind::Expense, "Food", dec!(480), now() - Duration::days(1)),
            tx(TransactionKind::Expense, "Fun", dec!(55), now() - Duration::days(60)),
        ],
        limits: vec![limit("Food", dec!(500)), limit("Fun", dec!(50))],
        goals: vec![goal(dec!(1000), dec!(250))],
        ..Default::default()
    });

    let first = service.compute_analytics_at(USER, "monthly", now()).unwrap();
    let second = service.compute_analytics_at(USER, "monthly", now()).unwrap();

    assert_eq!(first, second);
}
