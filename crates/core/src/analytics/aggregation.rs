//! Pure aggregation helpers shared by the analytics and report services.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::analytics_model::{
    AlertSeverity, BudgetAlert, ExpensePredictions, SavingsProgress, TransactionTotals,
};
use crate::budget_limits::BudgetLimit;
use crate::constants::{
    ALERT_HIGH_PERCENT, ALERT_THRESHOLD_PERCENT, MONTHS_PER_YEAR, PROJECTION_GROWTH_FACTOR,
    TREND_BUCKET_COUNT, TREND_BUCKET_DAYS,
};
use crate::period::TimeWindow;
use crate::savings_goals::SavingsGoal;
use crate::transactions::{Transaction, TransactionKind};

const HUNDRED: Decimal = dec!(100);

/// `part / whole * 100`, or zero when `whole` is zero.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

pub fn summarize_totals(transactions: &[Transaction]) -> TransactionTotals {
    let mut totals = TransactionTotals::default();
    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => {
                totals.total_income = totals.total_income.saturating_add(transaction.amount)
            }
            TransactionKind::Expense => {
                totals.total_expenses = totals.total_expenses.saturating_add(transaction.amount)
            }
        }
    }
    totals.net_balance = totals.total_income.saturating_sub(totals.total_expenses);
    totals
}

/// Sums expense amounts per category. Income is left out.
pub fn expense_breakdown(transactions: &[Transaction]) -> HashMap<String, Decimal> {
    breakdown_of(transactions.iter().filter(|t| t.is_expense()))
}

/// Sums every transaction per category, whatever its kind.
pub fn full_breakdown(transactions: &[Transaction]) -> HashMap<String, Decimal> {
    breakdown_of(transactions.iter())
}

fn breakdown_of<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> HashMap<String, Decimal> {
    let mut breakdown: HashMap<String, Decimal> = HashMap::new();
    for transaction in transactions {
        let total = breakdown
            .entry(transaction.category_label().to_string())
            .or_insert(Decimal::ZERO);
        *total = total.saturating_add(transaction.amount);
    }
    breakdown
}

/// One alert per limit whose category spend is at or above 90% of the limit,
/// in the order the limits are given.
pub fn budget_alerts(
    limits: &[BudgetLimit],
    breakdown: &HashMap<String, Decimal>,
) -> Vec<BudgetAlert> {
    limits
        .iter()
        .filter_map(|limit| {
            let spent = breakdown
                .get(&limit.category)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let percentage = percent_of(spent, limit.limit_amount);
            if percentage < ALERT_THRESHOLD_PERCENT {
                return None;
            }
            let severity = if percentage >= ALERT_HIGH_PERCENT {
                AlertSeverity::High
            } else {
                AlertSeverity::Medium
            };
            Some(BudgetAlert {
                category: limit.category.clone(),
                percentage,
                spent,
                limit: limit.limit_amount,
                severity,
            })
        })
        .collect()
}

pub fn savings_progress(goals: &[SavingsGoal]) -> Vec<SavingsProgress> {
    goals
        .iter()
        .map(|goal| {
            // A zero target divides by one instead.
            let denominator = if goal.target_amount.is_zero() {
                Decimal::ONE
            } else {
                goal.target_amount
            };
            SavingsProgress {
                id: goal.id.clone(),
                title: goal.title.clone(),
                progress: percent_of(goal.current_amount, denominator),
                current_amount: goal.current_amount,
                target_amount: goal.target_amount,
            }
        })
        .collect()
}

/// Sums amounts, clamping at the `Decimal` bounds instead of overflowing.
pub fn sum_amounts(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
}

/// Arithmetic saturates, so an extreme total yields `Decimal::MAX` rather than
/// a panic.
pub fn project_expenses(total_expenses: Decimal) -> ExpensePredictions {
    let next_month_expenses = total_expenses.saturating_mul(PROJECTION_GROWTH_FACTOR);
    ExpensePredictions {
        next_month_expenses,
        annual_projection: next_month_expenses.saturating_mul(MONTHS_PER_YEAR),
    }
}

/// The six trend buckets, most recent first. Bucket `i` spans
/// `[now - 30(i+1)d, now - 30i d]`.
pub fn trend_windows(now: NaiveDateTime) -> Vec<TimeWindow> {
    (0..TREND_BUCKET_COUNT)
        .map(|i| {
            TimeWindow::new(
                now - Duration::days(TREND_BUCKET_DAYS * (i + 1)),
                now - Duration::days(TREND_BUCKET_DAYS * i),
            )
        })
        .collect()
}

/// `YYYY-MM` label of a bucket's start instant.
pub fn month_label(instant: NaiveDateTime) -> String {
    instant.format("%Y-%m").to_string()
}
