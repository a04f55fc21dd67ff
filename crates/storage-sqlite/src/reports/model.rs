//! Database models for financial reports.

use ancla_core::reports::FinancialReport;
use ancla_core::Error;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use crate::errors::StorageError;

/// Database model for financial reports. Amount maps are stored as JSON
/// objects whose values are decimal strings.
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::financial_reports)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FinancialReportDB {
    pub id: String,
    pub user_id: String,
    pub report_type: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_income: String,
    pub total_expenses: String,
    pub net_balance: String,
    pub category_breakdown: String,
    pub trends: String,
    pub created_at: NaiveDateTime,
}

fn encode_amounts(amounts: &HashMap<String, Decimal>) -> Result<String, StorageError> {
    let as_text: BTreeMap<&str, String> = amounts
        .iter()
        .map(|(key, value)| (key.as_str(), value.to_string()))
        .collect();
    Ok(serde_json::to_string(&as_text)?)
}

fn decode_amounts(json: &str) -> Result<HashMap<String, Decimal>, StorageError> {
    let as_text: HashMap<String, String> = serde_json::from_str(json)?;
    as_text
        .into_iter()
        .map(|(key, value)| -> Result<(String, Decimal), StorageError> {
            Ok((key, Decimal::from_str(&value)?))
        })
        .collect()
}

fn parse_amount(value: &str) -> Result<Decimal, StorageError> {
    Ok(Decimal::from_str(value)?)
}

impl TryFrom<FinancialReportDB> for FinancialReport {
    type Error = Error;

    fn try_from(db: FinancialReportDB) -> Result<Self, Self::Error> {
        Ok(Self {
            total_income: parse_amount(&db.total_income)?,
            total_expenses: parse_amount(&db.total_expenses)?,
            net_balance: parse_amount(&db.net_balance)?,
            category_breakdown: decode_amounts(&db.category_breakdown)?,
            trends: decode_amounts(&db.trends)?,
            id: db.id,
            user_id: db.user_id,
            report_type: db.report_type,
            period_start: db.period_start,
            period_end: db.period_end,
            created_at: db.created_at,
        })
    }
}

impl TryFrom<FinancialReport> for FinancialReportDB {
    type Error = Error;

    fn try_from(domain: FinancialReport) -> Result<Self, Self::Error> {
        Ok(Self {
            category_breakdown: encode_amounts(&domain.category_breakdown)?,
            trends: encode_amounts(&domain.trends)?,
            id: domain.id,
            user_id: domain.user_id,
            report_type: domain.report_type,
            period_start: domain.period_start,
            period_end: domain.period_end,
            total_income: domain.total_income.to_string(),
            total_expenses: domain.total_expenses.to_string(),
            net_balance: domain.net_balance.to_string(),
            created_at: domain.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_maps_keep_full_precision() {
        let mut amounts = HashMap::new();
        amounts.insert("Food".to_string(), dec!(0.1));
        amounts.insert("Rent".to_string(), dec!(1234567.891));

        let decoded = decode_amounts(&encode_amounts(&amounts).unwrap()).unwrap();

        assert_eq!(decoded, amounts);
    }

    #[test]
    fn test_malformed_breakdown_is_rejected() {
        assert!(decode_amounts("{\"Food\": \"ten\"}").is_err());
        assert!(decode_amounts("not json").is_err());
    }
}
