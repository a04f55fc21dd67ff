use ancla_core::reports::{FinancialReport, FinancialReportRepositoryTrait};
use ancla_core::Result;

use super::model::FinancialReportDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::financial_reports;
use crate::schema::financial_reports::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

/// Append-only store of generated reports.
pub struct FinancialReportRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl FinancialReportRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        FinancialReportRepository { pool, writer }
    }
}

#[async_trait]
impl FinancialReportRepositoryTrait for FinancialReportRepository {
    async fn append_report(&self, report: FinancialReport) -> Result<String> {
        let row = FinancialReportDB::try_from(report)?;
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<String> {
                diesel::insert_into(financial_reports::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(row.id)
            })
            .await
    }

    fn list_reports(&self, owner: &str) -> Result<Vec<FinancialReport>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = financial_reports
            .filter(user_id.eq(owner))
            .order((created_at.desc(), id.desc()))
            .select(FinancialReportDB::as_select())
            .load::<FinancialReportDB>(&mut conn)
            .into_core()?;
        rows.into_iter().map(FinancialReport::try_from).collect()
    }
}
