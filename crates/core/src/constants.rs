use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Category label used when a transaction carries no category
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Maximum number of transactions returned by the listing endpoint
pub const TRANSACTION_LIST_LIMIT: i64 = 1000;

/// Spend/limit percentage at which a budget alert is raised
pub const ALERT_THRESHOLD_PERCENT: Decimal = dec!(90);

/// Spend/limit percentage at which an alert becomes high severity
pub const ALERT_HIGH_PERCENT: Decimal = dec!(100);

/// Number of 30-day buckets in the expense trend series
pub const TREND_BUCKET_COUNT: i64 = 6;

/// Length of one trend bucket, in days
pub const TREND_BUCKET_DAYS: i64 = 30;

/// Month-over-month growth assumed by the expense projection
pub const PROJECTION_GROWTH_FACTOR: Decimal = dec!(1.05);

/// Months in the annual projection
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Growth rate placed in every generated report's trends map
pub const REPORT_GROWTH_RATE: Decimal = dec!(0.05);

/// Largest magnitude accepted for a single transaction amount or deposit.
/// Sums and projections over bounded amounts stay far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);
