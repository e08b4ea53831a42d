use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A financial summary for a farm over a reporting period.
///
/// `balance` is derived: it is recomputed from sales and expenses
/// before every persist and is never independently settable. Whether
/// `period_start <= period_end` should be enforced is an open product
/// question; it is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub id: i32,
    pub farm_id: i32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_sales: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Statement {
    /// Recompute the derived balance. Called by the write services
    /// immediately before every persist, overriding any caller value.
    pub fn recompute(&mut self) {
        self.balance = self.total_sales - self.total_expenses;
    }
}
