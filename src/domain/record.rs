use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Bill, Cents};

/// Aggregated record of all money events for one wallet on one calendar day.
///
/// Created lazily when the first bill of the day is recorded. `balance` is a
/// snapshot of the wallet balance at the end of that day: it starts from the
/// balance at creation time and moves with every bill applied to the bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar-day key.
    pub day: NaiveDate,
    /// Timestamp of the first bill, used for month filtering.
    pub date_filter: DateTime<Utc>,
    /// Wallet balance at the end of this day.
    pub balance: Cents,
    /// Sum of income amounts recorded this day.
    pub income: Cents,
    /// Sum of outcome amounts recorded this day.
    pub outcome: Cents,
    /// Bills in recording order.
    pub bills: Vec<Bill>,
}

impl DayRecord {
    pub fn open(day: NaiveDate, date_filter: DateTime<Utc>, balance: Cents) -> Self {
        Self {
            day,
            date_filter,
            balance,
            income: 0,
            outcome: 0,
            bills: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    /// Whether `date_filter` falls in the given calendar month.
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        use chrono::Datelike;
        self.date_filter.year() == year && self.date_filter.month() == month
    }
}
