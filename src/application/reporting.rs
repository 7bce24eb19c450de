use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Bill, Cents};

/// Bills from every wallet for one calendar day, merged into one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub bills: Vec<Bill>,
}

/// Income/outcome totals for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub income: Cents,
    pub outcome: Cents,
    pub net: Cents,
}

/// Aggregate asset and debt position across all wallets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetWorth {
    /// Sum of balances over non-credit wallets.
    pub balance: Cents,
    /// Sum of outstanding loans over all wallets.
    pub loan: Cents,
    pub net: Cents,
}

/// One end-of-day balance sample, chart input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: DateTime<Utc>,
    pub balance: Cents,
}
