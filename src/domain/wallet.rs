use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Bill, BillId, BillKind, Cents, DayRecord};

pub type WalletId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    /// Physical cash on hand.
    Cash,
    /// Checking or savings account.
    Bank,
    /// Credit card - balance tracks credit consumed, `loan` tracks debt.
    Credit,
    /// Brokerage or margin account.
    Investment,
}

impl WalletKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletKind::Cash => "cash",
            WalletKind::Bank => "bank",
            WalletKind::Credit => "credit",
            WalletKind::Investment => "investment",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(WalletKind::Cash),
            "bank" => Some(WalletKind::Bank),
            "credit" => Some(WalletKind::Credit),
            "investment" => Some(WalletKind::Investment),
            _ => None,
        }
    }

    /// Credit wallets carry a loan that moves inversely to a normal balance
    /// and are excluded from net-balance sums.
    pub fn is_credit(&self) -> bool {
        matches!(self, WalletKind::Credit)
    }
}

impl std::fmt::Display for WalletKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An account holding a balance and a day-bucketed bill history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub name: String,
    pub kind: WalletKind,
    pub current_balance: Cents,
    /// Outstanding debt. Only meaningful for credit wallets, 0 otherwise.
    #[serde(default)]
    pub loan: Cents,
    /// One bucket per calendar day, iterated in calendar order.
    #[serde(default)]
    pub records: BTreeMap<NaiveDate, DayRecord>,
    pub created_at: DateTime<Utc>,
}

impl Wallet {
    pub fn new(name: impl Into<String>, kind: WalletKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            current_balance: 0,
            loan: 0,
            records: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_balance(mut self, balance: Cents) -> Self {
        self.current_balance = balance;
        self
    }

    pub fn with_loan(mut self, loan: Cents) -> Self {
        self.loan = loan;
        self
    }

    pub fn is_credit(&self) -> bool {
        self.kind.is_credit()
    }

    /// Append a bill to its day bucket and apply the signed effect to the
    /// bucket sums, the wallet balance and (for credit wallets) the loan.
    ///
    /// The bucket is created on the first bill of the day, with its balance
    /// snapshot starting from the wallet balance at that moment.
    pub fn apply_bill(&mut self, bill: Bill) {
        let (amount, kind) = (bill.amount, bill.kind);
        let snapshot = self.current_balance;
        let record = self
            .records
            .entry(bill.day())
            .or_insert_with(|| DayRecord::open(bill.day(), bill.date, snapshot));

        match kind {
            BillKind::Income => {
                record.balance += amount;
                record.income += amount;
            }
            BillKind::Outcome => {
                record.balance -= amount;
                record.outcome += amount;
            }
        }
        record.bills.push(bill);

        match kind {
            BillKind::Income => {
                self.current_balance += amount;
                if self.is_credit() {
                    self.loan -= amount;
                }
            }
            BillKind::Outcome => {
                self.current_balance -= amount;
                if self.is_credit() {
                    self.loan += amount;
                }
            }
        }
    }

    /// Remove a previously recorded bill and apply the exact inverse of
    /// [`Wallet::apply_bill`]. The bucket is looked up by the bill's own
    /// date, so removal is always symmetric with recording.
    pub fn remove_bill(&mut self, bill: &Bill) -> Result<Bill, RemoveBillError> {
        let record = self
            .records
            .get_mut(&bill.day())
            .ok_or(RemoveBillError::BucketNotFound(bill.day()))?;

        let position = record
            .bills
            .iter()
            .position(|b| b.id == bill.id)
            .ok_or(RemoveBillError::BillNotFound(bill.id))?;
        let removed = record.bills.remove(position);

        match removed.kind {
            BillKind::Income => {
                record.balance -= removed.amount;
                record.income -= removed.amount;
            }
            BillKind::Outcome => {
                record.balance += removed.amount;
                record.outcome -= removed.amount;
            }
        }

        match removed.kind {
            BillKind::Income => {
                self.current_balance -= removed.amount;
                if self.is_credit() {
                    self.loan += removed.amount;
                }
            }
            BillKind::Outcome => {
                self.current_balance += removed.amount;
                if self.is_credit() {
                    self.loan -= removed.amount;
                }
            }
        }

        Ok(removed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveBillError {
    BucketNotFound(NaiveDate),
    BillNotFound(BillId),
}

impl std::fmt::Display for RemoveBillError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoveBillError::BucketNotFound(day) => {
                write!(f, "no transactions recorded on {}", day)
            }
            RemoveBillError::BillNotFound(id) => write!(f, "bill not found: {}", id),
        }
    }
}

impl std::error::Error for RemoveBillError {}
