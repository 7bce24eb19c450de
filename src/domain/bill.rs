use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type BillId = Uuid;

/// Direction of a money event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillKind {
    /// Money entering a wallet.
    Income,
    /// Money leaving a wallet.
    Outcome,
}

impl BillKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillKind::Income => "income",
            BillKind::Outcome => "outcome",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(BillKind::Income),
            "outcome" => Some(BillKind::Outcome),
            _ => None,
        }
    }
}

impl std::fmt::Display for BillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded income or outcome event.
///
/// Bills reference their wallet by name rather than owning it, and are
/// immutable once recorded; corrections go through an explicit delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    /// Name of the wallet this bill applies to.
    pub wallet: String,
    /// Amount in cents (always positive; direction comes from `kind`).
    pub amount: Cents,
    pub kind: BillKind,
    /// Category id, one of the catalog entries.
    pub tag: String,
    /// When the money moved in the real world.
    pub date: DateTime<Utc>,
    /// Destination wallet when this bill records a transfer.
    pub to_wallet: Option<String>,
    pub note: Option<String>,
}

impl Bill {
    pub fn new(
        wallet: impl Into<String>,
        amount: Cents,
        kind: BillKind,
        tag: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        assert!(amount > 0, "Bill amount must be positive");
        Self {
            id: Uuid::new_v4(),
            wallet: wallet.into(),
            amount,
            kind,
            tag: tag.into(),
            date,
            to_wallet: None,
            note: None,
        }
    }

    pub fn with_to_wallet(mut self, to_wallet: impl Into<String>) -> Self {
        self.to_wallet = Some(to_wallet.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Calendar day this bill is bucketed under.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}
