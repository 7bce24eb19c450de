use serde::{Deserialize, Serialize};

use super::Cents;

/// One entry in the stock holdings list, keyed by ticker code.
///
/// Re-adding an existing code overwrites the entry in place; there is no
/// lot tracking or cost-basis accounting here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Ticker code, unique within the holdings list.
    pub code: String,
    pub name: String,
    /// Number of shares held.
    pub quantity: i64,
    /// Last known price per share.
    pub price: Cents,
}

impl Stock {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
        price: Cents,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Market value of the holding at the last known price.
    pub fn market_value(&self) -> Cents {
        self.quantity * self.price
    }
}
