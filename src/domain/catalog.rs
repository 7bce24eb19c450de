//! Static reference data consumed by the ledger: category lists for income
//! and outcome bills, and the wallet kinds offered by the UI. The service
//! seeds budget plans and tag accumulators from these tables; it never
//! mutates them.

use serde::Serialize;

use super::WalletKind;

/// A spending or income category (id, display name, icon name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const INCOME_CATEGORIES: &[Category] = &[
    Category { id: "salary", name: "Salary", icon: "cash-outline" },
    Category { id: "bonus", name: "Bonus", icon: "gift-outline" },
    Category { id: "interest", name: "Interest", icon: "trending-up-outline" },
    Category { id: "other-income", name: "Other income", icon: "wallet-outline" },
];

pub const OUTCOME_CATEGORIES: &[Category] = &[
    Category { id: "food", name: "Food & Drink", icon: "fast-food-outline" },
    Category { id: "transport", name: "Transport", icon: "bus-outline" },
    Category { id: "shopping", name: "Shopping", icon: "cart-outline" },
    Category { id: "entertain", name: "Entertainment", icon: "game-controller-outline" },
    Category { id: "health", name: "Health", icon: "fitness-outline" },
    Category { id: "study", name: "Education", icon: "school-outline" },
    Category { id: "family", name: "Family", icon: "home-outline" },
    Category { id: "repay", name: "Loan repayment", icon: "card-outline" },
];

/// Category id used for bills generated by credit-card repayment transfers.
pub const REPAYMENT_TAG: &str = "repay";

/// All category ids, income first - the accumulator key set for per-tag sums.
pub fn all_categories() -> impl Iterator<Item = &'static Category> {
    INCOME_CATEGORIES.iter().chain(OUTCOME_CATEGORIES.iter())
}

pub fn find_category(id: &str) -> Option<&'static Category> {
    all_categories().find(|category| category.id == id)
}

/// A wallet kind as presented by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalletKindInfo {
    pub kind: WalletKind,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const WALLET_KINDS: &[WalletKindInfo] = &[
    WalletKindInfo { kind: WalletKind::Cash, name: "Cash", icon: "cash-outline" },
    WalletKindInfo { kind: WalletKind::Bank, name: "Bank account", icon: "business-outline" },
    WalletKindInfo { kind: WalletKind::Credit, name: "Credit card", icon: "card-outline" },
    WalletKindInfo { kind: WalletKind::Investment, name: "Investment", icon: "stats-chart-outline" },
];
