use serde::{Deserialize, Serialize};

use super::catalog::Category;
use super::{BillKind, Cents};

/// First-run budget seeded for every outcome category.
pub const DEFAULT_OUTCOME_BUDGET: Cents = 100_000;
/// First-run budget seeded for every income category.
pub const DEFAULT_INCOME_BUDGET: Cents = 1_000_000;

/// A budgeted target amount for one spending or income category.
///
/// Plans are persisted one record per category under a composite key, see
/// [`crate::storage::keys::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPlan {
    /// Category id this plan budgets, one of the catalog entries.
    pub id: String,
    pub name: String,
    pub kind: BillKind,
    /// Budgeted amount for the category.
    pub value: Cents,
    pub icon: String,
}

impl TagPlan {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: BillKind,
        value: Cents,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            value,
            icon: icon.into(),
        }
    }

    /// The plan seeded on first run for a catalog category.
    pub fn default_for(category: &Category, kind: BillKind) -> Self {
        let value = match kind {
            BillKind::Income => DEFAULT_INCOME_BUDGET,
            BillKind::Outcome => DEFAULT_OUTCOME_BUDGET,
        };
        Self::new(category.id, category.name, kind, value, category.icon)
    }
}
