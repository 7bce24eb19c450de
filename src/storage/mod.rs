mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use anyhow::Result;
use serde_json::Value;

/// SQL migration for the key-value schema
pub const MIGRATION_001_KV: &str = include_str!("migrations/001_kv.sql");

/// Asynchronous key-value persistence consumed by the ledger service.
///
/// The ledger treats storage as an external collaborator: JSON documents
/// under well-known keys (see [`keys`]), no schema beyond that. `ready`
/// resolves once the backend can serve reads; the service awaits it before
/// touching any key.
#[allow(async_fn_in_trait)]
pub trait Store {
    async fn ready(&self) -> Result<()>;
    async fn get(&self, key: &str) -> Result<Option<Value>>;
    async fn set(&self, key: &str, value: Value) -> Result<()>;
}

/// Well-known storage keys.
pub mod keys {
    use crate::domain::BillKind;

    /// The full wallet collection.
    pub const WALLETS: &str = "wallets";
    /// The stock holdings list.
    pub const STOCK: &str = "stock";
    /// Sentinel marking that default budget plans were seeded.
    pub const PLAN_SETTED: &str = "plan-setted";

    /// Composite key for one category's budget plan.
    pub fn plan(kind: BillKind, category_id: &str) -> String {
        match kind {
            BillKind::Income => format!("planIncome{}", category_id),
            BillKind::Outcome => format!("planOutcome{}", category_id),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_plan_keys_match_store_layout() {
            assert_eq!(plan(BillKind::Income, "salary"), "planIncomesalary");
            assert_eq!(plan(BillKind::Outcome, "food"), "planOutcomefood");
        }
    }
}
