// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use billfold::application::LedgerService;
use billfold::domain::{Wallet, WalletKind};
use billfold::storage::MemoryStore;
use chrono::{DateTime, NaiveDate, Utc};

/// Helper to create a test service over a fresh in-memory store
pub async fn test_service() -> Result<LedgerService<MemoryStore>> {
    Ok(LedgerService::load(MemoryStore::new()).await?)
}

/// Like [`test_service`] but also returns a handle to the backing store,
/// for asserting on persisted state or reloading a second service.
pub async fn test_service_with_store() -> Result<(LedgerService<MemoryStore>, MemoryStore)> {
    let store = MemoryStore::new();
    let service = LedgerService::load(store.clone()).await?;
    Ok((service, store))
}

/// Helper to parse a date string into DateTime<Utc> (midday, avoids any
/// day-boundary surprises)
pub fn parse_date(date_str: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
}

pub fn day(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Test fixture: standard wallet setup
pub struct StandardWallets;

impl StandardWallets {
    /// Cash wallet holding 100_000, checking account holding 500_000 and a
    /// credit card with 200_000 outstanding.
    pub async fn create_basic(service: &mut LedgerService<MemoryStore>) -> Result<()> {
        service
            .add_wallet(Wallet::new("Cash", WalletKind::Cash).with_balance(100_000))
            .await?;
        service
            .add_wallet(Wallet::new("Checking", WalletKind::Bank).with_balance(500_000))
            .await?;
        service
            .add_wallet(Wallet::new("Visa", WalletKind::Credit).with_loan(200_000))
            .await?;
        Ok(())
    }
}
