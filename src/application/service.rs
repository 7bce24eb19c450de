use std::collections::HashMap;

use anyhow::Context;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde_json::json;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::{
    Bill, BillKind, Cents, DayRecord, Stock, TagPlan, Wallet, catalog,
};
use crate::storage::{Store, keys};

use super::{BalancePoint, DayGroup, LedgerError, MonthSummary, NetWorth};

/// Event published on the stock channel after holdings mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockEvent {
    /// Initial value observed before any mutation.
    Loaded,
    /// The holdings list changed (add or sell).
    Changed,
}

/// The bookkeeping core: wallets with day-bucketed bill histories, budget
/// plans per category and a stock holdings list, persisted through an
/// external key-value [`Store`].
///
/// The service owns the in-memory state for the whole app session and is the
/// only writer. Every mutating operation persists before returning and then
/// publishes the new state on a watch channel, so UI subscribers always
/// observe the latest snapshot - including subscribers that attach late.
pub struct LedgerService<S: Store> {
    store: S,
    wallets: Vec<Wallet>,
    stock_list: Vec<Stock>,
    income_plan: Vec<TagPlan>,
    outcome_plan: Vec<TagPlan>,
    wallet_tx: watch::Sender<Vec<Wallet>>,
    stock_tx: watch::Sender<StockEvent>,
}

impl<S: Store> LedgerService<S> {
    /// Load the persisted state and build the service.
    ///
    /// Waits for the store, loads wallets and stock (empty when absent) and
    /// ensures budget plans exist: the first run seeds a default plan per
    /// catalog category and writes the `plan-setted` sentinel so seeding
    /// happens at most once; later runs load the persisted plans. The wallet
    /// channel carries the loaded snapshot before this returns, so no
    /// subscriber can observe pre-load state.
    pub async fn load(store: S) -> Result<Self, LedgerError> {
        store.ready().await?;

        let wallets: Vec<Wallet> = match store.get(keys::WALLETS).await? {
            Some(value) => {
                serde_json::from_value(value).context("Malformed wallets record")?
            }
            None => Vec::new(),
        };
        let stock_list: Vec<Stock> = match store.get(keys::STOCK).await? {
            Some(value) => serde_json::from_value(value).context("Malformed stock record")?,
            None => Vec::new(),
        };

        let (income_plan, outcome_plan) = Self::load_or_seed_plans(&store).await?;

        debug!(
            wallets = wallets.len(),
            stocks = stock_list.len(),
            "ledger state loaded"
        );

        let (wallet_tx, _) = watch::channel(wallets.clone());
        let (stock_tx, _) = watch::channel(StockEvent::Loaded);

        Ok(Self {
            store,
            wallets,
            stock_list,
            income_plan,
            outcome_plan,
            wallet_tx,
            stock_tx,
        })
    }

    async fn load_or_seed_plans(
        store: &S,
    ) -> Result<(Vec<TagPlan>, Vec<TagPlan>), LedgerError> {
        let seeded = store
            .get(keys::PLAN_SETTED)
            .await?
            .and_then(|value| value.as_bool())
            .unwrap_or(false);

        if !seeded {
            let income = Self::seed_plans(store, catalog::INCOME_CATEGORIES, BillKind::Income).await?;
            let outcome =
                Self::seed_plans(store, catalog::OUTCOME_CATEGORIES, BillKind::Outcome).await?;
            store.set(keys::PLAN_SETTED, json!(true)).await?;
            debug!("seeded default budget plans");
            return Ok((income, outcome));
        }

        let income = Self::load_plans(store, catalog::INCOME_CATEGORIES, BillKind::Income).await?;
        let outcome =
            Self::load_plans(store, catalog::OUTCOME_CATEGORIES, BillKind::Outcome).await?;
        Ok((income, outcome))
    }

    async fn seed_plans(
        store: &S,
        categories: &[catalog::Category],
        kind: BillKind,
    ) -> Result<Vec<TagPlan>, LedgerError> {
        let mut plans = Vec::with_capacity(categories.len());
        for category in categories {
            let plan = TagPlan::default_for(category, kind);
            let value = serde_json::to_value(&plan).context("Failed to encode plan")?;
            store.set(&keys::plan(kind, &plan.id), value).await?;
            plans.push(plan);
        }
        Ok(plans)
    }

    async fn load_plans(
        store: &S,
        categories: &[catalog::Category],
        kind: BillKind,
    ) -> Result<Vec<TagPlan>, LedgerError> {
        let mut plans = Vec::with_capacity(categories.len());
        for category in categories {
            match store.get(&keys::plan(kind, category.id)).await? {
                Some(value) => {
                    plans.push(serde_json::from_value(value).context("Malformed plan record")?)
                }
                None => {
                    // A category added after first run has no persisted plan
                    // yet; seed its default now.
                    warn!(category = category.id, "missing persisted plan, seeding default");
                    let plan = TagPlan::default_for(category, kind);
                    let value = serde_json::to_value(&plan).context("Failed to encode plan")?;
                    store.set(&keys::plan(kind, &plan.id), value).await?;
                    plans.push(plan);
                }
            }
        }
        Ok(plans)
    }

    // ========================
    // Subscriptions
    // ========================

    /// Subscribe to wallet snapshots. The receiver immediately holds the
    /// current collection and is notified after every wallet mutation.
    pub fn subscribe_wallets(&self) -> watch::Receiver<Vec<Wallet>> {
        self.wallet_tx.subscribe()
    }

    /// Subscribe to stock-list change events.
    pub fn subscribe_stock(&self) -> watch::Receiver<StockEvent> {
        self.stock_tx.subscribe()
    }

    // ========================
    // Wallet operations
    // ========================

    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn wallet(&self, name: &str) -> Result<&Wallet, LedgerError> {
        self.wallets
            .iter()
            .find(|wallet| wallet.name == name)
            .ok_or_else(|| LedgerError::WalletNotFound(name.to_string()))
    }

    /// Sum of balances over non-credit wallets. A credit wallet's balance
    /// tracks credit consumed, not an asset, so it is excluded.
    pub fn current_balance(&self) -> Cents {
        self.wallets
            .iter()
            .filter(|wallet| !wallet.is_credit())
            .map(|wallet| wallet.current_balance)
            .sum()
    }

    /// Aggregate outstanding debt over all wallets.
    pub fn current_loan(&self) -> Cents {
        self.wallets.iter().map(|wallet| wallet.loan).sum()
    }

    pub fn net_worth(&self) -> NetWorth {
        let balance = self.current_balance();
        let loan = self.current_loan();
        NetWorth {
            balance,
            loan,
            net: balance - loan,
        }
    }

    /// Add a wallet to the collection and persist it.
    ///
    /// Wallets are addressed by name everywhere (bills carry a wallet name),
    /// so duplicate names are rejected rather than silently shadowed.
    pub async fn add_wallet(&mut self, wallet: Wallet) -> Result<Wallet, LedgerError> {
        if self.wallets.iter().any(|w| w.name == wallet.name) {
            return Err(LedgerError::WalletAlreadyExists(wallet.name));
        }

        debug!(wallet = %wallet.name, kind = %wallet.kind, "adding wallet");
        let added = wallet.clone();
        self.wallets.push(wallet);
        self.save_wallets().await?;
        Ok(added)
    }

    /// Move money between two wallets.
    ///
    /// The source must cover the amount; otherwise nothing is mutated and
    /// [`LedgerError::InsufficientFunds`] is returned. A transfer into a
    /// credit wallet models a card repayment: the debit is recorded as an
    /// outcome bill against the source and the destination's loan shrinks
    /// by the amount. Either way the source loses the amount exactly once.
    pub async fn transfer_money(
        &mut self,
        from: &str,
        to: &str,
        amount: Cents,
        date: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(
                "transfer amount must be positive".to_string(),
            ));
        }
        let from_idx = self.wallet_index(from)?;
        let to_idx = self.wallet_index(to)?;
        if from_idx == to_idx {
            return Err(LedgerError::InvalidAmount(
                "cannot transfer a wallet to itself".to_string(),
            ));
        }

        let balance = self.wallets[from_idx].current_balance;
        if balance < amount {
            return Err(LedgerError::InsufficientFunds {
                wallet: from.to_string(),
                balance,
                required: amount,
            });
        }

        debug!(from, to, amount, "transferring money");
        if self.wallets[to_idx].is_credit() {
            let repayment = Bill::new(from, amount, BillKind::Outcome, catalog::REPAYMENT_TAG, date)
                .with_to_wallet(to);
            self.wallets[from_idx].apply_bill(repayment);

            let destination = &mut self.wallets[to_idx];
            destination.current_balance += amount;
            destination.loan -= amount;
        } else {
            self.wallets[from_idx].current_balance -= amount;
            self.wallets[to_idx].current_balance += amount;
        }

        self.save_wallets().await
    }

    // ========================
    // Bill operations
    // ========================

    /// Record a money event against its wallet.
    ///
    /// The day bucket keyed by the bill's calendar day is created on first
    /// use; the bill is appended and its signed effect applied to the bucket
    /// sums, the wallet balance and (for credit wallets) the loan.
    pub async fn record_bill(&mut self, bill: Bill) -> Result<(), LedgerError> {
        if bill.amount <= 0 {
            return Err(LedgerError::InvalidAmount(
                "bill amount must be positive".to_string(),
            ));
        }
        let wallet = self
            .wallets
            .iter_mut()
            .find(|wallet| wallet.name == bill.wallet)
            .ok_or_else(|| LedgerError::WalletNotFound(bill.wallet.clone()))?;

        debug!(wallet = %bill.wallet, amount = bill.amount, kind = %bill.kind, "recording bill");
        wallet.apply_bill(bill);
        self.save_wallets().await
    }

    /// Delete a recorded bill, applying the exact inverse of
    /// [`LedgerService::record_bill`]. The bucket is located by the bill's
    /// own date; a missing bucket or bill is a typed error, never a crash.
    pub async fn delete_bill(&mut self, bill: &Bill) -> Result<(), LedgerError> {
        let wallet = self
            .wallets
            .iter_mut()
            .find(|wallet| wallet.name == bill.wallet)
            .ok_or_else(|| LedgerError::WalletNotFound(bill.wallet.clone()))?;

        debug!(wallet = %bill.wallet, bill = %bill.id, "deleting bill");
        wallet.remove_bill(bill)?;
        self.save_wallets().await
    }

    // ========================
    // Read projections
    // ========================

    /// Every wallet's day bucket for the given calendar day.
    pub fn bills_by_day(&self, day: NaiveDate) -> Vec<&DayRecord> {
        self.wallets
            .iter()
            .filter_map(|wallet| wallet.records.get(&day))
            .collect()
    }

    /// Day groups for the given month, bills from same-day buckets of
    /// different wallets merged, latest day first.
    pub fn bills_by_month(&self, year: i32, month: u32) -> Vec<DayGroup> {
        let mut groups: std::collections::BTreeMap<NaiveDate, Vec<Bill>> = Default::default();
        for wallet in &self.wallets {
            for record in wallet.records.values() {
                if record.in_month(year, month) {
                    groups
                        .entry(record.day)
                        .or_default()
                        .extend(record.bills.iter().cloned());
                }
            }
        }

        groups
            .into_iter()
            .rev()
            .map(|(day, bills)| DayGroup { day, bills })
            .collect()
    }

    /// Income and outcome totals for the given month.
    pub fn month_summary(&self, year: i32, month: u32) -> MonthSummary {
        let mut income = 0;
        let mut outcome = 0;
        for wallet in &self.wallets {
            for record in wallet.records.values() {
                if record.in_month(year, month) {
                    income += record.income;
                    outcome += record.outcome;
                }
            }
        }
        MonthSummary {
            year,
            month,
            income,
            outcome,
            net: income - outcome,
        }
    }

    /// Per-category totals for the given month. Every catalog category is
    /// present with 0 even without activity; tags outside the catalog are
    /// accumulated under their own key.
    pub fn in_outcome_by_tag(&self, year: i32, month: u32) -> HashMap<String, Cents> {
        let mut totals: HashMap<String, Cents> = catalog::all_categories()
            .map(|category| (category.id.to_string(), 0))
            .collect();

        for wallet in &self.wallets {
            for record in wallet.records.values() {
                for bill in &record.bills {
                    if bill.date.year() == year && bill.date.month() == month {
                        *totals.entry(bill.tag.clone()).or_insert(0) += bill.amount;
                    }
                }
            }
        }
        totals
    }

    /// End-of-day balance samples across all wallets in time order.
    pub fn balance_history(&self) -> Vec<BalancePoint> {
        let mut points: Vec<BalancePoint> = self
            .wallets
            .iter()
            .flat_map(|wallet| {
                wallet.records.values().map(|record| BalancePoint {
                    date: record.date_filter,
                    balance: record.balance,
                })
            })
            .collect();
        points.sort_by_key(|point| point.date);
        points
    }

    // ========================
    // Budget plans
    // ========================

    pub fn income_plan(&self) -> &[TagPlan] {
        &self.income_plan
    }

    pub fn outcome_plan(&self) -> &[TagPlan] {
        &self.outcome_plan
    }

    /// Persist a changed plan and update the in-memory list of its kind.
    pub async fn change_plan(&mut self, plan: TagPlan) -> Result<(), LedgerError> {
        let value = serde_json::to_value(&plan).context("Failed to encode plan")?;
        self.store.set(&keys::plan(plan.kind, &plan.id), value).await?;

        let list = match plan.kind {
            BillKind::Income => &mut self.income_plan,
            BillKind::Outcome => &mut self.outcome_plan,
        };
        match list.iter_mut().find(|existing| existing.id == plan.id) {
            Some(existing) => *existing = plan,
            None => list.push(plan),
        }
        Ok(())
    }

    // ========================
    // Stock holdings
    // ========================

    pub fn stock_list(&self) -> &[Stock] {
        &self.stock_list
    }

    /// Add a holding, or overwrite the fields of an existing entry with the
    /// same code in place.
    pub async fn add_stock(&mut self, stock: Stock) -> Result<(), LedgerError> {
        debug!(code = %stock.code, "adding stock");
        match self
            .stock_list
            .iter_mut()
            .find(|existing| existing.code == stock.code)
        {
            Some(existing) => *existing = stock,
            None => self.stock_list.push(stock),
        }
        self.save_stock().await
    }

    /// Remove the first holding with the given code, returning it when
    /// present. The list is persisted either way.
    pub async fn sell_stock(&mut self, code: &str) -> Result<Option<Stock>, LedgerError> {
        let removed = self
            .stock_list
            .iter()
            .position(|stock| stock.code == code)
            .map(|index| self.stock_list.remove(index));
        if removed.is_none() {
            warn!(code, "sell_stock: no holding with this code");
        }
        self.save_stock().await?;
        Ok(removed)
    }

    // ========================
    // Persistence
    // ========================

    fn wallet_index(&self, name: &str) -> Result<usize, LedgerError> {
        self.wallets
            .iter()
            .position(|wallet| wallet.name == name)
            .ok_or_else(|| LedgerError::WalletNotFound(name.to_string()))
    }

    async fn save_wallets(&mut self) -> Result<(), LedgerError> {
        let value = serde_json::to_value(&self.wallets).context("Failed to encode wallets")?;
        self.store.set(keys::WALLETS, value).await?;
        self.wallet_tx.send_replace(self.wallets.clone());
        Ok(())
    }

    async fn save_stock(&mut self) -> Result<(), LedgerError> {
        let value = serde_json::to_value(&self.stock_list).context("Failed to encode stock")?;
        self.store.set(keys::STOCK, value).await?;
        self.stock_tx.send_replace(StockEvent::Changed);
        Ok(())
    }
}
