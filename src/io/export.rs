use std::io::Write;

use anyhow::Result;

use crate::application::LedgerService;
use crate::domain::format_cents;
use crate::storage::Store;

/// Exporter for converting ledger data to CSV.
pub struct Exporter<'a, S: Store> {
    service: &'a LedgerService<S>,
}

impl<'a, S: Store> Exporter<'a, S> {
    pub fn new(service: &'a LedgerService<S>) -> Self {
        Self { service }
    }

    /// Export every recorded bill across all wallets, one row per bill in
    /// wallet order then day order. Returns the number of rows written.
    pub fn export_bills_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id", "wallet", "date", "kind", "tag", "amount", "to_wallet", "note",
        ])?;

        let mut count = 0;
        for wallet in self.service.wallets() {
            for record in wallet.records.values() {
                for bill in &record.bills {
                    csv_writer.write_record([
                        bill.id.to_string(),
                        bill.wallet.clone(),
                        bill.date.to_rfc3339(),
                        bill.kind.to_string(),
                        bill.tag.clone(),
                        format_cents(bill.amount),
                        bill.to_wallet.clone().unwrap_or_default(),
                        bill.note.clone().unwrap_or_default(),
                    ])?;
                    count += 1;
                }
            }
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export one row per wallet: name, kind, balance, loan.
    pub fn export_balances_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["wallet", "kind", "balance", "loan"])?;

        let mut count = 0;
        for wallet in self.service.wallets() {
            csv_writer.write_record([
                wallet.name.clone(),
                wallet.kind.to_string(),
                format_cents(wallet.current_balance),
                format_cents(wallet.loan),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }
}
