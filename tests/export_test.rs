mod common;

use anyhow::Result;
use billfold::domain::{Bill, BillKind};
use billfold::io::Exporter;
use common::{StandardWallets, parse_date, test_service};

#[tokio::test]
async fn test_export_bills_csv() -> Result<()> {
    let mut service = test_service().await?;
    StandardWallets::create_basic(&mut service).await?;

    service
        .record_bill(Bill::new(
            "Cash",
            10_000,
            BillKind::Outcome,
            "food",
            parse_date("2024-03-07"),
        ))
        .await?;
    service
        .record_bill(
            Bill::new(
                "Checking",
                70_000,
                BillKind::Income,
                "salary",
                parse_date("2024-03-01"),
            )
            .with_note("march payroll"),
        )
        .await?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_bills_csv(&mut buffer)?;
    assert_eq!(count, 2);

    let output = String::from_utf8(buffer)?;
    let mut lines = output.lines();
    assert_eq!(
        lines.next(),
        Some("id,wallet,date,kind,tag,amount,to_wallet,note")
    );
    assert_eq!(output.lines().count(), 3);
    assert!(output.contains("Cash"));
    assert!(output.contains("march payroll"));
    assert!(output.contains("100.00")); // 10_000 cents
    Ok(())
}

#[tokio::test]
async fn test_export_balances_csv() -> Result<()> {
    let mut service = test_service().await?;
    StandardWallets::create_basic(&mut service).await?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_balances_csv(&mut buffer)?;
    assert_eq!(count, 3);

    let output = String::from_utf8(buffer)?;
    assert!(output.starts_with("wallet,kind,balance,loan"));
    assert!(output.contains("Visa,credit,0.00,2000.00"));
    Ok(())
}
