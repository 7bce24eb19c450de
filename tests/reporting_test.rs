mod common;

use anyhow::Result;
use billfold::domain::{Bill, BillKind, Wallet, WalletKind, catalog};
use common::{StandardWallets, day, parse_date, test_service};

#[tokio::test]
async fn test_current_balance_excludes_credit_wallets() -> Result<()> {
    let mut service = test_service().await?;
    service
        .add_wallet(Wallet::new("Cash", WalletKind::Cash).with_balance(100_000))
        .await?;
    service
        .add_wallet(Wallet::new("Checking", WalletKind::Bank).with_balance(500_000))
        .await?;
    service
        .add_wallet(
            Wallet::new("Visa", WalletKind::Credit)
                .with_balance(500)
                .with_loan(200_000),
        )
        .await?;

    assert_eq!(service.current_balance(), 600_000);
    assert_eq!(service.current_loan(), 200_000);

    let net_worth = service.net_worth();
    assert_eq!(net_worth.balance, 600_000);
    assert_eq!(net_worth.loan, 200_000);
    assert_eq!(net_worth.net, 400_000);
    Ok(())
}

#[tokio::test]
async fn test_bills_by_day_spans_wallets() -> Result<()> {
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
        .record_bill(Bill::new(
            "Checking",
            25_000,
            BillKind::Outcome,
            "shopping",
            parse_date("2024-03-07"),
        ))
        .await?;
    service
        .record_bill(Bill::new(
            "Cash",
            5_000,
            BillKind::Outcome,
            "food",
            parse_date("2024-03-08"),
        ))
        .await?;

    assert_eq!(service.bills_by_day(day("2024-03-07")).len(), 2);
    assert_eq!(service.bills_by_day(day("2024-03-08")).len(), 1);
    assert!(service.bills_by_day(day("2024-03-09")).is_empty());
    Ok(())
}

#[tokio::test]
async fn test_bills_by_month_merges_and_orders() -> Result<()> {
    let mut service = test_service().await?;
    StandardWallets::create_basic(&mut service).await?;

    // two wallets on the same day, plus an earlier and a later day
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
        .record_bill(Bill::new(
            "Checking",
            25_000,
            BillKind::Outcome,
            "shopping",
            parse_date("2024-03-07"),
        ))
        .await?;
    service
        .record_bill(Bill::new(
            "Cash",
            7_000,
            BillKind::Income,
            "salary",
            parse_date("2024-03-01"),
        ))
        .await?;
    service
        .record_bill(Bill::new(
            "Checking",
            3_000,
            BillKind::Outcome,
            "transport",
            parse_date("2024-03-20"),
        ))
        .await?;
    // outside the month
    service
        .record_bill(Bill::new(
            "Cash",
            99_000,
            BillKind::Outcome,
            "food",
            parse_date("2024-04-02"),
        ))
        .await?;
    // same month, different year
    service
        .record_bill(Bill::new(
            "Cash",
            42_000,
            BillKind::Outcome,
            "food",
            parse_date("2025-03-07"),
        ))
        .await?;

    let groups = service.bills_by_month(2024, 3);
    assert_eq!(groups.len(), 3);

    // latest day first, genuinely date-descending
    assert_eq!(groups[0].day, day("2024-03-20"));
    assert_eq!(groups[1].day, day("2024-03-07"));
    assert_eq!(groups[2].day, day("2024-03-01"));

    // same-day bills from both wallets merged into one group
    assert_eq!(groups[1].bills.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_in_outcome_by_tag_sums_exactly() -> Result<()> {
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
        .record_bill(Bill::new(
            "Checking",
            4_000,
            BillKind::Outcome,
            "food",
            parse_date("2024-03-12"),
        ))
        .await?;
    service
        .record_bill(Bill::new(
            "Cash",
            70_000,
            BillKind::Income,
            "salary",
            parse_date("2024-03-01"),
        ))
        .await?;
    // different month, must not count
    service
        .record_bill(Bill::new(
            "Cash",
            5_000,
            BillKind::Outcome,
            "food",
            parse_date("2024-02-28"),
        ))
        .await?;

    let totals = service.in_outcome_by_tag(2024, 3);
    assert_eq!(totals["food"], 14_000);
    assert_eq!(totals["salary"], 70_000);

    // every catalog category is present, zero without activity
    for category in catalog::all_categories() {
        assert!(totals.contains_key(category.id));
    }
    assert_eq!(totals["transport"], 0);
    Ok(())
}

#[tokio::test]
async fn test_month_summary_totals() -> Result<()> {
    let mut service = test_service().await?;
    StandardWallets::create_basic(&mut service).await?;

    service
        .record_bill(Bill::new(
            "Cash",
            70_000,
            BillKind::Income,
            "salary",
            parse_date("2024-03-01"),
        ))
        .await?;
    service
        .record_bill(Bill::new(
            "Checking",
            12_000,
            BillKind::Outcome,
            "shopping",
            parse_date("2024-03-15"),
        ))
        .await?;
    service
        .record_bill(Bill::new(
            "Cash",
            8_000,
            BillKind::Outcome,
            "food",
            parse_date("2024-04-01"),
        ))
        .await?;

    let summary = service.month_summary(2024, 3);
    assert_eq!(summary.income, 70_000);
    assert_eq!(summary.outcome, 12_000);
    assert_eq!(summary.net, 58_000);
    Ok(())
}

#[tokio::test]
async fn test_balance_history_is_time_ordered() -> Result<()> {
    let mut service = test_service().await?;
    StandardWallets::create_basic(&mut service).await?;

    // recorded out of order across two wallets
    service
        .record_bill(Bill::new(
            "Checking",
            12_000,
            BillKind::Outcome,
            "shopping",
            parse_date("2024-03-15"),
        ))
        .await?;
    service
        .record_bill(Bill::new(
            "Cash",
            70_000,
            BillKind::Income,
            "salary",
            parse_date("2024-03-01"),
        ))
        .await?;
    service
        .record_bill(Bill::new(
            "Cash",
            8_000,
            BillKind::Outcome,
            "food",
            parse_date("2024-03-20"),
        ))
        .await?;

    let points = service.balance_history();
    assert_eq!(points.len(), 3);
    assert!(points.windows(2).all(|pair| pair[0].date <= pair[1].date));
    Ok(())
}
