use super::*;
use bank_types::{Decimal, TransactionType};

fn tx(kind: TransactionType, from: &str, to: Option<&str>) -> Transaction {
    Transaction {
        id: "t1".to_owned(),
        account_id: from.to_owned(),
        to_account_id: to.map(ToOwned::to_owned),
        kind,
        amount: Decimal::new(125_000, 2),
        currency: "USD".to_owned(),
        description: Some("salary".to_owned()),
        status: "COMPLETED".to_owned(),
        created_at: "2024-01-02T15:04:05".parse().expect("timestamp"),
    }
}

#[test]
fn deposit_row_is_positive() {
    let row = TransactionRow::new(&tx(TransactionType::Deposit, "a1", None), "a1");
    assert_eq!(row.date, "1/2/2024, 3:04:05 PM");
    assert_eq!(row.kind, "DEPOSIT");
    assert_eq!(row.kind_class, "type-deposit");
    assert_eq!(row.amount, "+$1,250.00");
    assert_eq!(row.amount_class, "positive");
    assert_eq!(row.description, "salary");
    assert_eq!(row.status, "COMPLETED");
}

#[test]
fn outgoing_transfer_row_is_negative() {
    let row = TransactionRow::new(&tx(TransactionType::Transfer, "a1", Some("a2")), "a1");
    assert_eq!(row.amount, "-$1,250.00");
    assert_eq!(row.amount_class, "negative");
    assert_eq!(row.kind_class, "type-transfer");
}

#[test]
fn incoming_transfer_row_is_positive() {
    let row = TransactionRow::new(&tx(TransactionType::Transfer, "a1", Some("a2")), "a2");
    assert_eq!(row.amount_class, "positive");
}

#[test]
fn missing_description_renders_dash() {
    let mut withdraw = tx(TransactionType::Withdraw, "a1", None);
    withdraw.description = None;
    let row = TransactionRow::new(&withdraw, "a1");
    assert_eq!(row.description, "-");
    assert_eq!(row.amount_class, "negative");
}
