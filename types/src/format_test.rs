use super::*;
use crate::{AccountType, TransactionType};
use chrono::NaiveDate;

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid timestamp")
}

fn tx(kind: TransactionType, account_id: &str, to: Option<&str>, amount: Decimal) -> Transaction {
    Transaction {
        id: "t1".to_owned(),
        account_id: account_id.to_owned(),
        to_account_id: to.map(ToOwned::to_owned),
        kind,
        amount,
        currency: "USD".to_owned(),
        description: None,
        status: "COMPLETED".to_owned(),
        created_at: at(9, 0, 0),
    }
}

#[test]
fn format_currency_groups_thousands_and_pads_cents() {
    assert_eq!(format_currency(Decimal::new(123_450, 2), "USD"), "$1,234.50");
    assert_eq!(format_currency(Decimal::new(5, 0), "USD"), "$5.00");
    assert_eq!(format_currency(Decimal::new(1_000_000, 0), "usd"), "$1,000,000.00");
    assert_eq!(format_currency(Decimal::ZERO, "USD"), "$0.00");
}

#[test]
fn format_currency_rounds_half_away_from_zero() {
    assert_eq!(format_currency(Decimal::new(10_005, 3), "USD"), "$10.01");
    assert_eq!(format_currency(Decimal::new(-10_005, 3), "USD"), "-$10.01");
}

#[test]
fn format_currency_places_sign_before_symbol() {
    assert_eq!(format_currency(Decimal::new(-500, 2), "EUR"), "-€5.00");
}

#[test]
fn format_currency_prefixes_unknown_codes() {
    assert_eq!(format_currency(Decimal::new(1999, 2), "CHF"), "CHF 19.99");
}

#[test]
fn mask_account_number_keeps_last_four() {
    assert_eq!(mask_account_number("1234567890"), "****7890");
    assert_eq!(mask_account_number("42"), "****42");
    assert_eq!(mask_account_number(""), "****");
}

#[test]
fn format_timestamp_uses_twelve_hour_clock() {
    assert_eq!(format_timestamp(at(15, 4, 5)), "1/2/2024, 3:04:05 PM");
    assert_eq!(format_timestamp(at(0, 30, 0)), "1/2/2024, 12:30:00 AM");
}

#[test]
fn signed_amount_marks_deposits_positive_and_withdrawals_negative() {
    let deposit = tx(TransactionType::Deposit, "a1", None, Decimal::new(2500, 2));
    let withdraw = tx(TransactionType::Withdraw, "a1", None, Decimal::new(1000, 2));
    assert_eq!(signed_amount(&deposit, "a1"), "+$25.00");
    assert_eq!(signed_amount(&withdraw, "a1"), "-$10.00");
}

#[test]
fn signed_amount_depends_on_transfer_side() {
    let transfer = tx(TransactionType::Transfer, "a1", Some("a2"), Decimal::new(700, 2));
    assert_eq!(signed_amount(&transfer, "a1"), "-$7.00");
    assert_eq!(signed_amount(&transfer, "a2"), "+$7.00");
}

#[test]
fn account_label_combines_type_and_mask() {
    let account = Account {
        id: "a1".to_owned(),
        user_id: "u1".to_owned(),
        account_number: "ACC00004821".to_owned(),
        account_type: AccountType::Checking,
        balance: Decimal::ZERO,
        currency: "USD".to_owned(),
        active: true,
        created_at: at(9, 0, 0),
    };
    assert_eq!(account_label(&account), "CHECKING - ****4821");
}
