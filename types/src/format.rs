//! Display formatting shared by the browser dashboard and the CLI.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{Account, Transaction};

/// Format an amount in en-US currency style, e.g. `$1,234.50` or `-$5.00`.
#[must_use]
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    let mut magnitude = rounded.abs();
    magnitude.rescale(2);
    let digits = magnitude.to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}{}{}.{fraction}", currency_symbol(currency), group_thousands(whole))
}

/// Symbol prefix for a currency code. Unknown codes render as `"CODE "`.
#[must_use]
pub fn currency_symbol(currency: &str) -> String {
    match currency.trim().to_ascii_uppercase().as_str() {
        "USD" => "$".to_owned(),
        "EUR" => "€".to_owned(),
        "GBP" => "£".to_owned(),
        "JPY" => "¥".to_owned(),
        other => format!("{other} "),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Mask an account number down to its last four characters.
#[must_use]
pub fn mask_account_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    let start = chars.len().saturating_sub(4);
    let tail: String = chars[start..].iter().collect();
    format!("****{tail}")
}

/// Render a backend timestamp the way an en-US browser locale would.
#[must_use]
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Signed, formatted amount of `tx` as seen from `account_id`.
#[must_use]
pub fn signed_amount(tx: &Transaction, account_id: &str) -> String {
    let direction = tx.direction(account_id);
    format!("{}{}", direction.sign(), format_currency(tx.amount, &tx.currency))
}

/// Label for an account in a picker, e.g. `CHECKING - ****4821`.
#[must_use]
pub fn account_label(account: &Account) -> String {
    format!("{} - {}", account.account_type, mask_account_number(&account.account_number))
}
