//! Human-readable output for CLI replies.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use bank_types::format::{account_label, format_currency, format_timestamp, signed_amount};
use bank_types::{Account, AuthResponse, DEFAULT_CURRENCY, Decimal, MessageResponse, Page, Transaction};

pub fn auth(resp: &AuthResponse) -> String {
    format!(
        "signed in as {} <{}> (user id {})\nexport BANK_TOKEN={}",
        resp.username, resp.email, resp.id, resp.token
    )
}

pub fn message(resp: &MessageResponse) -> String {
    resp.message.clone()
}

pub fn accounts(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "no accounts".to_owned();
    }
    accounts.iter().map(account_line).collect::<Vec<_>>().join("\n")
}

fn account_line(account: &Account) -> String {
    let status = if account.active { "" } else { " (inactive)" };
    format!(
        "{:<36}  {:<22}  {:>16}{status}",
        account.id,
        account_label(account),
        format_currency(account.balance, &account.currency)
    )
}

pub fn account(account: &Account) -> String {
    format!(
        "id:       {}\nnumber:   {}\ntype:     {}\nbalance:  {}\nactive:   {}\nopened:   {}",
        account.id,
        account.account_number,
        account.account_type.label(),
        format_currency(account.balance, &account.currency),
        account.active,
        format_timestamp(account.created_at),
    )
}

/// The balance endpoint carries no currency, so the default one is shown.
pub fn balance(account_id: &str, amount: Decimal) -> String {
    format!("{account_id}: {}", format_currency(amount, DEFAULT_CURRENCY))
}

pub fn transaction(tx: &Transaction) -> String {
    format!(
        "{} {} {} [{}] id {}",
        tx.kind,
        format_currency(tx.amount, &tx.currency),
        tx.description_or_dash(),
        tx.status,
        tx.id
    )
}

pub fn history(account_id: &str, page: &Page<Transaction>) -> String {
    let mut lines: Vec<String> = page
        .content
        .iter()
        .map(|tx| {
            format!(
                "{:<24}  {:<8}  {:>14}  {:<10}  {}",
                format_timestamp(tx.created_at),
                tx.kind,
                signed_amount(tx, account_id),
                tx.status,
                tx.description_or_dash()
            )
        })
        .collect();
    if lines.is_empty() {
        lines.push("no transactions".to_owned());
    }
    lines.push(format!(
        "page {} of {} ({} transactions)",
        page.number + 1,
        page.total_pages.max(1),
        page.total_elements
    ));
    lines.join("\n")
}
