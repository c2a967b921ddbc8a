//! History table for the selected account.
//!
//! Amount signs are relative to the selected account, so an incoming transfer
//! renders as a credit.

#[cfg(test)]
#[path = "transaction_table_test.rs"]
mod transaction_table_test;

use bank_types::format::{format_timestamp, signed_amount};
use bank_types::{Direction, Transaction};
use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

/// Display strings for one table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub kind: &'static str,
    pub kind_class: String,
    pub amount: String,
    pub amount_class: &'static str,
    pub description: String,
    pub status: String,
}

impl TransactionRow {
    pub fn new(tx: &Transaction, account_id: &str) -> Self {
        let amount_class = match tx.direction(account_id) {
            Direction::Credit => "positive",
            Direction::Debit => "negative",
        };
        Self {
            id: tx.id.clone(),
            date: format_timestamp(tx.created_at),
            kind: tx.kind.as_str(),
            kind_class: format!("type-{}", tx.kind.as_str().to_ascii_lowercase()),
            amount: signed_amount(tx, account_id),
            amount_class,
            description: tx.description_or_dash().to_owned(),
            status: tx.status.clone(),
        }
    }
}

#[component]
pub fn TransactionTable(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let rows = Memo::new(move |_| {
        dashboard.with(|d| {
            let account_id = d.selected_id.as_deref().unwrap_or_default();
            d.transactions
                .iter()
                .map(|tx| TransactionRow::new(tx, account_id))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="transactions-list">
            <table>
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Type"</th>
                        <th>"Amount"</th>
                        <th>"Description"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || rows.with(Vec::is_empty)>
                        <tr>
                            <td colspan="5" class="empty">"No transactions yet."</td>
                        </tr>
                    </Show>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr data-id=row.id>
                                        <td>{row.date}</td>
                                        <td class=row.kind_class>{row.kind}</td>
                                        <td class=row.amount_class>{row.amount}</td>
                                        <td>{row.description}</td>
                                        <td>{row.status}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
