//! Clickable summary card for one account.

use bank_types::Account;
use bank_types::format::{format_currency, mask_account_number};
use leptos::prelude::*;

/// Card showing type, masked number, and balance. Clicking selects it.
#[component]
pub fn AccountCard(account: Account, selected: bool, on_select: Callback<String>) -> impl IntoView {
    let id = account.id.clone();
    let balance = format_currency(account.balance, &account.currency);
    let masked = mask_account_number(&account.account_number);
    let inactive = !account.active;

    view! {
        <div
            class="account-card"
            class:selected=selected
            class:account-card--inactive=inactive
            on:click=move |_| on_select.run(id.clone())
        >
            <div class="account-type">{account.account_type.as_str()}</div>
            <div class="account-number">{masked}</div>
            <div class="account-balance">{balance}</div>
            {inactive.then(|| view! { <div class="account-status">"Inactive"</div> })}
        </div>
    }
}
