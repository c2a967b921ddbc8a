//! Deposit, withdraw, and transfer form.

use bank_types::format::account_label;
use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::state::forms::MoneyAction;

/// Form for `action`, bound to the shared money-form input.
#[component]
pub fn MoneyForm(action: MoneyAction, dashboard: RwSignal<DashboardState>, on_submit: Callback<()>) -> impl IntoView {
    let targets = Memo::new(move |_| {
        dashboard.with(|d| {
            d.transfer_targets()
                .into_iter()
                .map(|a| (a.id.clone(), account_label(a)))
                .collect::<Vec<_>>()
        })
    });

    let destination = (action == MoneyAction::Transfer).then(|| {
        view! {
            <select
                required
                prop:value=move || dashboard.with(|d| d.input.to_account_id.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    dashboard.update(|d| d.input.to_account_id = value);
                }
            >
                <option value="">"Select destination account"</option>
                {move || {
                    targets
                        .get()
                        .into_iter()
                        .map(|(id, label)| view! { <option value=id>{label}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
        }
    });

    view! {
        <form
            class="transaction-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h3>{action.title()}</h3>
            {destination}
            <input
                type="number"
                placeholder="Amount"
                step="0.01"
                min="0.01"
                required
                prop:value=move || dashboard.with(|d| d.input.amount.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    dashboard.update(|d| d.input.amount = value);
                }
            />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || dashboard.with(|d| d.input.description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    dashboard.update(|d| d.input.description = value);
                }
            />
            <button
                type="submit"
                class=action.button_class()
                disabled=move || dashboard.with(|d| d.money_pending)
            >
                {action.label()}
            </button>
        </form>
    }
}
