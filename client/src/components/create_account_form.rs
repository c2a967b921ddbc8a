//! Inline form for opening a new account.

use bank_types::AccountType;
use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

/// Account-type picker with a submit button.
#[component]
pub fn CreateAccountForm(dashboard: RwSignal<DashboardState>, on_submit: Callback<()>) -> impl IntoView {
    view! {
        <form
            class="create-account-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <select
                prop:value=move || dashboard.with(|d| d.new_account_type.as_str())
                on:change=move |ev| {
                    if let Ok(kind) = event_target_value(&ev).parse::<AccountType>() {
                        dashboard.update(|d| d.new_account_type = kind);
                    }
                }
            >
                {AccountType::ALL
                    .into_iter()
                    .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || dashboard.with(|d| d.create_pending)
            >
                "Create"
            </button>
            <Show when=move || dashboard.with(|d| d.create_error.is_some())>
                <p class="error-message">
                    {move || dashboard.with(|d| d.create_error.clone().unwrap_or_default())}
                </p>
            </Show>
        </form>
    }
}
