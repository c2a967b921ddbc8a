//! Dashboard page: accounts, money forms, and transaction history.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the user's accounts,
//! follows the selected account with a history fetch, and after every
//! successful mutation re-fetches both instead of patching local state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::time::Duration;

use bank_types::HistoryQuery;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::account_card::AccountCard;
use crate::components::create_account_form::CreateAccountForm;
use crate::components::money_form::MoneyForm;
use crate::components::notice_banner::NoticeBanner;
use crate::components::transaction_table::TransactionTable;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardState, HISTORY_PAGE_SIZE};
use crate::state::forms::{MoneyAction, MoneyRequest};
use crate::util::auth::install_unauth_redirect;
use crate::util::{session, task};

const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    install_unauth_redirect(auth, use_navigate());

    let user_id = Memo::new(move |_| auth.with(|a| a.user.as_ref().map(|u| u.id.clone())));
    Effect::new(move || {
        if let Some(id) = user_id.get() {
            refresh_accounts(dashboard, id);
        }
    });

    let selected = Memo::new(move |_| dashboard.with(|d| d.selected_id.clone()));
    Effect::new(move || {
        if let Some(account_id) = selected.get() {
            refresh_history(dashboard, account_id);
        }
    });

    let accounts = Memo::new(move |_| dashboard.with(|d| d.accounts.clone()));
    let open_form = Memo::new(move |_| dashboard.with(|d| d.open_form));
    let has_selection = Memo::new(move |_| dashboard.with(|d| d.selected_account().is_some()));

    let on_select = Callback::new(move |id: String| {
        dashboard.update(|d| {
            d.select(&id);
        });
    });
    let on_create = Callback::new(move |()| submit_create(user_id, dashboard));
    let on_money = Callback::new(move |()| submit_money(user_id, dashboard));

    let on_logout = move |_| {
        session::clear();
        dashboard.set(DashboardState::default());
        auth.set(AuthState::signed_out());
    };

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.user.is_some())
            fallback=move || {
                view! {
                    <div class="loading">
                        {move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to login..." }}
                    </div>
                }
            }
        >
            <Show
                when=move || !dashboard.with(|d| d.loading)
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <div class="dashboard">
                    <header class="dashboard-header">
                        <h1>"Bank Dashboard"</h1>
                        <div class="user-info">
                            <span>
                                "Welcome, "
                                {move || auth.with(|a| a.username().unwrap_or_default().to_owned())}
                                "!"
                            </span>
                            <button class="btn btn-secondary" on:click=on_logout>
                                "Logout"
                            </button>
                        </div>
                    </header>

                    <NoticeBanner dashboard=dashboard/>

                    <div class="dashboard-content">
                        <div class="accounts-section">
                            <div class="section-header">
                                <h2>"My Accounts"</h2>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| dashboard.update(DashboardState::toggle_create_account)
                                >
                                    "+ New Account"
                                </button>
                            </div>

                            <Show when=move || dashboard.with(|d| d.show_create_account)>
                                <CreateAccountForm dashboard=dashboard on_submit=on_create/>
                            </Show>

                            <div class="accounts-list">
                                {move || {
                                    let current = selected.get();
                                    accounts
                                        .get()
                                        .into_iter()
                                        .map(|account| {
                                            let is_selected = current.as_deref() == Some(account.id.as_str());
                                            view! {
                                                <AccountCard
                                                    account=account
                                                    selected=is_selected
                                                    on_select=on_select
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                            <Show when=move || accounts.with(Vec::is_empty)>
                                <p class="empty">"No accounts yet. Open one to get started."</p>
                            </Show>
                        </div>

                        <Show when=move || has_selection.get()>
                            <div class="transactions-section">
                                <div class="section-header">
                                    <h2>"Transactions"</h2>
                                    <div class="transaction-actions">
                                        {MoneyAction::ALL
                                            .into_iter()
                                            .map(|action| {
                                                view! {
                                                    <button
                                                        class=action.button_class()
                                                        on:click=move |_| dashboard.update(|d| d.toggle_form(action))
                                                    >
                                                        {action.label()}
                                                    </button>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>

                                <Show when=move || dashboard.with(|d| d.error.is_some())>
                                    <div class="error-message">
                                        {move || dashboard.with(|d| d.error.clone().unwrap_or_default())}
                                    </div>
                                </Show>

                                {move || {
                                    open_form
                                        .get()
                                        .map(|action| {
                                            view! { <MoneyForm action=action dashboard=dashboard on_submit=on_money/> }
                                        })
                                }}

                                <TransactionTable dashboard=dashboard/>
                            </div>
                        </Show>
                    </div>
                </div>
            </Show>
        </Show>
    }
}

/// Replace the account list with a fresh fetch.
fn refresh_accounts(dashboard: RwSignal<DashboardState>, user_id: String) {
    task::spawn(async move {
        match api::fetch_accounts_by_user(&user_id).await {
            Ok(accounts) => dashboard.update(|d| d.apply_accounts(accounts)),
            Err(e) => {
                log::error!("failed to load accounts: {e}");
                dashboard.update(DashboardState::accounts_failed);
            }
        }
    });
}

/// Replace the history table with the newest page for `account_id`.
fn refresh_history(dashboard: RwSignal<DashboardState>, account_id: String) {
    task::spawn(async move {
        let query = HistoryQuery::first_page(HISTORY_PAGE_SIZE);
        match api::fetch_transaction_history(&account_id, &query).await {
            Ok(page) => {
                let applied = dashboard.try_update(|d| d.apply_history(&account_id, page)).unwrap_or(false);
                if !applied {
                    log::debug!("dropped history for deselected account {account_id}");
                }
            }
            Err(e) => log::error!("failed to load transactions for {account_id}: {e}"),
        }
    });
}

/// Fetches that follow a mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshPlan {
    pub accounts_for: String,
    pub history_for: Option<String>,
}

/// A new account only changes the account list.
pub fn plan_after_create<T, E>(outcome: &Result<T, E>, user_id: &str) -> Option<RefreshPlan> {
    outcome.as_ref().ok().map(|_| RefreshPlan {
        accounts_for: user_id.to_owned(),
        history_for: None,
    })
}

/// A money movement changes balances and the source account's history.
/// A transfer refreshes the history of the account it was sent from.
pub fn plan_after_money<T, E>(outcome: &Result<T, E>, user_id: &str, request: &MoneyRequest) -> Option<RefreshPlan> {
    outcome.as_ref().ok().map(|_| RefreshPlan {
        accounts_for: user_id.to_owned(),
        history_for: Some(request.source_account_id().to_owned()),
    })
}

fn run_refresh(dashboard: RwSignal<DashboardState>, plan: RefreshPlan) {
    refresh_accounts(dashboard, plan.accounts_for);
    if let Some(account_id) = plan.history_for {
        refresh_history(dashboard, account_id);
    }
}

fn submit_create(user_id: Memo<Option<String>>, dashboard: RwSignal<DashboardState>) {
    let Some(user_id) = user_id.get_untracked() else {
        return;
    };
    let Some(account_type) = dashboard.try_update(DashboardState::begin_create).flatten() else {
        return;
    };

    task::spawn(async move {
        let result = api::create_account(&user_id, account_type).await;
        let plan = plan_after_create(&result, &user_id);
        match result {
            Ok(account) => {
                log::info!("opened {} account {}", account.account_type, account.id);
                if let Some(seq) = dashboard.try_update(DashboardState::create_succeeded) {
                    expire_notice(dashboard, seq);
                }
            }
            Err(e) => {
                log::warn!("account creation failed: {e}");
                dashboard.update(DashboardState::create_failed);
            }
        }
        if let Some(plan) = plan {
            run_refresh(dashboard, plan);
        }
    });
}

fn submit_money(user_id: Memo<Option<String>>, dashboard: RwSignal<DashboardState>) {
    let Some(user_id) = user_id.get_untracked() else {
        return;
    };
    let Some(request) = dashboard.try_update(DashboardState::begin_money).flatten() else {
        return;
    };
    let action = request.action();

    task::spawn(async move {
        let result = match &request {
            MoneyRequest::Deposit(body) => api::deposit(body).await,
            MoneyRequest::Withdraw(body) => api::withdraw(body).await,
            MoneyRequest::Transfer(body) => api::transfer(body).await,
        };
        let plan = plan_after_money(&result, &user_id, &request);
        match result {
            Ok(tx) => {
                log::info!("{} {} recorded as {}", action.label(), tx.id, tx.status);
                if let Some(seq) = dashboard.try_update(|d| d.money_succeeded(action)) {
                    expire_notice(dashboard, seq);
                }
            }
            Err(e) => {
                log::warn!("{} failed: {e}", action.label());
                let message = e.user_message(action.failure_fallback());
                dashboard.update(|d| d.money_failed(message));
            }
        }
        if let Some(plan) = plan {
            run_refresh(dashboard, plan);
        }
    });
}

fn expire_notice(dashboard: RwSignal<DashboardState>, seq: u64) {
    task::after(NOTICE_TTL, move || dashboard.update(|d| d.expire_notice(seq)));
}
