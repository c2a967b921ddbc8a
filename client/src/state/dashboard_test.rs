use super::*;
use bank_types::{Decimal, NaiveDateTime, TransactionType};

fn timestamp() -> NaiveDateTime {
    "2024-03-01T09:00:00".parse().expect("timestamp")
}

fn account(id: &str) -> Account {
    Account {
        id: id.to_owned(),
        user_id: "u1".to_owned(),
        account_number: format!("ACC000{id}"),
        account_type: AccountType::Savings,
        balance: Decimal::new(10_000, 2),
        currency: "USD".to_owned(),
        active: true,
        created_at: timestamp(),
    }
}

fn history(account_id: &str, ids: &[&str]) -> Page<Transaction> {
    Page {
        content: ids
            .iter()
            .map(|id| Transaction {
                id: (*id).to_owned(),
                account_id: account_id.to_owned(),
                to_account_id: None,
                kind: TransactionType::Deposit,
                amount: Decimal::new(5, 0),
                currency: "USD".to_owned(),
                description: None,
                status: "COMPLETED".to_owned(),
                created_at: timestamp(),
            })
            .collect(),
        total_elements: ids.len() as u64,
        total_pages: 1,
        number: 0,
        size: HISTORY_PAGE_SIZE,
        first: true,
        last: true,
    }
}

#[test]
fn default_state_is_loading_with_nothing_selected() {
    let state = DashboardState::default();
    assert!(state.loading);
    assert!(state.selected_account().is_none());
}

#[test]
fn first_accounts_load_selects_first_account() {
    let mut state = DashboardState::default();
    state.apply_accounts(vec![account("a1"), account("a2")]);
    assert!(!state.loading);
    assert_eq!(state.selected_id.as_deref(), Some("a1"));
}

#[test]
fn reload_keeps_existing_selection() {
    let mut state = DashboardState::default();
    state.apply_accounts(vec![account("a1"), account("a2")]);
    assert!(state.select("a2"));
    state.transactions = history("a2", &["t1"]).content;

    let mut refreshed = account("a2");
    refreshed.balance = Decimal::new(42, 0);
    state.apply_accounts(vec![account("a1"), refreshed]);

    assert_eq!(state.selected_id.as_deref(), Some("a2"));
    assert_eq!(state.selected_account().map(|a| a.balance), Some(Decimal::new(42, 0)));
    assert_eq!(state.transactions.len(), 1);
}

#[test]
fn reload_without_selected_account_falls_back_to_first() {
    let mut state = DashboardState::default();
    state.apply_accounts(vec![account("a1"), account("a2")]);
    state.select("a2");
    state.apply_accounts(vec![account("a3")]);
    assert_eq!(state.selected_id.as_deref(), Some("a3"));
    assert!(state.transactions.is_empty());
}

#[test]
fn empty_account_list_clears_selection() {
    let mut state = DashboardState::default();
    state.apply_accounts(Vec::new());
    assert_eq!(state.selected_id, None);
    assert!(!state.loading);
}

#[test]
fn failed_accounts_fetch_still_finishes_loading() {
    let mut state = DashboardState::default();
    state.accounts_failed();
    assert!(!state.loading);
}

#[test]
fn select_rejects_unknown_account() {
    let mut state = DashboardState::default();
    state.apply_accounts(vec![account("a1")]);
    assert!(!state.select("zz"));
    assert_eq!(state.selected_id.as_deref(), Some("a1"));
}

#[test]
fn transfer_targets_exclude_selected_account() {
    let mut state = DashboardState::default();
    state.apply_accounts(vec![account("a1"), account("a2"), account("a3")]);
    let ids: Vec<&str> = state.transfer_targets().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a2", "a3"]);
}

#[test]
fn history_for_selected_account_replaces_list() {
    let mut state = DashboardState::default();
    state.apply_accounts(vec![account("a1")]);
    assert!(state.apply_history("a1", history("a1", &["t1", "t2"])));
    assert!(state.apply_history("a1", history("a1", &["t3"])));
    let ids: Vec<&str> = state.transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t3"]);
}

#[test]
fn stale_history_is_ignored() {
    let mut state = DashboardState::default();
    state.apply_accounts(vec![account("a1"), account("a2")]);
    state.select("a2");
    assert!(!state.apply_history("a1", history("a1", &["t1"])));
    assert!(state.transactions.is_empty());
}

#[test]
fn toggle_form_opens_one_form_at_a_time() {
    let mut state = DashboardState::default();
    state.toggle_form(MoneyAction::Deposit);
    assert_eq!(state.open_form, Some(MoneyAction::Deposit));
    state.toggle_form(MoneyAction::Transfer);
    assert_eq!(state.open_form, Some(MoneyAction::Transfer));
    state.toggle_form(MoneyAction::Transfer);
    assert_eq!(state.open_form, None);
}

#[test]
fn begin_money_reports_validation_error() {
    let mut state = DashboardState::default();
    state.apply_accounts(vec![account("a1")]);
    state.toggle_form(MoneyAction::Deposit);
    state.input.amount = "0".to_owned();
    assert!(state.begin_money().is_none());
    assert_eq!(state.error.as_deref(), Some(crate::state::forms::INVALID_AMOUNT));
    assert!(!state.money_pending);
}

#[test]
fn begin_money_allows_one_request_in_flight() {
    let mut state = DashboardState::default();
    state.apply_accounts(vec![account("a1")]);
    state.toggle_form(MoneyAction::Withdraw);
    state.input.amount = "12.5".to_owned();

    let request = state.begin_money().expect("request");
    assert_eq!(request.action(), MoneyAction::Withdraw);
    assert!(state.money_pending);
    assert!(state.begin_money().is_none());
}

#[test]
fn begin_money_needs_open_form_and_selection() {
    let mut state = DashboardState::default();
    state.input.amount = "1".to_owned();
    assert!(state.begin_money().is_none());
    state.toggle_form(MoneyAction::Deposit);
    assert!(state.begin_money().is_none());
}

#[test]
fn money_success_resets_form_and_sets_notice() {
    let mut state = DashboardState::default();
    state.apply_accounts(vec![account("a1"), account("a2")]);
    state.toggle_form(MoneyAction::Transfer);
    state.input.amount = "5".to_owned();
    state.input.to_account_id = "a2".to_owned();
    state.input.description = "rent".to_owned();
    let _ = state.begin_money().expect("request");

    let _ = state.money_succeeded(MoneyAction::Transfer);

    assert!(!state.money_pending);
    assert_eq!(state.open_form, None);
    assert_eq!(state.input, MoneyFormInput::default());
    assert_eq!(state.notice.as_deref(), Some("Transfer successful!"));
}

#[test]
fn money_failure_keeps_form_and_shows_message() {
    let mut state = DashboardState::default();
    state.apply_accounts(vec![account("a1")]);
    state.toggle_form(MoneyAction::Withdraw);
    state.input.amount = "500".to_owned();
    let _ = state.begin_money().expect("request");

    state.money_failed("Insufficient balance".to_owned());

    assert!(!state.money_pending);
    assert_eq!(state.open_form, Some(MoneyAction::Withdraw));
    assert_eq!(state.input.amount, "500");
    assert_eq!(state.error.as_deref(), Some("Insufficient balance"));
}

#[test]
fn create_account_flow_tracks_pending_and_outcome() {
    let mut state = DashboardState::default();
    state.toggle_create_account();
    state.new_account_type = AccountType::Checking;

    assert_eq!(state.begin_create(), Some(AccountType::Checking));
    assert_eq!(state.begin_create(), None);

    state.create_failed();
    assert_eq!(state.create_error.as_deref(), Some(ACCOUNT_CREATE_FAILED));
    assert!(state.show_create_account);

    assert!(state.begin_create().is_some());
    let _ = state.create_succeeded();
    assert!(!state.show_create_account);
    assert_eq!(state.notice.as_deref(), Some(ACCOUNT_CREATED));
}

#[test]
fn expire_notice_clears_current_notice() {
    let mut state = DashboardState::default();
    let seq = state.money_succeeded(MoneyAction::Deposit);
    state.expire_notice(seq);
    assert!(state.notice.is_none());
}

#[test]
fn older_timer_leaves_repeated_notice_alone() {
    let mut state = DashboardState::default();
    let first = state.money_succeeded(MoneyAction::Deposit);
    let second = state.money_succeeded(MoneyAction::Deposit);
    assert_ne!(first, second);

    state.expire_notice(first);
    assert_eq!(state.notice.as_deref(), Some("Deposit successful!"));

    state.expire_notice(second);
    assert!(state.notice.is_none());
}
