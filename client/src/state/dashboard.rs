//! Dashboard state: accounts, selection, history, and form status.
//!
//! DESIGN
//! ======
//! Accounts and history are replaced wholesale by each fetch; nothing is
//! patched locally. The only reconciliation is keeping the selected account
//! across reloads and dropping history responses for an account that is no
//! longer selected.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use bank_types::{Account, AccountType, Page, Transaction};

use super::forms::{MoneyAction, MoneyFormInput, MoneyRequest};

pub const ACCOUNT_CREATED: &str = "Account created successfully!";
pub const ACCOUNT_CREATE_FAILED: &str = "Failed to create account";

/// Rows requested for the history table.
pub const HISTORY_PAGE_SIZE: u32 = 20;

#[derive(Clone, Debug)]
pub struct DashboardState {
    pub accounts: Vec<Account>,
    pub selected_id: Option<String>,
    pub transactions: Vec<Transaction>,
    /// True until the first accounts fetch settles.
    pub loading: bool,

    pub show_create_account: bool,
    pub new_account_type: AccountType,
    pub create_pending: bool,
    pub create_error: Option<String>,

    pub open_form: Option<MoneyAction>,
    pub input: MoneyFormInput,
    pub money_pending: bool,
    pub error: Option<String>,

    /// Success banner text.
    pub notice: Option<String>,
    /// Bumped for every new notice so an older timer cannot clear a newer banner.
    pub notice_seq: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            selected_id: None,
            transactions: Vec::new(),
            loading: true,
            show_create_account: false,
            new_account_type: AccountType::default(),
            create_pending: false,
            create_error: None,
            open_form: None,
            input: MoneyFormInput::default(),
            money_pending: false,
            error: None,
            notice: None,
            notice_seq: 0,
        }
    }
}

impl DashboardState {
    /// Replace the account list, keeping the selection when it still exists
    /// and falling back to the first account otherwise.
    pub fn apply_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
        self.loading = false;

        let keep = self
            .selected_id
            .as_deref()
            .is_some_and(|id| self.accounts.iter().any(|a| a.id == id));
        if !keep {
            self.selected_id = self.accounts.first().map(|a| a.id.clone());
            self.transactions.clear();
        }
    }

    /// Mark the initial load finished after a failed accounts fetch.
    pub fn accounts_failed(&mut self) {
        self.loading = false;
    }

    pub fn selected_account(&self) -> Option<&Account> {
        let id = self.selected_id.as_deref()?;
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn is_selected(&self, account_id: &str) -> bool {
        self.selected_id.as_deref() == Some(account_id)
    }

    /// Select a listed account. Returns `false` for unknown ids.
    pub fn select(&mut self, account_id: &str) -> bool {
        if !self.accounts.iter().any(|a| a.id == account_id) {
            return false;
        }
        if !self.is_selected(account_id) {
            self.selected_id = Some(account_id.to_owned());
            self.transactions.clear();
        }
        true
    }

    /// Accounts a transfer from the selected account may target.
    pub fn transfer_targets(&self) -> Vec<&Account> {
        self.accounts.iter().filter(|a| !self.is_selected(&a.id)).collect()
    }

    /// Replace the history with `page` if it belongs to the selected account.
    /// Returns whether the page was applied.
    pub fn apply_history(&mut self, account_id: &str, page: Page<Transaction>) -> bool {
        if !self.is_selected(account_id) {
            return false;
        }
        self.transactions = page.content;
        true
    }

    pub fn toggle_create_account(&mut self) {
        self.show_create_account = !self.show_create_account;
        self.create_error = None;
    }

    /// Start an account creation. Returns `None` while one is already running.
    pub fn begin_create(&mut self) -> Option<AccountType> {
        if self.create_pending {
            return None;
        }
        self.create_pending = true;
        self.create_error = None;
        Some(self.new_account_type)
    }

    /// Close the create form and show the success notice. Returns the
    /// notice's sequence number.
    pub fn create_succeeded(&mut self) -> u64 {
        self.create_pending = false;
        self.show_create_account = false;
        self.show_notice(ACCOUNT_CREATED)
    }

    pub fn create_failed(&mut self) {
        self.create_pending = false;
        self.create_error = Some(ACCOUNT_CREATE_FAILED.to_owned());
    }

    /// Open `action`'s form, or close it when it is already open.
    pub fn toggle_form(&mut self, action: MoneyAction) {
        self.open_form = if self.open_form == Some(action) { None } else { Some(action) };
        self.error = None;
    }

    /// Validate the open form and start its request.
    ///
    /// Returns `None` when no form is open, no account is selected, a request
    /// is already in flight, or validation fails (the message lands in
    /// `error`).
    pub fn begin_money(&mut self) -> Option<MoneyRequest> {
        if self.money_pending {
            return None;
        }
        let action = self.open_form?;
        let account_id = self.selected_id.clone()?;
        self.error = None;

        match self.input.build(action, &account_id) {
            Ok(request) => {
                self.money_pending = true;
                Some(request)
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                None
            }
        }
    }

    /// Reset the money form and show the success notice. Returns the
    /// notice's sequence number.
    pub fn money_succeeded(&mut self, action: MoneyAction) -> u64 {
        self.money_pending = false;
        self.open_form = None;
        self.input = MoneyFormInput::default();
        self.show_notice(action.success_message())
    }

    pub fn money_failed(&mut self, message: String) {
        self.money_pending = false;
        self.error = Some(message);
    }

    fn show_notice(&mut self, text: &str) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(text.to_owned());
        self.notice_seq
    }

    /// Clear the banner if no newer notice replaced notice `seq`.
    pub fn expire_notice(&mut self, seq: u64) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }
}
