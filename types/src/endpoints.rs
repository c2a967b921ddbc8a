//! Backend endpoint paths, relative to the API base URL.
//!
//! Callers prepend their own base (`/api` in the browser, `BANK_API_URL` in the
//! CLI). Identifiers are inserted verbatim; the backend issues opaque ids.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const VALIDATE: &str = "/auth/validate";

pub const ACCOUNTS: &str = "/accounts";
pub const DEPOSIT: &str = "/transactions/deposit";
pub const WITHDRAW: &str = "/transactions/withdraw";
pub const TRANSFER: &str = "/transactions/transfer";

#[must_use]
pub fn accounts_by_user(user_id: &str) -> String {
    format!("/accounts/user/{user_id}")
}

#[must_use]
pub fn account(account_id: &str) -> String {
    format!("/accounts/{account_id}")
}

#[must_use]
pub fn account_balance(account_id: &str) -> String {
    format!("/accounts/{account_id}/balance")
}

/// History path; pair with [`crate::HistoryQuery::pairs`] for the query string.
#[must_use]
pub fn transaction_history(account_id: &str) -> String {
    format!("/transactions/account/{account_id}")
}

/// Join a base URL and an endpoint path without doubling the slash.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
