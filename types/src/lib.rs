//! Shared wire schema for the bank dashboard.
//!
//! This crate owns the JSON representation of the backend's REST resources and
//! is used by `client`, `cli`, and `server`. Records are passive mirrors of the
//! backend responses; no money-movement rules are enforced here.


pub mod endpoints;
pub mod format;

use std::fmt;
use std::str::FromStr;

pub use chrono::NaiveDateTime;
pub use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency sent with every account the dashboard creates.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Error returned when parsing an enum from user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The string is not a known account type.
    #[error("unknown account type `{0}` (expected SAVINGS or CHECKING)")]
    AccountType(String),
    /// The string is not a known sort direction.
    #[error("unknown sort direction `{0}` (expected ASC or DESC)")]
    SortDirection(String),
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// Kind of account a user can open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Savings,
    Checking,
}

impl AccountType {
    /// All variants in display order.
    pub const ALL: [Self; 2] = [Self::Savings, Self::Checking];

    /// Wire name, e.g. `"SAVINGS"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Savings => "SAVINGS",
            Self::Checking => "CHECKING",
        }
    }

    /// Human label, e.g. `"Savings"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Checking => "Checking",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SAVINGS" => Ok(Self::Savings),
            "CHECKING" => Ok(Self::Checking),
            _ => Err(ParseError::AccountType(s.to_owned())),
        }
    }
}

/// A user's balance record as returned by the account service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub user_id: String,
    /// Full account number; display code masks it.
    pub account_number: String,
    pub account_type: AccountType,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub currency: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

/// Body for `POST /accounts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub user_id: String,
    pub account_type: AccountType,
    pub currency: String,
}

impl CreateAccountRequest {
    /// Request for a new account in [`DEFAULT_CURRENCY`].
    #[must_use]
    pub fn new(user_id: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            user_id: user_id.into(),
            account_type,
            currency: DEFAULT_CURRENCY.to_owned(),
        }
    }
}

/// Body of `GET /accounts/{id}/balance`, a bare JSON number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(#[serde(with = "rust_decimal::serde::float")] pub Decimal);

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// Kind of money movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdraw,
    Transfer,
}

impl TransactionType {
    /// Wire name, e.g. `"DEPOSIT"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
            Self::Transfer => "TRANSFER",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Whether a transaction adds to or takes from the account being viewed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Credit,
    Debit,
}

impl Direction {
    /// Sign prefix used when rendering amounts.
    #[must_use]
    pub fn sign(self) -> &'static str {
        match self {
            Self::Credit => "+",
            Self::Debit => "-",
        }
    }
}

/// A recorded money movement against one or two accounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    /// Destination account, set for transfers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Server-defined status such as `COMPLETED`.
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    /// Direction of this transaction relative to `account_id`.
    ///
    /// History for an account includes transfers received from other accounts,
    /// which credit the viewed account.
    #[must_use]
    pub fn direction(&self, account_id: &str) -> Direction {
        match self.kind {
            TransactionType::Deposit => Direction::Credit,
            TransactionType::Withdraw => Direction::Debit,
            TransactionType::Transfer => {
                if self.account_id != account_id && self.to_account_id.as_deref() == Some(account_id) {
                    Direction::Credit
                } else {
                    Direction::Debit
                }
            }
        }
    }

    /// Description text, or `-` when absent or blank.
    #[must_use]
    pub fn description_or_dash(&self) -> &str {
        match self.description.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => "-",
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

/// Body for `POST /transactions/deposit` and `POST /transactions/withdraw`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub account_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for `POST /transactions/transfer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_id: String,
    pub to_account_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// PAGING
// =============================================================================

/// Sort order for paged history queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(ParseError::SortDirection(s.to_owned())),
        }
    }
}

/// Query string for `GET /transactions/account/{id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryQuery {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub direction: SortDirection,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: "createdAt".to_owned(),
            direction: SortDirection::Desc,
        }
    }
}

impl HistoryQuery {
    /// Newest-first history, `size` rows from the first page.
    #[must_use]
    pub fn first_page(size: u32) -> Self {
        Self { size, ..Self::default() }
    }

    /// Query parameters in the order the backend documents them.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, String); 4] {
        [
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("direction", self.direction.as_str().to_owned()),
        ]
    }
}

/// Spring-style page envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

// =============================================================================
// AUTH
// =============================================================================

/// Signed-in user identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AuthResponse {
    /// Identity carried by this response.
    #[must_use]
    pub fn user(&self) -> User {
        User {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            roles: self.roles.clone(),
        }
    }
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

/// Plain `{ "message": ... }` body used for acknowledgements and errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Extract a non-empty `message` field from an error response body.
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    if message.is_empty() {
        return None;
    }
    Some(message.to_owned())
}
