//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against `/api`, which
//! the host server forwards to the backend. A stored session token is sent as
//! a bearer `Authorization` header.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each wrapper issues exactly one request and returns the parsed body. There
//! is no retry or caching; callers decide what to show via
//! [`ApiError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use bank_types::{
    Account, AccountType, AuthResponse, Balance, CreateAccountRequest, Decimal, HistoryQuery, LoginRequest,
    MessageResponse, Page, RegisterRequest, Transaction, TransactionRequest, TransferRequest, endpoints,
};

/// Path prefix the host server forwards to the backend.
pub const API_BASE: &str = "/api";

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    #[cfg(any(test, feature = "hydrate"))]
    fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: bank_types::error_message(body),
        }
    }

    /// The backend's own message when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    endpoints::join(API_BASE, path)
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, api_url, bearer};

    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match crate::util::session::token() {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(path: &str, query: &[(&'static str, String)]) -> Result<T, ApiError> {
        let resp = authorized(Request::get(&api_url(path)))
            .query(query.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        let resp = authorized(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log::warn!("{} responded {status}", resp.url());
            return Err(ApiError::from_status(status, &body));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(not(feature = "hydrate"))]
mod http {
    use super::ApiError;

    pub async fn get_json<T>(path: &str, query: &[(&'static str, String)]) -> Result<T, ApiError> {
        let _ = (path, query);
        Err(ApiError::Unavailable)
    }

    pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Sign in via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are rejected.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    http::post_json(endpoints::LOGIN, request).await
}

/// Create a user via `POST /auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend refuses the registration.
pub async fn register(request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
    http::post_json(endpoints::REGISTER, request).await
}

/// Check a token via `GET /auth/validate?token=`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] when the backend rejects the token.
pub async fn validate_token(token: &str) -> Result<(), ApiError> {
    http::get_json::<MessageResponse>(endpoints::VALIDATE, &[("token", token.to_owned())])
        .await
        .map(|_| ())
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// Open an account in the default currency via `POST /accounts`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_account(user_id: &str, account_type: AccountType) -> Result<Account, ApiError> {
    http::post_json(endpoints::ACCOUNTS, &CreateAccountRequest::new(user_id, account_type)).await
}

/// List a user's accounts via `GET /accounts/user/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_accounts_by_user(user_id: &str) -> Result<Vec<Account>, ApiError> {
    http::get_json(&endpoints::accounts_by_user(user_id), &[]).await
}

/// Fetch one account via `GET /accounts/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_account(account_id: &str) -> Result<Account, ApiError> {
    http::get_json(&endpoints::account(account_id), &[]).await
}

/// Fetch a balance via `GET /accounts/{id}/balance`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_balance(account_id: &str) -> Result<Decimal, ApiError> {
    http::get_json::<Balance>(&endpoints::account_balance(account_id), &[])
        .await
        .map(|balance| balance.0)
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// Deposit via `POST /transactions/deposit`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend refuses it.
pub async fn deposit(request: &TransactionRequest) -> Result<Transaction, ApiError> {
    http::post_json(endpoints::DEPOSIT, request).await
}

/// Withdraw via `POST /transactions/withdraw`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend refuses it.
pub async fn withdraw(request: &TransactionRequest) -> Result<Transaction, ApiError> {
    http::post_json(endpoints::WITHDRAW, request).await
}

/// Transfer between accounts via `POST /transactions/transfer`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend refuses it.
pub async fn transfer(request: &TransferRequest) -> Result<Transaction, ApiError> {
    http::post_json(endpoints::TRANSFER, request).await
}

/// Fetch one page of history via `GET /transactions/account/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_transaction_history(account_id: &str, query: &HistoryQuery) -> Result<Page<Transaction>, ApiError> {
    http::get_json(&endpoints::transaction_history(account_id), &query.pairs()).await
}
