//! Typed HTTP client for the banking backend.
//!
//! DESIGN
//! ======
//! Every call returns a [`Reply`] holding both the raw JSON body and its typed
//! decoding, so `--json` can echo exactly what the backend sent while the
//! default output renders from the typed form.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::time::Duration;

use bank_types::{
    Account, AccountType, AuthResponse, Balance, CreateAccountRequest, HistoryQuery, LoginRequest, MessageResponse,
    Page, RegisterRequest, Transaction, TransactionRequest, TransferRequest, endpoints,
};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CliError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw and decoded response body.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    pub raw: Value,
    pub body: T,
}

#[derive(Debug, Clone)]
pub struct BankClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl BankClient {
    /// Build a client for `base_url`, e.g. `http://localhost:8080/api`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] if `base_url` is not an http(s) URL.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, CliError> {
        let parsed = reqwest::Url::parse(base_url).map_err(|e| CliError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, authed: bool) -> Result<RequestBuilder, CliError> {
        let builder = self.http.request(method, self.url(path));
        if !authed {
            return Ok(builder);
        }
        let token = self.token.as_deref().ok_or(CliError::MissingToken)?;
        Ok(builder.bearer_auth(token))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Reply<T>, CliError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().clone();
        let text = response.text().await?;
        tracing::debug!(%url, status = status.as_u16(), bytes = text.len(), "backend responded");

        if !status.is_success() {
            let message = bank_types::error_message(&text)
                .or_else(|| status.canonical_reason().map(str::to_owned))
                .unwrap_or_else(|| "request failed".to_owned());
            return Err(CliError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str::<Value>(&text)?
        };
        let body = serde_json::from_value::<T>(raw.clone())?;
        Ok(Reply { raw, body })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<Reply<T>, CliError> {
        let request = self.request(Method::GET, path, true)?.query(query);
        self.send(request).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<Reply<T>, CliError> {
        let request = self.request(Method::POST, path, true)?.json(body);
        self.send(request).await
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// # Errors
    ///
    /// Returns [`CliError::Api`] when the credentials are rejected.
    pub async fn login(&self, request: &LoginRequest) -> Result<Reply<AuthResponse>, CliError> {
        let builder = self.request(Method::POST, endpoints::LOGIN, false)?.json(request);
        self.send(builder).await
    }

    /// # Errors
    ///
    /// Returns [`CliError::Api`] when the backend refuses the registration.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Reply<MessageResponse>, CliError> {
        let builder = self.request(Method::POST, endpoints::REGISTER, false)?.json(request);
        self.send(builder).await
    }

    /// # Errors
    ///
    /// Returns [`CliError::Api`] when the token is rejected.
    pub async fn validate(&self, token: &str) -> Result<Reply<MessageResponse>, CliError> {
        let builder = self
            .request(Method::GET, endpoints::VALIDATE, false)?
            .query(&[("token", token)]);
        self.send(builder).await
    }

    // =========================================================================
    // ACCOUNTS
    // =========================================================================

    /// # Errors
    ///
    /// Returns a [`CliError`] if no token is configured or the request fails.
    pub async fn create_account(&self, user_id: &str, account_type: AccountType) -> Result<Reply<Account>, CliError> {
        self.post(endpoints::ACCOUNTS, &CreateAccountRequest::new(user_id, account_type))
            .await
    }

    /// # Errors
    ///
    /// Returns a [`CliError`] if no token is configured or the request fails.
    pub async fn accounts_by_user(&self, user_id: &str) -> Result<Reply<Vec<Account>>, CliError> {
        self.get(&endpoints::accounts_by_user(user_id), &[]).await
    }

    /// # Errors
    ///
    /// Returns a [`CliError`] if no token is configured or the request fails.
    pub async fn account(&self, account_id: &str) -> Result<Reply<Account>, CliError> {
        self.get(&endpoints::account(account_id), &[]).await
    }

    /// # Errors
    ///
    /// Returns a [`CliError`] if no token is configured or the request fails.
    pub async fn balance(&self, account_id: &str) -> Result<Reply<Balance>, CliError> {
        self.get(&endpoints::account_balance(account_id), &[]).await
    }

    // =========================================================================
    // TRANSACTIONS
    // =========================================================================

    /// # Errors
    ///
    /// Returns a [`CliError`] if no token is configured or the backend refuses it.
    pub async fn deposit(&self, request: &TransactionRequest) -> Result<Reply<Transaction>, CliError> {
        self.post(endpoints::DEPOSIT, request).await
    }

    /// # Errors
    ///
    /// Returns a [`CliError`] if no token is configured or the backend refuses it.
    pub async fn withdraw(&self, request: &TransactionRequest) -> Result<Reply<Transaction>, CliError> {
        self.post(endpoints::WITHDRAW, request).await
    }

    /// # Errors
    ///
    /// Returns a [`CliError`] if no token is configured or the backend refuses it.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<Reply<Transaction>, CliError> {
        self.post(endpoints::TRANSFER, request).await
    }

    /// # Errors
    ///
    /// Returns a [`CliError`] if no token is configured or the request fails.
    pub async fn history(&self, account_id: &str, query: &HistoryQuery) -> Result<Reply<Page<Transaction>>, CliError> {
        self.get(&endpoints::transaction_history(account_id), &query.pairs()).await
    }
}
