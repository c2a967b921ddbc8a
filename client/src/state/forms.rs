//! Deposit, withdraw, and transfer form input.
//!
//! The three money forms share one set of inputs; only one is open at a time.
//! Input is parsed here so the page only ever sends well-formed amounts.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use bank_types::{Decimal, TransactionRequest, TransferRequest};

pub const INVALID_AMOUNT: &str = "Enter an amount greater than zero";
pub const MISSING_DESTINATION: &str = "Select a destination account";

/// Which money movement a form performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoneyAction {
    Deposit,
    Withdraw,
    Transfer,
}

impl MoneyAction {
    pub const ALL: [Self; 3] = [Self::Deposit, Self::Withdraw, Self::Transfer];

    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::Transfer => "Transfer",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit Money",
            Self::Withdraw => "Withdraw Money",
            Self::Transfer => "Transfer Money",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            Self::Deposit => "btn btn-success",
            Self::Withdraw => "btn btn-warning",
            Self::Transfer => "btn btn-info",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit successful!",
            Self::Withdraw => "Withdrawal successful!",
            Self::Transfer => "Transfer successful!",
        }
    }

    /// Error shown when the backend gives no message of its own.
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit failed",
            Self::Withdraw => "Withdrawal failed",
            Self::Transfer => "Transfer failed",
        }
    }
}

/// A validated request ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoneyRequest {
    Deposit(TransactionRequest),
    Withdraw(TransactionRequest),
    Transfer(TransferRequest),
}

impl MoneyRequest {
    pub fn action(&self) -> MoneyAction {
        match self {
            Self::Deposit(_) => MoneyAction::Deposit,
            Self::Withdraw(_) => MoneyAction::Withdraw,
            Self::Transfer(_) => MoneyAction::Transfer,
        }
    }

    /// Account whose balance and history the request changes.
    pub fn source_account_id(&self) -> &str {
        match self {
            Self::Deposit(req) | Self::Withdraw(req) => &req.account_id,
            Self::Transfer(req) => &req.from_account_id,
        }
    }
}

/// Raw text of the money form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoneyFormInput {
    pub amount: String,
    pub description: String,
    pub to_account_id: String,
}

impl MoneyFormInput {
    /// Validate the input and build the request for `action` on `account_id`.
    ///
    /// # Errors
    ///
    /// Returns the message to show inline when the amount is not a positive
    /// number or a transfer has no distinct destination.
    pub fn build(&self, action: MoneyAction, account_id: &str) -> Result<MoneyRequest, &'static str> {
        let amount = parse_amount(&self.amount).ok_or(INVALID_AMOUNT)?;
        let description = non_blank(&self.description);

        match action {
            MoneyAction::Deposit | MoneyAction::Withdraw => {
                let req = TransactionRequest {
                    account_id: account_id.to_owned(),
                    amount,
                    description,
                };
                Ok(if action == MoneyAction::Deposit {
                    MoneyRequest::Deposit(req)
                } else {
                    MoneyRequest::Withdraw(req)
                })
            }
            MoneyAction::Transfer => {
                let to = self.to_account_id.trim();
                if to.is_empty() || to == account_id {
                    return Err(MISSING_DESTINATION);
                }
                Ok(MoneyRequest::Transfer(TransferRequest {
                    from_account_id: account_id.to_owned(),
                    to_account_id: to.to_owned(),
                    amount,
                    description,
                }))
            }
        }
    }
}

/// Parse a strictly positive decimal amount.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let amount: Decimal = raw.trim().parse().ok()?;
    (amount > Decimal::ZERO).then_some(amount)
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
