//! Teller service - applies console requests to the account

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::{Account, Outcome, Request};

/// Teller service for the single session account
///
/// Holds no account of its own: the caller owns the [`Account`] and lends it
/// for each request. The service only keeps the session counters.
#[derive(Debug, Default)]
pub struct TellerService {
    applied: u64,
    rejected: u64,
}

impl TellerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Perform the implicit first deposit of a new session
    pub fn open(&mut self, account: &mut Account, starting_balance: Decimal) -> Result<Outcome> {
        tracing::debug!(account_id = account.id(), "opening account");
        self.execute(account, Request::Deposit(starting_balance))
    }

    /// Apply one request to the account
    ///
    /// A failed request leaves the account untouched.
    pub fn execute(&mut self, account: &mut Account, request: Request) -> Result<Outcome> {
        let result = match request {
            Request::Deposit(amount) => account.deposit(amount).map(|()| Outcome::Deposited {
                amount,
                balance: account.balance(),
            }),
            Request::Withdraw(amount) => account.withdraw(amount).map(|()| Outcome::Withdrew {
                amount,
                balance: account.balance(),
            }),
            Request::Balance => Ok(Outcome::Balance {
                balance: account.balance(),
            }),
            Request::Close => Ok(Outcome::Closed {
                already_closed: !account.close(),
            }),
        };

        match &result {
            Ok(_) => {
                self.applied += 1;
                tracing::info!(
                    account_id = account.id(),
                    operation = request.name(),
                    "request applied"
                );
            }
            Err(e) => {
                self.rejected += 1;
                tracing::warn!(
                    account_id = account.id(),
                    operation = request.name(),
                    error = e.kind(),
                    "request rejected"
                );
            }
        }

        result
    }

    /// Record a failure that happened before a request could be built
    /// (for example an amount that did not parse)
    pub fn record_rejection(&mut self, account: &Account, error: &Error) {
        self.rejected += 1;
        tracing::warn!(
            account_id = account.id(),
            error = error.kind(),
            "input rejected"
        );
    }

    pub fn applied(&self) -> u64 {
        self.applied
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Snapshot of the session for reporting
    pub fn summary(&self, account: &Account) -> SessionSummary {
        SessionSummary {
            account_id: account.id().to_string(),
            balance: account.balance(),
            status: if account.is_active() {
                AccountStatus::Active
            } else {
                AccountStatus::Closed
            },
            applied: self.applied,
            rejected: self.rejected,
            opened_at: account.created_at(),
            closed_at: account.closed_at(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Closed,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Closed => "closed",
        }
    }
}

/// End-of-session report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub account_id: String,
    pub balance: Decimal,
    pub status: AccountStatus,
    pub applied: u64,
    pub rejected: u64,
    pub opened_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
}
