//! Account domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::result::{Error, Result};

/// A single bank account
///
/// Fields are private: the balance only moves through [`Account::deposit`]
/// and [`Account::withdraw`], and a closed account never reopens.
#[derive(Debug, Clone)]
pub struct Account {
    id: String,
    balance: Decimal,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Create a new active account with a zero balance
    ///
    /// Money only enters through [`Account::deposit`].
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            balance: Decimal::ZERO,
            is_active: true,
            created_at: now,
            updated_at: now,
            closed_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    /// Current balance. Valid in every state.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Deposit a strictly positive amount
    ///
    /// Closed accounts reject every deposit, whatever the sign of the amount.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if !self.is_active {
            return Err(Error::account_closed());
        }
        if amount > Decimal::ZERO {
            self.balance = self
                .balance
                .checked_add(amount)
                .ok_or_else(|| Error::invalid("Deposit exceeds the maximum balance."))?;
            self.updated_at = Utc::now();
            Ok(())
        } else if amount < Decimal::ZERO {
            Err(Error::negative_amount())
        } else {
            Err(Error::invalid("Invalid."))
        }
    }

    /// Withdraw an amount no larger than the current balance
    ///
    /// Withdrawing exactly the balance succeeds and leaves zero.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if !self.is_active {
            return Err(Error::account_closed());
        }
        if amount < Decimal::ZERO {
            return Err(Error::invalid("Invalid."));
        }
        if self.balance >= amount {
            self.balance -= amount;
            self.updated_at = Utc::now();
            Ok(())
        } else {
            Err(Error::overdraw())
        }
    }

    /// Close the account
    ///
    /// Never fails. Returns `true` only for the call that actually closed it.
    pub fn close(&mut self) -> bool {
        if !self.is_active {
            return false;
        }
        let now = Utc::now();
        self.is_active = false;
        self.closed_at = Some(now);
        self.updated_at = now;
        true
    }
}
