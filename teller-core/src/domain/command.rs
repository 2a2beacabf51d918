//! Console commands and the requests they turn into

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use super::result::{Error, Result};

/// A menu command token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Deposit,
    Withdraw,
    Balance,
    Close,
    Exit,
}

impl CommandKind {
    /// All commands, in menu order
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Deposit,
        CommandKind::Withdraw,
        CommandKind::Balance,
        CommandKind::Close,
        CommandKind::Exit,
    ];

    /// Match a token exactly (case-sensitive, surrounding whitespace ignored)
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "Deposit" => Some(Self::Deposit),
            "Withdraw" => Some(Self::Withdraw),
            "Balance" => Some(Self::Balance),
            "Close" => Some(Self::Close),
            "Exit" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::Balance => "Balance",
            Self::Close => "Close",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a user-typed amount
///
/// Anything that is not a decimal number is an [`Error::InvalidOperation`].
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid("Invalid."));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| Error::invalid("Invalid."))
}

/// An operation to apply to the account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Deposit(Decimal),
    Withdraw(Decimal),
    Balance,
    Close,
}

impl Request {
    /// Operation name, used in log events
    pub fn name(&self) -> &'static str {
        match self {
            Self::Deposit(_) => "deposit",
            Self::Withdraw(_) => "withdraw",
            Self::Balance => "balance",
            Self::Close => "close",
        }
    }
}

/// What a successful request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Deposited { amount: Decimal, balance: Decimal },
    Withdrew { amount: Decimal, balance: Decimal },
    Balance { balance: Decimal },
    Closed { already_closed: bool },
}
