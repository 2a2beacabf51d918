//! Result and error types for account operations

use thiserror::Error;

/// Account operation error
///
/// Closed set of failure kinds. Each carries only a human-readable message;
/// callers match on the variant to decide how to report it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A deposit of a negative amount on an active account
    #[error("{0}")]
    NegativeAmount(String),

    /// A withdrawal larger than the available balance
    #[error("{0}")]
    Overdraw(String),

    /// Any mutation attempted on a closed account
    #[error("{0}")]
    InvalidAccountOperation(String),

    /// Anything not classified above (zero deposits, negative withdrawals,
    /// amounts that are not numbers)
    #[error("{0}")]
    InvalidOperation(String),
}

impl Error {
    /// Create a negative amount error
    pub fn negative_amount() -> Self {
        Self::NegativeAmount("Attempt to enter negative values.".to_string())
    }

    /// Create an overdraw error
    pub fn overdraw() -> Self {
        Self::Overdraw("Attempt to overdraw available funds.".to_string())
    }

    /// Create a closed account error
    pub fn account_closed() -> Self {
        Self::InvalidAccountOperation("Account closed.".to_string())
    }

    /// Create a generic invalid operation error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    /// Console prefix for this kind of error
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidAccountOperation(_) => "Account Status Error",
            Self::Overdraw(_) => "Withdraw Input Error",
            Self::NegativeAmount(_) => "Signed Error",
            Self::InvalidOperation(_) => "User Input Error",
        }
    }

    /// Stable snake_case name, used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NegativeAmount(_) => "negative_amount",
            Self::Overdraw(_) => "overdraw",
            Self::InvalidAccountOperation(_) => "invalid_account_operation",
            Self::InvalidOperation(_) => "invalid_operation",
        }
    }
}

/// Account operation result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::account_closed().to_string(), "Account closed.");
        assert_eq!(
            Error::negative_amount().to_string(),
            "Attempt to enter negative values."
        );
        assert_eq!(Error::invalid("Invalid.").to_string(), "Invalid.");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(Error::account_closed().category(), "Account Status Error");
        assert_eq!(Error::overdraw().category(), "Withdraw Input Error");
        assert_eq!(Error::negative_amount().category(), "Signed Error");
        assert_eq!(Error::invalid("x").category(), "User Input Error");
    }
}
