//! Teller Core - account model for the teller bank simulator
//!
//! Same layering as the rest of the workspace:
//!
//! - **domain**: the Account state machine, commands, and error taxonomy
//! - **services**: request handling and session bookkeeping
//! - **config**: settings file and environment overrides
//! - **logging**: diagnostic tracing setup

pub mod config;
pub mod domain;
pub mod logging;
pub mod services;

use rust_decimal::Decimal;

use config::Config;
use services::TellerService;

// Re-export commonly used types at crate root
pub use config::ErrorPolicy;
pub use domain::result::{Error, Result};
pub use domain::{parse_amount, Account, CommandKind, Outcome, Request};
pub use services::{AccountStatus, SessionSummary};

/// Main context for a teller session
///
/// Owns the one account of the session. Every operation goes through here
/// so the service sees each request.
pub struct TellerContext {
    pub config: Config,
    account: Account,
    teller_service: TellerService,
}

impl TellerContext {
    /// Create a context with a fresh, empty, active account
    pub fn new(config: Config) -> Self {
        let account = Account::new(config.account_id.clone());
        Self {
            config,
            account,
            teller_service: TellerService::new(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Perform the implicit first deposit
    pub fn open(&mut self, starting_balance: Decimal) -> Result<Outcome> {
        self.teller_service.open(&mut self.account, starting_balance)
    }

    /// Apply one request to the account
    pub fn execute(&mut self, request: Request) -> Result<Outcome> {
        self.teller_service.execute(&mut self.account, request)
    }

    /// Count an input error that never reached the account
    pub fn record_rejection(&mut self, error: &Error) {
        self.teller_service.record_rejection(&self.account, error);
    }

    pub fn summary(&self) -> SessionSummary {
        self.teller_service.summary(&self.account)
    }
}
