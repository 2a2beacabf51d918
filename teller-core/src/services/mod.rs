//! Service layer - business logic orchestration
//!
//! Services coordinate the domain on behalf of the console driver.

mod teller;

pub use teller::{AccountStatus, SessionSummary, TellerService};
