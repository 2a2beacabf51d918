//! Integration tests for teller-core
//!
//! Drive the account through `TellerContext` the way the console does.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use proptest::prelude::*;
use rust_decimal::Decimal;

use teller_core::config::Config;
use teller_core::{Account, AccountStatus, Error, Outcome, Request, TellerContext};

// ============================================================================
// Test Helpers
// ============================================================================

/// Context whose account was opened with the given whole-dollar balance
fn opened_context(starting: i64) -> TellerContext {
    let mut ctx = TellerContext::new(Config::default());
    ctx.open(Decimal::new(starting, 0))
        .expect("starting deposit should succeed");
    ctx
}

/// Active account holding `balance`, funded through a deposit
fn funded(balance: Decimal) -> Account {
    let mut account = Account::new("123456");
    if balance > Decimal::ZERO {
        account
            .deposit(balance)
            .expect("funding deposit should succeed");
    }
    account
}

/// Amount in cents, e.g. 1234 = $12.34
fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

// ============================================================================
// Session Scenarios
// ============================================================================

#[test]
fn test_deposit_overdraw_close_scenario() {
    let mut ctx = opened_context(100);

    let outcome = ctx.execute(Request::Deposit(Decimal::new(50, 0))).unwrap();
    assert_eq!(
        outcome,
        Outcome::Deposited {
            amount: Decimal::new(50, 0),
            balance: Decimal::new(150, 0),
        }
    );

    let err = ctx.execute(Request::Withdraw(Decimal::new(200, 0))).unwrap_err();
    assert!(matches!(err, Error::Overdraw(_)));
    assert_eq!(ctx.account().balance(), Decimal::new(150, 0));

    ctx.execute(Request::Close).unwrap();
    let err = ctx.execute(Request::Deposit(Decimal::new(10, 0))).unwrap_err();
    assert!(matches!(err, Error::InvalidAccountOperation(_)));

    let outcome = ctx.execute(Request::Balance).unwrap();
    assert_eq!(
        outcome,
        Outcome::Balance {
            balance: Decimal::new(150, 0)
        }
    );

    let summary = ctx.summary();
    assert_eq!(summary.status, AccountStatus::Closed);
    assert_eq!(summary.applied, 4);
    assert_eq!(summary.rejected, 2);
}

#[test]
fn test_zero_withdrawal_from_empty_account() {
    let mut account = Account::new("123456");
    account.withdraw(Decimal::ZERO).unwrap();
    assert_eq!(account.balance(), Decimal::ZERO);
}

#[test]
fn test_zero_starting_balance_is_rejected() {
    let mut ctx = TellerContext::new(Config::default());
    let err = ctx.open(Decimal::ZERO).unwrap_err();

    assert!(matches!(err, Error::InvalidOperation(_)));
    assert_eq!(err.category(), "User Input Error");
    assert!(ctx.account().is_active());
    assert_eq!(ctx.account().balance(), Decimal::ZERO);
}

#[test]
fn test_context_uses_configured_account_id() {
    let config = Config {
        account_id: "acct-42".to_string(),
        ..Config::default()
    };
    let ctx = TellerContext::new(config);
    assert_eq!(ctx.account().id(), "acct-42");
    assert_eq!(ctx.summary().account_id, "acct-42");
}

#[test]
fn test_fractional_amounts_are_exact() {
    let mut ctx = opened_context(1);
    for _ in 0..10 {
        ctx.execute(Request::Deposit(cents(10))).unwrap();
    }
    // 1.00 + 10 * 0.10 with no floating point drift
    assert_eq!(ctx.account().balance(), Decimal::new(2, 0));

    ctx.execute(Request::Withdraw(Decimal::new(2, 0))).unwrap();
    assert_eq!(ctx.account().balance(), Decimal::ZERO);
}

#[test]
fn test_deposit_overflow_leaves_balance_alone() {
    let mut ctx = TellerContext::new(Config::default());
    ctx.open(Decimal::MAX).unwrap();

    let err = ctx.execute(Request::Deposit(Decimal::ONE)).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
    assert_eq!(ctx.account().balance(), Decimal::MAX);
    assert_eq!(ctx.summary().rejected, 1);
}

#[test]
fn test_repeated_close_is_harmless() {
    let mut ctx = opened_context(10);
    for _ in 0..3 {
        assert!(ctx.execute(Request::Close).is_ok());
    }
    assert!(!ctx.account().is_active());
    assert_eq!(ctx.account().balance(), Decimal::new(10, 0));
}

// ============================================================================
// Properties
// ============================================================================

fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(cents)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: a positive deposit on an active account adds exactly its amount.
    #[test]
    fn deposit_adds_exact_amount(start in 0i64..10_000_000i64, a in amount()) {
        let mut account = funded(cents(start));
        account.deposit(a).unwrap();
        prop_assert_eq!(account.balance(), cents(start) + a);
    }

    /// Property: non-positive deposits fail and leave the balance alone.
    #[test]
    fn non_positive_deposit_fails(start in 0i64..10_000_000i64, a in -10_000_000i64..=0i64) {
        let mut account = funded(cents(start));
        let err = account.deposit(cents(a)).unwrap_err();
        if a < 0 {
            prop_assert!(matches!(err, Error::NegativeAmount(_)));
        } else {
            prop_assert!(matches!(err, Error::InvalidOperation(_)));
        }
        prop_assert_eq!(account.balance(), cents(start));
    }

    /// Property: withdrawing up to the balance succeeds and subtracts exactly.
    #[test]
    fn withdraw_within_balance_succeeds(start in 0i64..10_000_000i64, fraction in 0u32..=100u32) {
        let balance = cents(start);
        let a = (balance * Decimal::from(fraction) / Decimal::from(100)).round_dp(2);
        let mut account = funded(balance);
        account.withdraw(a).unwrap();
        prop_assert_eq!(account.balance(), balance - a);
    }

    /// Property: withdrawing more than the balance is an overdraw.
    #[test]
    fn withdraw_beyond_balance_overdraws(start in 0i64..10_000_000i64, extra in amount()) {
        let mut account = funded(cents(start));
        let err = account.withdraw(cents(start) + extra).unwrap_err();
        prop_assert!(matches!(err, Error::Overdraw(_)));
        prop_assert_eq!(account.balance(), cents(start));
    }

    /// Property: a closed account rejects every mutation, whatever the amount.
    #[test]
    fn closed_account_rejects_everything(
        start in 0i64..10_000_000i64,
        a in -10_000_000i64..10_000_000i64,
    ) {
        let mut account = funded(cents(start));
        account.close();

        prop_assert!(matches!(
            account.deposit(cents(a)),
            Err(Error::InvalidAccountOperation(_))
        ));
        prop_assert!(matches!(
            account.withdraw(cents(a)),
            Err(Error::InvalidAccountOperation(_))
        ));
        prop_assert_eq!(account.balance(), cents(start));
    }
}
