//! Session command - the interactive banking console

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use teller_core::{
    parse_amount, CommandKind, Error, ErrorPolicy, Outcome, Request, SessionSummary,
    TellerContext,
};

use super::load_config;
use crate::output;

#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Starting balance (prompted for when omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub starting_balance: Option<String>,
    /// Account identifier
    #[arg(long)]
    pub account_id: Option<String>,
    /// What to do when an operation fails
    #[arg(long, value_enum)]
    pub on_error: Option<OnError>,
    /// Print a session summary on exit
    #[arg(long)]
    pub summary: bool,
    /// Print the summary as JSON on stdout (implies --summary); the menu
    /// transcript then goes to stderr
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnError {
    /// End the session at the first failed operation
    Abort,
    /// Report the failure and keep going
    Continue,
}

impl From<OnError> for ErrorPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Abort => ErrorPolicy::Abort,
            OnError::Continue => ErrorPolicy::Continue,
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `Exit`
    Exited,
    /// An operation failed under the abort policy
    Aborted,
    /// Standard input ran out
    InputClosed,
}

pub fn run(args: SessionArgs) -> Result<()> {
    let mut config = load_config()?;
    if let Some(id) = args.account_id.filter(|id| !id.trim().is_empty()) {
        config.account_id = id;
    }
    if let Some(policy) = args.on_error {
        config.error_policy = policy.into();
    }

    let mut ctx = TellerContext::new(config);
    let stdin = io::stdin();
    let starting_balance = args.starting_balance.as_deref();

    // Keep stdout clean for the JSON document
    let end = if args.json {
        let mut console = Console::new(stdin.lock(), io::stderr(), io::stderr());
        run_session(&mut ctx, starting_balance, &mut console)?
    } else {
        let mut console = Console::new(stdin.lock(), io::stdout(), io::stderr());
        run_session(&mut ctx, starting_balance, &mut console)?
    };
    tracing::debug!(?end, "session finished");

    if args.summary || args.json {
        print_summary(&mut io::stdout(), &ctx.summary(), args.json)?;
    }

    Ok(())
}

/// Line-oriented console over any reader and pair of writers
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Read one line, without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Read the next non-blank line
    fn read_token(&mut self) -> io::Result<Option<String>> {
        loop {
            match self.read_line()? {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => return Ok(Some(line.trim().to_string())),
                None => return Ok(None),
            }
        }
    }

    /// Report an account error on the error stream
    fn report(&mut self, error: &Error) -> io::Result<()> {
        output::error(&mut self.err, &format!("{}: {}", error.category(), error))
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Welcome to your bank account. ")?;
        writeln!(self.out, "{}", "BANK OPTIONS: ".bold())?;
        for kind in CommandKind::ALL {
            writeln!(self.out, ">{} ", kind)?;
        }
        Ok(())
    }
}

/// Run one console session against the context
///
/// Account errors are reported on the error stream. Under
/// [`ErrorPolicy::Abort`] the first one ends the session; under
/// [`ErrorPolicy::Continue`] the loop carries on with the account unchanged.
pub fn run_session<R, W, E>(
    ctx: &mut TellerContext,
    starting_balance: Option<&str>,
    console: &mut Console<R, W, E>,
) -> Result<SessionEnd>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let policy = ctx.config.error_policy;
    let symbol = ctx.config.currency_symbol.clone();
    let account_id = ctx.account().id().to_string();

    let raw_start = match starting_balance {
        Some(value) => value.trim().to_string(),
        None => {
            writeln!(
                console.out,
                "Welcome to the bank system. Please enter your starting balance."
            )?;
            match console.read_line()? {
                Some(line) => line.trim().to_string(),
                None => return Ok(SessionEnd::InputClosed),
            }
        }
    };

    writeln!(console.out)?;
    writeln!(console.out, "Bank Account Created: #{}", account_id)?;
    writeln!(console.out, "Depositing {}", raw_start)?;

    let opened = parse_amount(&raw_start)
        .inspect_err(|e| ctx.record_rejection(e))
        .and_then(|amount| ctx.open(amount));
    match opened {
        Ok(_) => {
            output::success(
                &mut console.out,
                &format!("Verified for account {}", account_id),
            )?;
            writeln!(
                console.out,
                "Your balance is now: {}",
                output::money(&symbol, ctx.account().balance())
            )?;
        }
        Err(e) => {
            console.report(&e)?;
            if policy == ErrorPolicy::Abort {
                return Ok(SessionEnd::Aborted);
            }
        }
    }

    loop {
        console.print_menu()?;
        let Some(token) = console.read_token()? else {
            return Ok(SessionEnd::InputClosed);
        };

        let Some(kind) = CommandKind::parse(&token) else {
            writeln!(console.out)?;
            output::warning(&mut console.out, "Invalid input.")?;
            continue;
        };

        let result = match kind {
            CommandKind::Exit => return Ok(SessionEnd::Exited),
            CommandKind::Deposit | CommandKind::Withdraw => {
                writeln!(console.out)?;
                let (prompt, verb) = if kind == CommandKind::Deposit {
                    ("How much would you like to deposit?", "Depositing")
                } else {
                    ("How much would you like to Withdraw?", "Withdrawing")
                };
                writeln!(console.out, "{}", prompt)?;
                let Some(raw) = console.read_line()? else {
                    return Ok(SessionEnd::InputClosed);
                };
                writeln!(console.out, "{} {}", verb, raw.trim())?;

                parse_amount(&raw)
                    .inspect_err(|e| ctx.record_rejection(e))
                    .and_then(|amount| {
                        let request = if kind == CommandKind::Deposit {
                            Request::Deposit(amount)
                        } else {
                            Request::Withdraw(amount)
                        };
                        ctx.execute(request)
                    })
            }
            CommandKind::Balance => ctx.execute(Request::Balance),
            CommandKind::Close => ctx.execute(Request::Close),
        };

        match result {
            Ok(Outcome::Deposited { .. }) | Ok(Outcome::Withdrew { .. }) => {
                output::success(
                    &mut console.out,
                    &format!("Verified for account {}", account_id),
                )?;
            }
            Ok(Outcome::Balance { balance }) => {
                writeln!(console.out)?;
                writeln!(console.out)?;
                writeln!(
                    console.out,
                    "Current Balance: {}",
                    output::money(&symbol, balance)
                )?;
            }
            Ok(Outcome::Closed { .. }) => {
                writeln!(console.out)?;
                output::success(
                    &mut console.out,
                    "Your account has been successfully closed.",
                )?;
            }
            Err(e) => {
                console.report(&e)?;
                if policy == ErrorPolicy::Abort {
                    return Ok(SessionEnd::Aborted);
                }
            }
        }
    }
}

/// Print the end-of-session summary as a table or JSON
fn print_summary(out: &mut impl Write, summary: &SessionSummary, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
        return Ok(());
    }

    writeln!(out)?;
    output::info(out, "Session Summary")?;

    let mut table = output::create_table();
    table.add_row(vec!["Account", summary.account_id.as_str()]);
    table.add_row(vec!["Balance", &summary.balance.to_string()]);
    table.add_row(vec!["Status", summary.status.as_str()]);
    table.add_row(vec!["Operations applied", &summary.applied.to_string()]);
    table.add_row(vec!["Operations rejected", &summary.rejected.to_string()]);
    table.add_row(vec![
        "Opened",
        &summary.opened_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]);
    if let Some(closed_at) = summary.closed_at {
        table.add_row(vec![
            "Closed",
            &closed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }
    writeln!(out, "{}", table)?;

    Ok(())
}
