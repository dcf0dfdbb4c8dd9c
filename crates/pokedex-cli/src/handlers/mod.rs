//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Drive the state holder or service, then format output for the terminal
//! - No direct database or HTTP access

pub mod clear;
pub mod count;
pub mod find;
pub mod list;
pub mod remove;
pub mod search;
pub mod seed;
pub mod show;
pub mod watch;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print the state holder's latest status message.
///
/// An error message turns into a failed command so the exit code reflects it.
pub(crate) fn report_status(ctx: &CliContext) -> Result<()> {
    let message = ctx.state().message().borrow().clone();
    match message {
        Some(message) if message.is_error() => Err(CliError::Status(message.text).into()),
        Some(message) => {
            println!("{}", message.text);
            Ok(())
        }
        None => Ok(()),
    }
}
