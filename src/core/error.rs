//! Errors raised by the account state machine.

use thiserror::Error;

/// The only failure the state machine reports.
///
/// Precondition failures are not errors: they leave the state unchanged.
/// An unknown action kind is a programming mistake on the caller's side and
/// is surfaced instead of silently ignored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Unknown action '{kind}'")]
    UnknownAction { kind: String },
}
