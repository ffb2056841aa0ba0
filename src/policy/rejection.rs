//! Reasons an action can be rejected.

use crate::core::{ActionKind, Amount};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an action left the state unchanged.
///
/// Rejections are reported for diagnostics only; the state machine itself
/// never fails on them.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("Account is not open")]
    Inactive,

    #[error("A loan of {loan} is already outstanding")]
    LoanOutstanding { loan: Amount },

    #[error("Requested loan ({amount}) is negative")]
    NegativeLoan { amount: Amount },

    #[error("Loan ({loan}) exceeds balance ({balance})")]
    LoanExceedsBalance { loan: Amount, balance: Amount },

    #[error("Balance ({balance}) is not positive")]
    NonPositiveBalance { balance: Amount },

    #[error("Account still holds balance {balance} and loan {loan}")]
    NotSettled { balance: Amount, loan: Amount },

    #[error("Applying {action} would overflow the balance")]
    Overflow { action: ActionKind },
}
