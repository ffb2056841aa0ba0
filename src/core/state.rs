//! Account state value.
//!
//! The state is a plain value. Transitions never mutate it in place; they
//! consume one value and hand back the next.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amount used for balances, loans and staged input.
pub type Amount = Decimal;

/// Balance credited when an account is opened.
pub const OPENING_BALANCE: Amount = Decimal::from_parts(500, 0, 0, false, 0);

/// Snapshot of the single bank account.
///
/// The three `pending_*` fields hold user input that has been staged but not
/// committed yet. They only reach `balance` or `loan` through the matching
/// commit action.
///
/// # Example
///
/// ```rust
/// use account_machine::core::{transition, AccountState, Action, OPENING_BALANCE};
///
/// let state = AccountState::initial();
/// assert!(!state.is_active);
/// assert!(state.is_settled());
///
/// let opened = transition(state, Action::OpenAccount);
/// assert_eq!(opened.balance, OPENING_BALANCE);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AccountState {
    /// Current balance. Negative only after paying off a loan larger than it.
    pub balance: Amount,
    /// Outstanding loan, zero when there is none.
    pub loan: Amount,
    /// Staged deposit amount
    pub pending_deposit: Amount,
    /// Staged withdrawal amount
    pub pending_withdraw: Amount,
    /// Staged loan amount
    pub pending_loan: Amount,
    /// Whether the account is open
    pub is_active: bool,
}

impl Default for AccountState {
    fn default() -> Self {
        Self::initial()
    }
}

impl AccountState {
    /// State of an account that has never been opened (or was just closed).
    pub fn initial() -> Self {
        Self {
            balance: Amount::ZERO,
            loan: Amount::ZERO,
            pending_deposit: Amount::ZERO,
            pending_withdraw: Amount::ZERO,
            pending_loan: Amount::ZERO,
            is_active: false,
        }
    }

    /// True when a loan is outstanding.
    pub fn has_loan(&self) -> bool {
        !self.loan.is_zero()
    }

    /// True when both balance and loan are zero, the condition for closing.
    pub fn is_settled(&self) -> bool {
        self.balance.is_zero() && self.loan.is_zero()
    }

    /// Short status label for display and logging.
    pub fn status(&self) -> &'static str {
        if self.is_active {
            "open"
        } else {
            "closed"
        }
    }

    pub(crate) fn opened(self) -> Self {
        Self {
            is_active: true,
            balance: OPENING_BALANCE,
            ..self
        }
    }
}
