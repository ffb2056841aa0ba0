//! Guard predicates over the account state.
//!
//! Guards are pure boolean functions that decide whether an action's effect
//! may apply. A failing guard turns the action into a no-op.

use super::state::{AccountState, Amount};
use std::fmt;

/// Named pure predicate over an [`AccountState`].
///
/// # Example
///
/// ```rust
/// use account_machine::core::{AccountState, Guard};
///
/// let open = Guard::new("open", |s: &AccountState| s.is_active);
/// assert!(!open.check(&AccountState::initial()));
/// ```
#[derive(Clone, Copy)]
pub struct Guard {
    name: &'static str,
    predicate: fn(&AccountState) -> bool,
}

impl Guard {
    /// Create a guard from a pure, non-capturing predicate.
    pub const fn new(name: &'static str, predicate: fn(&AccountState) -> bool) -> Self {
        Guard { name, predicate }
    }

    /// Check if the guard allows the action from this state.
    pub fn check(&self, state: &AccountState) -> bool {
        (self.predicate)(state)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Account must be open.
    pub const IS_ACTIVE: Guard = Guard::new("is_active", |s| s.is_active);

    /// No loan may be outstanding.
    pub const NO_OUTSTANDING_LOAN: Guard = Guard::new("no_outstanding_loan", |s| !s.has_loan());

    /// The staged loan amount must not be negative.
    pub const NON_NEGATIVE_PENDING_LOAN: Guard =
        Guard::new("non_negative_pending_loan", |s| s.pending_loan >= Amount::ZERO);

    /// The balance must cover the outstanding loan.
    pub const LOAN_COVERED: Guard = Guard::new("loan_covered", |s| s.loan <= s.balance);

    /// Balance must be strictly positive.
    pub const POSITIVE_BALANCE: Guard =
        Guard::new("positive_balance", |s| s.balance > Amount::ZERO);

    /// Balance and loan must both be zero.
    pub const SETTLED: Guard = Guard::new("settled", |s| s.is_settled());

    /// Committing the staged deposit must not overflow the balance.
    pub const DEPOSIT_FITS: Guard = Guard::new("deposit_fits", |s| {
        s.balance.checked_add(s.pending_deposit).is_some()
    });

    /// Committing the staged withdrawal must not overflow the balance.
    pub const WITHDRAW_FITS: Guard = Guard::new("withdraw_fits", |s| {
        s.balance.checked_sub(s.pending_withdraw).is_some()
    });

    /// Crediting the staged loan must not overflow the balance.
    pub const LOAN_FITS: Guard =
        Guard::new("loan_fits", |s| s.balance.checked_add(s.pending_loan).is_some());

    /// Repaying the loan must not overflow the balance.
    pub const REPAYMENT_FITS: Guard =
        Guard::new("repayment_fits", |s| s.balance.checked_sub(s.loan).is_some());
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guard").field(&self.name).finish()
    }
}
