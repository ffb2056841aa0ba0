//! Preconditions attached to each action kind.

use crate::core::{AccountState, ActionKind, Guard};
use crate::policy::builder::PolicyBuilder;
use crate::policy::rejection::Rejection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A guard paired with the rejection reported when it fails.
#[derive(Clone, Copy)]
pub struct Check {
    pub guard: Guard,
    reject: fn(&AccountState) -> Rejection,
}

impl Check {
    fn new(guard: Guard, reject: fn(&AccountState) -> Rejection) -> Self {
        Self { guard, reject }
    }

    /// `None` when the guard passes.
    pub fn run(&self, state: &AccountState) -> Option<Rejection> {
        if self.guard.check(state) {
            None
        } else {
            Some((self.reject)(state))
        }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").field("guard", &self.guard).finish()
    }
}

/// Which optional guards the state machine enforces.
///
/// Withdraw, pay-loan and close preconditions always apply, as do the rules
/// that a requested loan cannot be negative and that no commit may overflow
/// the balance. The account-open
/// guard and the one-loan-at-a-time guard are switchable: [`Policy::strict`]
/// (the default) enforces both, [`Policy::reference`] enforces neither.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Policy {
    pub(crate) require_active: bool,
    pub(crate) single_loan: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self::strict()
    }
}

impl Policy {
    /// Every action except opening needs an open account, and a loan can
    /// only be requested while none is outstanding.
    pub fn strict() -> Self {
        Self {
            require_active: true,
            single_loan: true,
        }
    }

    /// Unguarded behavior: actions apply to closed accounts and loans may be
    /// requested on top of an existing one (replacing it).
    pub fn reference() -> Self {
        Self {
            require_active: false,
            single_loan: false,
        }
    }

    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::new()
    }

    pub fn requires_active(&self) -> bool {
        self.require_active
    }

    pub fn single_loan(&self) -> bool {
        self.single_loan
    }

    /// Checks that apply to `kind` under this policy, in evaluation order.
    pub fn checks(&self, kind: ActionKind) -> Vec<Check> {
        let mut checks = Vec::new();

        if self.require_active && kind != ActionKind::OpenAccount {
            checks.push(Check::new(Guard::IS_ACTIVE, |_| Rejection::Inactive));
        }

        match kind {
            ActionKind::CommitDeposit => {
                checks.push(Check::new(Guard::DEPOSIT_FITS, |_| Rejection::Overflow {
                    action: ActionKind::CommitDeposit,
                }));
            }
            ActionKind::CommitWithdraw => {
                checks.push(Check::new(Guard::POSITIVE_BALANCE, |s| {
                    Rejection::NonPositiveBalance { balance: s.balance }
                }));
                checks.push(Check::new(Guard::WITHDRAW_FITS, |_| Rejection::Overflow {
                    action: ActionKind::CommitWithdraw,
                }));
            }
            ActionKind::RequestLoan => {
                if self.single_loan {
                    checks.push(Check::new(Guard::NO_OUTSTANDING_LOAN, |s| {
                        Rejection::LoanOutstanding { loan: s.loan }
                    }));
                }
                checks.push(Check::new(Guard::NON_NEGATIVE_PENDING_LOAN, |s| {
                    Rejection::NegativeLoan {
                        amount: s.pending_loan,
                    }
                }));
                checks.push(Check::new(Guard::LOAN_FITS, |_| Rejection::Overflow {
                    action: ActionKind::RequestLoan,
                }));
            }
            ActionKind::PayLoan => {
                checks.push(Check::new(Guard::LOAN_COVERED, |s| {
                    Rejection::LoanExceedsBalance {
                        loan: s.loan,
                        balance: s.balance,
                    }
                }));
                checks.push(Check::new(Guard::REPAYMENT_FITS, |_| Rejection::Overflow {
                    action: ActionKind::PayLoan,
                }));
            }
            ActionKind::CloseAccount => {
                checks.push(Check::new(Guard::SETTLED, |s| Rejection::NotSettled {
                    balance: s.balance,
                    loan: s.loan,
                }));
            }
            _ => {}
        }

        checks
    }

    /// Collect every reason `kind` would be rejected from `state`.
    /// An empty result means the action's effect applies.
    pub fn evaluate(&self, state: &AccountState, kind: ActionKind) -> Vec<Rejection> {
        self.checks(kind)
            .iter()
            .filter_map(|check| check.run(state))
            .collect()
    }

    /// Pure shortcut for `evaluate(..).is_empty()`.
    pub fn allows(&self, state: &AccountState, kind: ActionKind) -> bool {
        self.checks(kind).iter().all(|check| check.guard.check(state))
    }
}
