//! The account transition function.

use super::action::{Action, RawAction};
use super::error::AccountError;
use super::state::{AccountState, Amount};
use crate::policy::Policy;

/// Apply `action` to `state` under the default (strict) policy.
///
/// # Example
///
/// ```rust
/// use account_machine::core::{transition, AccountState, Action};
/// use rust_decimal::Decimal;
///
/// let state = transition(AccountState::initial(), Action::OpenAccount);
/// let state = transition(state, Action::SetDepositAmount(Decimal::from(200)));
/// let state = transition(state, Action::CommitDeposit);
/// assert_eq!(state.balance, Decimal::from(700));
/// ```
pub fn transition(state: AccountState, action: Action) -> AccountState {
    transition_with(&Policy::default(), state, action)
}

/// Apply `action` to `state` under `policy`.
///
/// When any guard of the policy fails for the action, the input state is
/// returned unchanged.
pub fn transition_with(policy: &Policy, state: AccountState, action: Action) -> AccountState {
    if !policy.allows(&state, action.kind()) {
        return state;
    }
    apply(state, action)
}

/// Parse a raw action and apply it under `policy`.
///
/// Fails only when the action kind is not recognized.
pub fn dispatch(
    policy: &Policy,
    state: AccountState,
    raw: RawAction,
) -> Result<AccountState, AccountError> {
    let action = Action::try_from(raw)?;
    Ok(transition_with(policy, state, action))
}

// Effect of an action whose guards have passed. Arithmetic that would
// overflow leaves the state unchanged.
fn apply(state: AccountState, action: Action) -> AccountState {
    match action {
        Action::OpenAccount => state.opened(),

        Action::SetDepositAmount(amount) => AccountState {
            pending_deposit: amount,
            ..state
        },

        Action::CommitDeposit => match state.balance.checked_add(state.pending_deposit) {
            Some(balance) => AccountState { balance, ..state },
            None => state,
        },

        Action::SetWithdrawAmount(amount) => AccountState {
            pending_withdraw: amount,
            ..state
        },

        Action::CommitWithdraw => match state.balance.checked_sub(state.pending_withdraw) {
            Some(balance) => AccountState { balance, ..state },
            None => state,
        },

        Action::SetLoanAmount(amount) => AccountState {
            pending_loan: amount,
            ..state
        },

        Action::RequestLoan => match state.balance.checked_add(state.pending_loan) {
            Some(balance) => AccountState {
                loan: state.pending_loan,
                balance,
                ..state
            },
            None => state,
        },

        Action::PayLoan => match state.balance.checked_sub(state.loan) {
            Some(balance) => AccountState {
                balance,
                loan: Amount::ZERO,
                ..state
            },
            None => state,
        },

        Action::CloseAccount => AccountState::initial(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(n: i64) -> Amount {
        Amount::from(n)
    }

    fn opened() -> AccountState {
        transition(AccountState::initial(), Action::OpenAccount)
    }

    fn run(policy: &Policy, state: AccountState, actions: &[Action]) -> AccountState {
        actions
            .iter()
            .fold(state, |s, a| transition_with(policy, s, *a))
    }

    #[test]
    fn open_sets_opening_balance() {
        let state = opened();
        assert_eq!(
            state,
            AccountState {
                balance: amount(500),
                is_active: true,
                ..AccountState::initial()
            }
        );
    }

    #[test]
    fn reopen_resets_balance_to_opening_amount() {
        let state = run(
            &Policy::strict(),
            opened(),
            &[Action::SetDepositAmount(amount(250)), Action::CommitDeposit],
        );
        assert_eq!(state.balance, amount(750));

        let reopened = transition(state, Action::OpenAccount);
        assert_eq!(reopened.balance, amount(500));
        assert_eq!(reopened.pending_deposit, amount(250));
    }

    #[test]
    fn deposit_is_two_phase() {
        let staged = transition(opened(), Action::SetDepositAmount(amount(200)));
        assert_eq!(staged.balance, amount(500));
        assert_eq!(staged.pending_deposit, amount(200));

        let committed = transition(staged, Action::CommitDeposit);
        assert_eq!(committed.balance, amount(700));
        assert_eq!(committed.pending_deposit, amount(200));
    }

    #[test]
    fn pending_amount_can_change_before_commit() {
        let state = run(
            &Policy::strict(),
            opened(),
            &[
                Action::SetDepositAmount(amount(1)),
                Action::SetDepositAmount(amount(12)),
                Action::SetDepositAmount(amount(123)),
                Action::CommitDeposit,
            ],
        );
        assert_eq!(state.balance, amount(623));
    }

    #[test]
    fn commit_deposit_repeats_staged_amount() {
        let state = run(
            &Policy::strict(),
            opened(),
            &[
                Action::SetDepositAmount(amount(100)),
                Action::CommitDeposit,
                Action::CommitDeposit,
            ],
        );
        assert_eq!(state.balance, amount(700));
    }

    #[test]
    fn withdraw_reduces_positive_balance() {
        let state = run(
            &Policy::strict(),
            opened(),
            &[Action::SetWithdrawAmount(amount(120)), Action::CommitWithdraw],
        );
        assert_eq!(state.balance, amount(380));
    }

    #[test]
    fn withdraw_may_overdraw_a_positive_balance() {
        let state = run(
            &Policy::strict(),
            opened(),
            &[Action::SetWithdrawAmount(amount(800)), Action::CommitWithdraw],
        );
        assert_eq!(state.balance, amount(-300));
    }

    #[test]
    fn withdraw_from_zero_balance_is_ignored() {
        let empty = AccountState {
            is_active: true,
            ..AccountState::initial()
        };
        let state = run(
            &Policy::strict(),
            empty,
            &[Action::SetWithdrawAmount(amount(50)), Action::CommitWithdraw],
        );
        assert_eq!(state.balance, amount(0));
        assert_eq!(state.pending_withdraw, amount(50));
    }

    #[test]
    fn loan_then_pay() {
        let borrowed = run(
            &Policy::strict(),
            opened(),
            &[Action::SetLoanAmount(amount(1000)), Action::RequestLoan],
        );
        assert_eq!(borrowed.loan, amount(1000));
        assert_eq!(borrowed.balance, amount(1500));

        let repaid = transition(borrowed, Action::PayLoan);
        assert_eq!(repaid.loan, amount(0));
        assert_eq!(repaid.balance, amount(500));
    }

    #[test]
    fn pay_loan_larger_than_balance_is_ignored() {
        let short = AccountState {
            balance: amount(500),
            loan: amount(1000),
            is_active: true,
            ..AccountState::initial()
        };
        assert_eq!(transition(short.clone(), Action::PayLoan), short);
    }

    #[test]
    fn overflowing_deposit_is_ignored() {
        let staged = transition(opened(), Action::SetDepositAmount(Amount::MAX));
        let committed = transition(staged.clone(), Action::CommitDeposit);
        assert_eq!(committed, staged);
        assert_eq!(committed.balance, amount(500));
    }

    #[test]
    fn overflowing_loan_is_ignored() {
        let staged = transition(opened(), Action::SetLoanAmount(Amount::MAX));
        let requested = transition(staged.clone(), Action::RequestLoan);
        assert_eq!(requested, staged);
        assert!(!requested.has_loan());
    }

    #[test]
    fn overflowing_withdraw_is_ignored() {
        let staged = transition(opened(), Action::SetWithdrawAmount(Amount::MIN));
        assert_eq!(transition(staged.clone(), Action::CommitWithdraw), staged);
    }

    #[test]
    fn apply_never_panics_on_overflow() {
        // Bypasses the policy to exercise the checked arithmetic directly.
        let extreme = AccountState {
            balance: Amount::MAX,
            loan: amount(1),
            pending_deposit: Amount::MAX,
            pending_withdraw: Amount::MIN,
            pending_loan: Amount::MAX,
            is_active: true,
        };
        for action in [Action::CommitDeposit, Action::CommitWithdraw, Action::RequestLoan] {
            assert_eq!(apply(extreme.clone(), action), extreme);
        }

        let sunk = AccountState {
            balance: Amount::MIN,
            ..extreme
        };
        assert_eq!(apply(sunk.clone(), Action::PayLoan), sunk);
    }

    #[test]
    fn second_loan_refused_by_strict_policy() {
        let actions = [
            Action::SetLoanAmount(amount(1000)),
            Action::RequestLoan,
            Action::SetLoanAmount(amount(300)),
            Action::RequestLoan,
        ];

        let strict = run(&Policy::strict(), opened(), &actions);
        assert_eq!(strict.loan, amount(1000));
        assert_eq!(strict.balance, amount(1500));

        // Unguarded: the second loan replaces the first but both are credited.
        let reference = run(&Policy::reference(), opened(), &actions);
        assert_eq!(reference.loan, amount(300));
        assert_eq!(reference.balance, amount(1800));
    }

    #[test]
    fn close_settled_account_resets_everything() {
        let state = run(
            &Policy::strict(),
            opened(),
            &[
                Action::SetWithdrawAmount(amount(500)),
                Action::CommitWithdraw,
                Action::SetDepositAmount(amount(9)),
                Action::CloseAccount,
            ],
        );
        assert_eq!(state, AccountState::initial());
    }

    #[test]
    fn close_with_balance_or_loan_is_ignored() {
        let funded = run(
            &Policy::strict(),
            opened(),
            &[Action::SetDepositAmount(amount(5))],
        );
        assert_eq!(transition(funded.clone(), Action::CloseAccount), funded);

        let indebted = AccountState {
            loan: amount(10),
            is_active: true,
            ..AccountState::initial()
        };
        assert_eq!(
            transition(indebted.clone(), Action::CloseAccount),
            indebted
        );
    }

    #[test]
    fn strict_policy_ignores_actions_on_closed_account() {
        let initial = AccountState::initial();
        let state = run(
            &Policy::strict(),
            initial.clone(),
            &[
                Action::SetDepositAmount(amount(200)),
                Action::CommitDeposit,
                Action::SetLoanAmount(amount(50)),
                Action::RequestLoan,
            ],
        );
        assert_eq!(state, initial);
    }

    #[test]
    fn reference_policy_applies_actions_on_closed_account() {
        let state = run(
            &Policy::reference(),
            AccountState::initial(),
            &[Action::SetDepositAmount(amount(200)), Action::CommitDeposit],
        );
        assert!(!state.is_active);
        assert_eq!(state.balance, amount(200));
    }

    #[test]
    fn rejected_transition_is_idempotent() {
        let short = AccountState {
            balance: amount(500),
            loan: amount(1000),
            is_active: true,
            ..AccountState::initial()
        };
        let once = transition(short.clone(), Action::PayLoan);
        let twice = transition(once.clone(), Action::PayLoan);
        assert_eq!(once, twice);
        assert_eq!(once, short);
    }

    #[test]
    fn dispatch_rejects_unknown_kind() {
        let result = dispatch(
            &Policy::strict(),
            opened(),
            RawAction::new("withdrawMoney"),
        );
        assert_eq!(
            result,
            Err(AccountError::UnknownAction {
                kind: "withdrawMoney".to_string()
            })
        );
    }

    #[test]
    fn dispatch_applies_known_kind() {
        let state = dispatch(
            &Policy::strict(),
            AccountState::initial(),
            RawAction::new("open_account"),
        )
        .unwrap();
        assert!(state.is_active);

        let state = dispatch(
            &Policy::strict(),
            state,
            RawAction::with_payload("set_deposit_amount", amount(40)),
        )
        .unwrap();
        assert_eq!(state.pending_deposit, amount(40));
    }
}
