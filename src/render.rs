//! Presentation helpers for interactive front-ends.
//!
//! Nothing here is required by the state machine. These are the affordances
//! a front-end layers on top: turning raw text into payloads, deciding which
//! controls are usable and printing the state.

use crate::core::{AccountState, Amount};
use serde::Serialize;
use std::str::FromStr;

/// Convert raw user input to an amount. Empty or non-numeric input is zero.
///
/// # Example
///
/// ```rust
/// use account_machine::render::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount(" 250 "), Decimal::from(250));
/// assert_eq!(parse_amount("abc"), Decimal::ZERO);
/// ```
pub fn parse_amount(input: &str) -> Amount {
    Amount::from_str(input.trim()).unwrap_or(Amount::ZERO)
}

/// Which controls a front-end should enable for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub open: bool,
    pub deposit_input: bool,
    pub deposit: bool,
    pub withdraw_input: bool,
    pub withdraw: bool,
    pub loan_input: bool,
    pub loan: bool,
    pub pay_loan: bool,
    pub close: bool,
}

impl Controls {
    pub fn for_state(state: &AccountState) -> Self {
        let active = state.is_active;
        let can_borrow = active && !state.has_loan();

        Self {
            open: !active,
            deposit_input: active,
            deposit: active && state.pending_deposit > Amount::ZERO,
            withdraw_input: active,
            withdraw: active
                && state.pending_withdraw > Amount::ZERO
                && state.balance >= state.pending_withdraw,
            loan_input: can_borrow,
            loan: can_borrow,
            pay_loan: active,
            close: active,
        }
    }
}

/// Render the state as a short block of text.
pub fn render(state: &AccountState) -> String {
    format!(
        "Account: {}\nBalance: {}\nLoan:    {}\nPending: deposit {} | withdraw {} | loan {}\n",
        state.status(),
        state.balance,
        state.loan,
        state.pending_deposit,
        state.pending_withdraw,
        state.pending_loan
    )
}

/// Render the enabled controls as a single line.
pub fn render_controls(controls: &Controls) -> String {
    let labels = [
        (controls.open, "open"),
        (controls.deposit, "deposit"),
        (controls.withdraw, "withdraw"),
        (controls.loan, "loan"),
        (controls.pay_loan, "pay"),
        (controls.close, "close"),
    ];
    let enabled: Vec<&str> = labels
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, label)| *label)
        .collect();

    if enabled.is_empty() {
        "Available: none".to_string()
    } else {
        format!("Available: {}", enabled.join(", "))
    }
}
