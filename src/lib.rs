//! Account Machine: a pure functional state machine for a toy bank account
//!
//! The account lives in a single [`AccountState`] value. Every change goes
//! through one pure function, [`transition`], which takes the current value
//! and an [`Action`] and returns the next value. Actions whose preconditions
//! fail return the state unchanged; only an unrecognized action kind is an
//! error.
//!
//! # Core Concepts
//!
//! - **State**: immutable account snapshot (`core::AccountState`)
//! - **Actions**: set-then-commit pairs for deposit, withdraw and loan
//! - **Policy**: which guards the machine enforces (`policy::Policy`)
//! - **Session**: caller-side owner of the current state (`session::Session`)
//!
//! # Example
//!
//! ```rust
//! use account_machine::{transition, AccountState, Action};
//! use rust_decimal::Decimal;
//!
//! let state = AccountState::initial();
//! let state = transition(state, Action::OpenAccount);
//! let state = transition(state, Action::SetLoanAmount(Decimal::from(1000)));
//! let state = transition(state, Action::RequestLoan);
//! assert_eq!(state.balance, Decimal::from(1500));
//!
//! let state = transition(state, Action::PayLoan);
//! assert_eq!(state.balance, Decimal::from(500));
//! assert!(!state.has_loan());
//! ```

pub mod core;
pub mod policy;
pub mod render;
pub mod repl;
pub mod session;

// Re-export commonly used types
pub use self::core::{
    dispatch, transition, transition_with, AccountError, AccountState, Action, ActionKind,
    Amount, RawAction,
};
pub use policy::{Policy, Rejection};
pub use session::{Outcome, Session};
