//! Core account state machine.
//!
//! This module contains the pure functional core:
//! - The account state value and its derived predicates
//! - The action set, typed and raw
//! - Guard predicates
//! - The transition function
//!
//! Nothing in this module performs I/O or logging. State goes in by value
//! and the next state comes back out.

mod action;
mod error;
mod guard;
mod state;
mod transition;

pub use action::{Action, ActionKind, RawAction};
pub use error::AccountError;
pub use guard::Guard;
pub use state::{AccountState, Amount, OPENING_BALANCE};
pub use transition::{dispatch, transition, transition_with};
