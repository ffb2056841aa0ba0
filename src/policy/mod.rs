//! Guard policy for account transitions.
//!
//! A [`Policy`] maps each action kind to the guards that must hold before
//! its effect applies. Evaluation collects every failing guard rather than
//! stopping at the first one, so callers can show the full reason an action
//! was turned into a no-op.
//!
//! # Example
//!
//! ```rust
//! use account_machine::core::{AccountState, ActionKind};
//! use account_machine::policy::{Policy, Rejection};
//!
//! let policy = Policy::builder().single_loan(false).build();
//!
//! let rejections = policy.evaluate(&AccountState::initial(), ActionKind::CommitDeposit);
//! assert_eq!(rejections, vec![Rejection::Inactive]);
//! ```

pub mod builder;
pub mod rejection;
pub mod rules;

pub use builder::PolicyBuilder;
pub use rejection::Rejection;
pub use rules::{Check, Policy};
