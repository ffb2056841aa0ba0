//! Session that owns the current account state.
//!
//! The core never holds state between calls. A [`Session`] is the caller-side
//! owner: it keeps the latest value, feeds it through the transition function
//! and stores what comes back.

use crate::core::{transition_with, AccountError, AccountState, Action, RawAction};
use crate::policy::{Policy, Rejection};
use tracing::{debug, info};

/// Result of applying one action in a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The action's effect was applied.
    Applied,

    /// The action was a no-op, with every reason it was refused.
    Rejected(Vec<Rejection>),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Owner of the single account state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: AccountState,
    policy: Policy,
}

impl Session {
    /// Create a session in the initial state with the strict policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: Policy) -> Self {
        Self {
            state: AccountState::initial(),
            policy,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &AccountState {
        &self.state
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Apply a typed action and keep the resulting state.
    pub fn apply(&mut self, action: Action) -> Outcome {
        let kind = action.kind();
        let rejections = self.policy.evaluate(&self.state, kind);

        let current = std::mem::take(&mut self.state);
        self.state = transition_with(&self.policy, current, action);

        if rejections.is_empty() {
            debug!(
                action = %kind,
                balance = %self.state.balance,
                loan = %self.state.loan,
                status = self.state.status(),
                "action applied"
            );
            Outcome::Applied
        } else {
            let reasons = rejections
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            info!(action = %kind, %reasons, "action rejected");
            Outcome::Rejected(rejections)
        }
    }

    /// Parse and apply a raw action.
    pub fn dispatch(&mut self, raw: RawAction) -> Result<Outcome, AccountError> {
        let action = Action::try_from(raw)?;
        Ok(self.apply(action))
    }

    /// Apply a sequence of actions, stopping at the first unknown kind.
    pub fn dispatch_all<I>(&mut self, actions: I) -> Result<Vec<Outcome>, AccountError>
    where
        I: IntoIterator<Item = RawAction>,
    {
        actions.into_iter().map(|raw| self.dispatch(raw)).collect()
    }

    /// Drop the current state and start over from the initial one.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.state = AccountState::initial();
    }
}
