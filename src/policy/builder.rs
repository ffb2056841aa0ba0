//! Builder API for creating policies.

use crate::policy::rules::Policy;

/// Fluent builder for [`Policy`]. Starts from the strict policy.
pub struct PolicyBuilder {
    require_active: bool,
    single_loan: bool,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        let strict = Policy::strict();
        Self {
            require_active: strict.require_active,
            single_loan: strict.single_loan,
        }
    }

    /// Require an open account for every action except opening.
    pub fn require_active(mut self, enabled: bool) -> Self {
        self.require_active = enabled;
        self
    }

    /// Refuse loan requests while a loan is outstanding.
    pub fn single_loan(mut self, enabled: bool) -> Self {
        self.single_loan = enabled;
        self
    }

    pub fn build(self) -> Policy {
        Policy {
            require_active: self.require_active,
            single_loan: self.single_loan,
        }
    }
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
