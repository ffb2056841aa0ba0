//! Actions understood by the account state machine.
//!
//! Deposit, withdraw and loan each come as a pair: a `Set*` action that
//! stages an amount and a commit action that applies it. Callers may stage
//! as many times as they like before committing.

use super::error::AccountError;
use super::state::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Typed action accepted by [`transition`](super::transition).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    OpenAccount,
    SetDepositAmount(Amount),
    CommitDeposit,
    SetWithdrawAmount(Amount),
    CommitWithdraw,
    SetLoanAmount(Amount),
    RequestLoan,
    PayLoan,
    CloseAccount,
}

/// Payload-free discriminator of an [`Action`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    OpenAccount,
    SetDepositAmount,
    CommitDeposit,
    SetWithdrawAmount,
    CommitWithdraw,
    SetLoanAmount,
    RequestLoan,
    PayLoan,
    CloseAccount,
}

impl ActionKind {
    pub const ALL: [ActionKind; 9] = [
        Self::OpenAccount,
        Self::SetDepositAmount,
        Self::CommitDeposit,
        Self::SetWithdrawAmount,
        Self::CommitWithdraw,
        Self::SetLoanAmount,
        Self::RequestLoan,
        Self::PayLoan,
        Self::CloseAccount,
    ];

    /// Wire name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenAccount => "open_account",
            Self::SetDepositAmount => "set_deposit_amount",
            Self::CommitDeposit => "commit_deposit",
            Self::SetWithdrawAmount => "set_withdraw_amount",
            Self::CommitWithdraw => "commit_withdraw",
            Self::SetLoanAmount => "set_loan_amount",
            Self::RequestLoan => "request_loan",
            Self::PayLoan => "pay_loan",
            Self::CloseAccount => "close_account",
        }
    }

    /// Variant name, also accepted when parsing.
    pub fn camel_name(&self) -> &'static str {
        match self {
            Self::OpenAccount => "OpenAccount",
            Self::SetDepositAmount => "SetDepositAmount",
            Self::CommitDeposit => "CommitDeposit",
            Self::SetWithdrawAmount => "SetWithdrawAmount",
            Self::CommitWithdraw => "CommitWithdraw",
            Self::SetLoanAmount => "SetLoanAmount",
            Self::RequestLoan => "RequestLoan",
            Self::PayLoan => "PayLoan",
            Self::CloseAccount => "CloseAccount",
        }
    }

    /// Whether this kind carries an amount.
    pub fn takes_payload(&self) -> bool {
        matches!(
            self,
            Self::SetDepositAmount | Self::SetWithdrawAmount | Self::SetLoanAmount
        )
    }

    /// Build the typed action. A missing payload on a `Set*` kind stages zero,
    /// and a payload on any other kind is ignored.
    pub fn with_payload(self, payload: Option<Amount>) -> Action {
        let amount = payload.unwrap_or(Amount::ZERO);
        match self {
            Self::OpenAccount => Action::OpenAccount,
            Self::SetDepositAmount => Action::SetDepositAmount(amount),
            Self::CommitDeposit => Action::CommitDeposit,
            Self::SetWithdrawAmount => Action::SetWithdrawAmount(amount),
            Self::CommitWithdraw => Action::CommitWithdraw,
            Self::SetLoanAmount => Action::SetLoanAmount(amount),
            Self::RequestLoan => Action::RequestLoan,
            Self::PayLoan => Action::PayLoan,
            Self::CloseAccount => Action::CloseAccount,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionKind {
    type Err = AccountError;

    /// Accepts the `snake_case` wire name in any letter case, or the exact
    /// `CamelCase` variant name. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed) || kind.camel_name() == trimmed)
            .ok_or_else(|| AccountError::UnknownAction {
                kind: s.to_string(),
            })
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::OpenAccount => ActionKind::OpenAccount,
            Self::SetDepositAmount(_) => ActionKind::SetDepositAmount,
            Self::CommitDeposit => ActionKind::CommitDeposit,
            Self::SetWithdrawAmount(_) => ActionKind::SetWithdrawAmount,
            Self::CommitWithdraw => ActionKind::CommitWithdraw,
            Self::SetLoanAmount(_) => ActionKind::SetLoanAmount,
            Self::RequestLoan => ActionKind::RequestLoan,
            Self::PayLoan => ActionKind::PayLoan,
            Self::CloseAccount => ActionKind::CloseAccount,
        }
    }

    pub fn payload(&self) -> Option<Amount> {
        match self {
            Self::SetDepositAmount(amount)
            | Self::SetWithdrawAmount(amount)
            | Self::SetLoanAmount(amount) => Some(*amount),
            _ => None,
        }
    }
}

/// Untyped action as it arrives from a caller: a `kind` tag plus an
/// optional numeric payload.
///
/// # Example
///
/// ```rust
/// use account_machine::core::{Action, RawAction};
/// use rust_decimal::Decimal;
///
/// let raw: RawAction = serde_json::from_str(r#"{"kind":"set_deposit_amount","payload":200}"#).unwrap();
/// let action = Action::try_from(raw).unwrap();
/// assert_eq!(action, Action::SetDepositAmount(Decimal::from(200)));
///
/// let typo = RawAction::new("deposti");
/// assert!(Action::try_from(typo).is_err());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RawAction {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Amount>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    pub fn with_payload(kind: impl Into<String>, payload: Amount) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }
}

impl TryFrom<RawAction> for Action {
    type Error = AccountError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let kind: ActionKind = raw.kind.parse()?;
        Ok(kind.with_payload(raw.payload))
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        Self {
            kind: action.kind().name().to_string(),
            payload: action.payload(),
        }
    }
}
