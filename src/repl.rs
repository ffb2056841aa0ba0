//! Line-oriented command parsing for the interactive shell.
//!
//! Each line becomes one [`Command`]. Account verbs expand into raw actions
//! so that unknown kinds still reach the state machine and fail there.

use crate::core::{ActionKind, RawAction};
use crate::render::parse_amount;
use thiserror::Error;
use tracing::warn;

pub const HELP: &str = "\
Commands:
  open                 open the account (balance 500)
  deposit [amount]     stage amount (if given) and deposit it
  withdraw [amount]    stage amount (if given) and withdraw it
  loan [amount]        stage amount (if given) and request the loan
  pay                  pay back the loan
  close                close the account
  <kind> [amount]      dispatch a raw action, e.g. set_deposit_amount 25
  {\"kind\": ...}        dispatch a JSON action
  show [--json]        print the account
  controls             print the available controls
  reset                start over
  help                 print this help
  quit                 leave";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON action: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Dispatch(Vec<RawAction>),
    Show { json: bool },
    Controls,
    Reset,
    Help,
    Quit,
    Empty,
}

pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }
    if line.starts_with('{') {
        let raw: RawAction = serde_json::from_str(line).map_err(|err| {
            warn!(%line, error = %err, "invalid JSON action");
            ParseError::InvalidJson(err)
        })?;
        return Ok(Command::Dispatch(vec![raw]));
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let arg = words.next();

    let command = match verb.to_ascii_lowercase().as_str() {
        "open" => single(ActionKind::OpenAccount),
        "deposit" => staged(ActionKind::SetDepositAmount, ActionKind::CommitDeposit, arg),
        "withdraw" => staged(ActionKind::SetWithdrawAmount, ActionKind::CommitWithdraw, arg),
        "loan" => staged(ActionKind::SetLoanAmount, ActionKind::RequestLoan, arg),
        "pay" => single(ActionKind::PayLoan),
        "close" => single(ActionKind::CloseAccount),
        "show" => Command::Show {
            json: arg == Some("--json"),
        },
        "controls" => Command::Controls,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            let raw = match arg {
                Some(amount) => RawAction::with_payload(verb, parse_amount(amount)),
                None => RawAction::new(verb),
            };
            Command::Dispatch(vec![raw])
        }
    };
    Ok(command)
}

fn single(kind: ActionKind) -> Command {
    Command::Dispatch(vec![RawAction::new(kind.name())])
}

// `verb amount` stages then commits; a bare `verb` commits what is staged.
fn staged(set: ActionKind, commit: ActionKind, arg: Option<&str>) -> Command {
    let mut actions = Vec::with_capacity(2);
    if let Some(amount) = arg {
        actions.push(RawAction::with_payload(set.name(), parse_amount(amount)));
    }
    actions.push(RawAction::new(commit.name()));
    Command::Dispatch(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Amount;

    #[test]
    fn deposit_with_amount_stages_then_commits() {
        assert_eq!(
            parse_line("deposit 200").unwrap(),
            Command::Dispatch(vec![
                RawAction::with_payload("set_deposit_amount", Amount::from(200)),
                RawAction::new("commit_deposit"),
            ])
        );
    }

    #[test]
    fn bare_verb_commits_staged_amount() {
        assert_eq!(
            parse_line("loan").unwrap(),
            Command::Dispatch(vec![RawAction::new("request_loan")])
        );
    }

    #[test]
    fn non_numeric_amount_stages_zero() {
        assert_eq!(
            parse_line("withdraw lots").unwrap(),
            Command::Dispatch(vec![
                RawAction::with_payload("set_withdraw_amount", Amount::ZERO),
                RawAction::new("commit_withdraw"),
            ])
        );
    }

    #[test]
    fn unknown_verb_passes_through_as_raw_kind() {
        assert_eq!(
            parse_line("set_loan_amount 75").unwrap(),
            Command::Dispatch(vec![RawAction::with_payload(
                "set_loan_amount",
                Amount::from(75)
            )])
        );
        assert_eq!(
            parse_line("frobnicate").unwrap(),
            Command::Dispatch(vec![RawAction::new("frobnicate")])
        );
    }

    #[test]
    fn json_action() {
        assert_eq!(
            parse_line(r#"{"kind": "pay_loan"}"#).unwrap(),
            Command::Dispatch(vec![RawAction::new("pay_loan")])
        );
        assert!(parse_line("{not json").is_err());
    }

    #[test]
    fn invalid_json_names_the_problem() {
        let err = parse_line(r#"{"payload": 5}"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON action:"));
    }

    #[test]
    fn shell_commands() {
        assert_eq!(parse_line("   ").unwrap(), Command::Empty);
        assert_eq!(parse_line("show").unwrap(), Command::Show { json: false });
        assert_eq!(
            parse_line("show --json").unwrap(),
            Command::Show { json: true }
        );
        assert_eq!(parse_line("controls").unwrap(), Command::Controls);
        assert_eq!(parse_line("RESET").unwrap(), Command::Reset);
        assert_eq!(parse_line("?").unwrap(), Command::Help);
        assert_eq!(parse_line("exit").unwrap(), Command::Quit);
    }
}
