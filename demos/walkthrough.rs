//! Account Walkthrough
//!
//! This example drives one account through its whole lifecycle and shows
//! how the two policies differ.
//!
//! Key concepts:
//! - Set-then-commit actions (stage an amount, then apply it)
//! - Rejected actions leave the state unchanged
//! - Strict and reference policies
//!
//! Run with: cargo run --example walkthrough

use account_machine::core::{transition_with, AccountState, Action, Amount};
use account_machine::policy::Policy;
use account_machine::render::render;
use account_machine::session::{Outcome, Session};

fn report(session: &mut Session, label: &str, action: Action) {
    match session.apply(action) {
        Outcome::Applied => println!("  {label}: ok"),
        Outcome::Rejected(reasons) => {
            for reason in reasons {
                println!("  {label}: refused ({reason})");
            }
        }
    }
}

fn main() {
    println!("=== Account Walkthrough ===\n");

    println!("Scenario 1: Lifecycle under the strict policy");
    let mut session = Session::new();
    report(&mut session, "deposit before opening", Action::CommitDeposit);
    report(&mut session, "open", Action::OpenAccount);
    report(&mut session, "stage deposit 200", Action::SetDepositAmount(Amount::from(200)));
    report(&mut session, "commit deposit", Action::CommitDeposit);
    report(&mut session, "stage loan 1000", Action::SetLoanAmount(Amount::from(1000)));
    report(&mut session, "request loan", Action::RequestLoan);
    report(&mut session, "request loan again", Action::RequestLoan);
    report(&mut session, "close with loan", Action::CloseAccount);
    report(&mut session, "pay loan", Action::PayLoan);
    report(&mut session, "stage withdraw 700", Action::SetWithdrawAmount(Amount::from(700)));
    report(&mut session, "commit withdraw", Action::CommitWithdraw);
    report(&mut session, "close", Action::CloseAccount);
    println!("{}", render(session.state()));

    println!("Scenario 2: Same deposit under the reference policy");
    let reference = Policy::reference();
    let state = [Action::SetDepositAmount(Amount::from(50)), Action::CommitDeposit]
        .into_iter()
        .fold(AccountState::initial(), |s, a| {
            transition_with(&reference, s, a)
        });
    println!("  closed account now holds {}", state.balance);
    println!("{}", render(&state));

    println!("Key Takeaways:");
    println!("- Staged amounts only move money when committed");
    println!("- Invalid actions are no-ops, never errors");
    println!("- The strict policy keeps closed accounts empty");

    println!("\n=== Example Complete ===");
}
