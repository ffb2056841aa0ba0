//! Interactive shell around the account state machine.

use account_machine::render::{render, render_controls, Controls};
use account_machine::repl::{parse_line, Command, HELP};
use account_machine::{Outcome, Policy, Session};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyPreset {
    /// Guard every action on an open account and allow one loan at a time
    Strict,
    /// Unguarded behavior
    Reference,
}

impl From<PolicyPreset> for Policy {
    fn from(preset: PolicyPreset) -> Self {
        match preset {
            PolicyPreset::Strict => Policy::strict(),
            PolicyPreset::Reference => Policy::reference(),
        }
    }
}

/// Shell command-line arguments
#[derive(Parser, Debug)]
#[command(name = "account-machine", version, about = "Toy bank account shell")]
struct Args {
    /// Guard policy applied to every action
    #[arg(long, value_enum, default_value = "strict")]
    policy: PolicyPreset,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Do not print the prompt (useful when piping commands in)
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut session = Session::with_policy(args.policy.into());
    debug!(policy = ?session.policy(), "session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if !args.quiet {
        writeln!(stdout, "Toy bank account. Type 'help' for commands.")?;
        write!(stdout, "{}", render(session.state()))?;
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };

        match command {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => writeln!(stdout, "{HELP}")?,
            Command::Reset => {
                session.reset();
                write!(stdout, "{}", render(session.state()))?;
            }
            Command::Controls => {
                let controls = Controls::for_state(session.state());
                writeln!(stdout, "{}", render_controls(&controls))?;
            }
            Command::Show { json: true } => {
                let json = serde_json::to_string_pretty(session.state())?;
                writeln!(stdout, "{json}")?;
            }
            Command::Show { json: false } => write!(stdout, "{}", render(session.state()))?,
            Command::Dispatch(actions) => {
                for raw in actions {
                    let kind = raw.kind.clone();
                    match session.dispatch(raw) {
                        Ok(Outcome::Applied) => {}
                        Ok(Outcome::Rejected(reasons)) => {
                            for reason in reasons {
                                writeln!(stdout, "{kind} refused: {reason}")?;
                            }
                        }
                        Err(err) => {
                            warn!(%err, "dispatch failed");
                            writeln!(stdout, "{err}")?;
                            break;
                        }
                    }
                }
                write!(stdout, "{}", render(session.state()))?;
            }
        }

        if !args.quiet {
            write!(stdout, "> ")?;
        }
        stdout.flush()?;
    }

    Ok(())
}
