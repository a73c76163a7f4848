mod commands;
mod help;
mod sections;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pflags::ErrorKind;
use tracing_subscriber::{EnvFilter, fmt};

use crate::commands::Outcome;

/// Exit status when help text was printed instead of doing the work.
const EXIT_HELP_REQUESTED: u8 = 100;

#[derive(Parser)]
#[command(name = "pflags")]
#[command(version, about = "Parse and query typed flags from shell scripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Subcommand arguments never reach clap; their sections and flags are
/// handled by pflags itself.
#[derive(Subcommand)]
enum Commands {
    /// Parse args against flag definitions and print the encoded result
    Parse,

    /// Print the value(s) of one flag from an encoded result
    Get,

    /// Print the non-flag arguments from an encoded result
    Unparsed,
}

fn main() -> ExitCode {
    init_tracing();
    let argv: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let (head, args) = split_subcommand(&argv);
    let cli = Cli::parse_from(head);

    let outcome = match cli.command {
        Commands::Parse => commands::parse(args),
        Commands::Get => commands::get(args),
        Commands::Unparsed => commands::unparsed(args),
    };

    match outcome {
        Ok(Outcome::Print(out)) => match write_stdout(&out) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                report(&format!("{}: {e:#}", ErrorKind::Internal));
                ExitCode::from(exit_code(ErrorKind::Internal))
            }
        },
        Ok(Outcome::Help(text)) => {
            let text = format!("{}\n", text.trim_matches('\n'));
            if let Err(e) = write_stdout(&text) {
                report(&format!("{}: {e:#}", ErrorKind::Internal));
            }
            ExitCode::from(EXIT_HELP_REQUESTED)
        }
        Err(err) => {
            tracing::debug!(kind = %err.kind(), "command failed");
            report(&err.to_string());
            ExitCode::from(exit_code(err.kind()))
        }
    }
}

/// Cut `argv` right after the subcommand name.
///
/// clap only sees the head. The tail goes to the subcommand as is, so a
/// leading `--` stays an argument instead of being eaten as clap's escape.
fn split_subcommand(argv: &[String]) -> (&[String], &[String]) {
    let at = argv
        .iter()
        .skip(1)
        .position(|a| !a.starts_with('-'))
        .map_or(argv.len(), |i| i + 2);
    argv.split_at(at)
}

fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Error => 1,
        ErrorKind::InvalidUsage => 2,
        ErrorKind::InvalidValue => 4,
        ErrorKind::NotFound => 40,
        ErrorKind::Internal => 99,
    }
}

fn write_stdout(out: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(out.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")
}

fn report(msg: &str) {
    if io::stderr().is_terminal() {
        eprintln!("\x1b[31m{msg}\x1b[0m");
    } else {
        eprintln!("{msg}");
    }
}

fn init_tracing() {
    // stdout carries tokens and values, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
