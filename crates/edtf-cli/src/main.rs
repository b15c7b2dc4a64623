//! EDTF command line tool.
//!
//! `edtf parse` prints a parsed expression as JSON, `edtf level` prints its
//! minimal conformance level, and `edtf relate` evaluates one of the thirteen
//! Allen relations between two expressions.

use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use edtf_core::{parse_with_max_level, to_member, Member, ParseError, Truth};

#[derive(Parser, Debug)]
#[command(name = "edtf")]
#[command(version, about = "Parse and compare Extended Date/Time Format expressions")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an EDTF expression and print it as JSON
    Parse {
        /// The expression, e.g. "1985-04-12", "1984?", "[1667,1668]"
        expression: String,
        /// Highest conformance level to accept (0, 1, or 2)
        #[arg(long, default_value = "2")]
        max_level: u8,
        /// Print compact JSON on one line
        #[arg(long)]
        compact: bool,
    },
    /// Print the minimal conformance level of an expression
    Level {
        /// The expression
        expression: String,
    },
    /// Evaluate an Allen relation between two expressions
    ///
    /// Prints YES, NO, MAYBE, or UNKNOWN.
    Relate {
        /// One of: before, after, meets, met-by, overlaps, overlapped-by,
        /// starts, started-by, during, contains, finishes, finished-by, equals
        relation: String,
        /// Left-hand expression
        a: String,
        /// Right-hand expression
        b: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Parse {
            expression,
            max_level,
            compact,
        } => match parse_with_max_level(&expression, max_level) {
            Ok(value) => {
                let json = if compact {
                    serde_json::to_string(&value)?
                } else {
                    serde_json::to_string_pretty(&value)?
                };
                println!("{json}");
                Ok(ExitCode::SUCCESS)
            }
            Err(errors) => {
                report(&errors)?;
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Level { expression } => match parse_with_max_level(&expression, 2) {
            Ok(value) => {
                println!("{}", value.level());
                Ok(ExitCode::SUCCESS)
            }
            Err(errors) => {
                report(&errors)?;
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Relate { relation, a, b } => {
            let relation = lookup_relation(&relation)?;
            let (a, b) = (member(&a)?, member(&b)?);
            let truth = relation(&a, &b);
            println!(
                "{}",
                match truth {
                    Truth::Yes => "YES",
                    Truth::No => "NO",
                    Truth::Maybe => "MAYBE",
                    Truth::Unknown => "UNKNOWN",
                }
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn member(expression: &str) -> Result<Member> {
    match parse_with_max_level(expression, 2) {
        Ok(value) => Ok(to_member(&value)),
        Err(errors) => {
            let first = &errors[0];
            bail!("cannot parse '{expression}': {first}")
        }
    }
}

fn lookup_relation(name: &str) -> Result<fn(&Member, &Member) -> Truth> {
    Ok(match name {
        "before" => edtf_core::before,
        "after" => edtf_core::after,
        "meets" => edtf_core::meets,
        "met-by" => edtf_core::met_by,
        "overlaps" => edtf_core::overlaps,
        "overlapped-by" => edtf_core::overlapped_by,
        "starts" => edtf_core::starts,
        "started-by" => edtf_core::started_by,
        "during" => edtf_core::during,
        "contains" => edtf_core::contains,
        "finishes" => edtf_core::finishes,
        "finished-by" => edtf_core::finished_by,
        "equals" => edtf_core::equals,
        other => bail!(
            "unknown relation '{other}' (expected before, after, meets, met-by, overlaps, \
             overlapped-by, starts, started-by, during, contains, finishes, finished-by, \
             or equals)"
        ),
    })
}

fn report(errors: &[ParseError]) -> Result<()> {
    eprintln!("{}", serde_json::to_string_pretty(errors)?);
    Ok(())
}
