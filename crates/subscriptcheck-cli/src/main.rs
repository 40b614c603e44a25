mod cli;
mod dispatch;
mod logging;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use stdout_io::write_stdout_text;
use subscriptcheck_core::InsightsError;

const ROOT_HELP: &str = "SubscriptCheck - spending insights from transaction exports

Usage:
  subscriptcheck <command>

Start here:
  subscriptcheck demo
  subscriptcheck insights --help
";

const TOP_LEVEL_HELP: &str = "SubscriptCheck - spending insights from transaction exports

USAGE: subscriptcheck <command>

Try it:
  subscriptcheck demo                                     Insights over bundled sample subscriptions
  subscriptcheck demo --range all --json                  Same, as JSON

Analyze your transactions (JSON array or CSV, `-` for stdin):
  subscriptcheck insights <path>                          Trend, categories and KPIs together
  subscriptcheck trend <path>                             Spend per calendar month
  subscriptcheck categories <path>                        Spend per category, largest first
  subscriptcheck summary <path>                           Total spend, count and monthly average
  subscriptcheck transactions <path>                      Most recent transactions

Common flags:
  --range 6m|1y|all        Time window (default 6m)
  --as-of YYYY-MM-DD       Reference date (default $SUBSCRIPTCHECK_AS_OF, then today)
  --strict                 Fail on any invalid row instead of skipping it
  --json                   Machine-readable output

Logging goes to stderr; set SUBSCRIPTCHECK_LOG (e.g. `debug`) to see more.
Run `subscriptcheck insights --help` for the accepted source fields,
or `subscriptcheck <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    logging::init_tracing();

    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let body = if is_top_level_help_request(&raw_args) {
                    TOP_LEVEL_HELP.to_string()
                } else {
                    err.to_string()
                };
                if write_stdout_text(&body).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
            ) {
                command_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                InsightsError::invalid_argument_for_command(&clean_message, command_hint);
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::debug!(code = error.code.as_str(), "command failed");
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing Usage line and "For more information" hint
/// so the "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// First argument naming a known subcommand, used for `--help` hints.
fn command_from_args(raw_args: &[String]) -> Option<&'static str> {
    let first = raw_args.iter().skip(1).find(|value| !value.starts_with('-'))?;
    match first.as_str() {
        "insights" => Some("insights"),
        "trend" => Some("trend"),
        "categories" => Some("categories"),
        "summary" => Some("summary"),
        "transactions" => Some("transactions"),
        "demo" => Some("demo"),
        _ => None,
    }
}

fn exit_code_for_error(error: &InsightsError) -> ExitCode {
    if error.code.starts_with("internal_") {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}
