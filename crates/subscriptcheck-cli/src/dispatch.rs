use chrono::{Local, NaiveDate};
use subscriptcheck_core::commands::demo::DemoRunOptions;
use subscriptcheck_core::commands::summary::SummaryRunOptions;
use subscriptcheck_core::commands::transactions::TransactionsRunOptions;
use subscriptcheck_core::commands::{self, RangeRunOptions};
use subscriptcheck_core::{InsightsResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, RangeArgs, SourceArgs};

pub fn dispatch(cli: &Cli) -> InsightsResult<SuccessEnvelope> {
    dispatch_at(cli, Local::now().date_naive())
}

pub(crate) fn dispatch_at(cli: &Cli, today: NaiveDate) -> InsightsResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Insights { source, window } => {
            commands::insights::run_with_options(range_options(source, window, today))
        }
        Commands::Trend { source, window } => {
            commands::trend::run_with_options(range_options(source, window, today))
        }
        Commands::Categories { source, window } => {
            commands::categories::run_with_options(range_options(source, window, today))
        }
        Commands::Summary { source } => commands::summary::run_with_options(SummaryRunOptions {
            path: Some(source.path.clone()),
            policy: source.policy(),
            stdin_override: None,
        }),
        Commands::Transactions { source, limit } => {
            commands::transactions::run_with_options(TransactionsRunOptions {
                path: Some(source.path.clone()),
                limit: Some(*limit),
                policy: source.policy(),
                stdin_override: None,
            })
        }
        Commands::Demo { window, .. } => commands::demo::run_with_options(DemoRunOptions {
            range: window.range,
            as_of: window.as_of.as_ref().map(|value| value.as_str().to_string()),
            today,
        }),
    }
}

fn range_options(source: &SourceArgs, window: &RangeArgs, today: NaiveDate) -> RangeRunOptions {
    RangeRunOptions {
        path: Some(source.path.clone()),
        range: window.range,
        as_of: window.as_of.as_ref().map(|value| value.as_str().to_string()),
        today,
        policy: source.policy(),
        stdin_override: None,
    }
}
