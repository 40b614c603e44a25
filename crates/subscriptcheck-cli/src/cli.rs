use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use subscriptcheck_core::insights::{BatchPolicy, TimeRange};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

pub fn parse_range(value: &str) -> Result<TimeRange, String> {
    TimeRange::parse(value).ok_or_else(|| "range must be one of: 6m, 1y, all".to_string())
}

pub fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err("limit must be a positive whole number".to_string()),
    }
}

/// Extended help shown after `subscriptcheck <command> --help` for source-reading commands.
pub const SOURCE_AFTER_HELP: &str = "\
Transaction source:
  <path> is a local JSON or CSV file. Use `-` to read stdin.
  Example: cat rows.json | subscriptcheck insights - --range 1y

  JSON example (one top-level array):
  [
    {
      \"id\": \"txn_001\",
      \"name\": \"Netflix\",
      \"amount\": 15.49,
      \"date\": \"2024-01-15\",
      \"category\": \"Entertainment\"
    }
  ]

  CSV example (header + rows):
  id,name,amount,date,category
  txn_001,Netflix,15.49,2024-01-15,Entertainment

Field rules:
  amount (required):
    Non-negative spend, a number or numeric string, at most 2 decimal places.
    Rows with more decimal places or an amount above 10000000000000 are invalid.

  date (required):
    `YYYY-MM-DD`. RFC 3339 timestamps are accepted; their calendar date is used.

  id, name (optional):
    Rows without an id are keyed as `row-<n>`.

  category (optional):
    Missing or blank categories are grouped under `Uncategorized`.

Invalid rows are skipped and listed in the output. Pass --strict to fail instead.

Ranges:
  6m   from the first day of the month five months before --as-of
  1y   from the first day of the month eleven months before --as-of
  all  every transaction
  --as-of defaults to $SUBSCRIPTCHECK_AS_OF, then today.
";

#[derive(Debug, Parser)]
#[command(
    name = "subscriptcheck",
    version,
    about = "spending insights from transaction exports",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Path to a JSON or CSV transaction file (use `-` for stdin)
    pub path: String,
    /// Fail when any row is invalid instead of skipping it
    #[arg(long)]
    pub strict: bool,
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

impl SourceArgs {
    pub fn policy(&self) -> BatchPolicy {
        if self.strict {
            BatchPolicy::FailFast
        } else {
            BatchPolicy::SkipInvalid
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct RangeArgs {
    /// Time window: 6m, 1y or all
    #[arg(long, default_value = "6m", value_parser = parse_range)]
    pub range: TimeRange,
    /// Reference date the window is measured back from (YYYY-MM-DD)
    #[arg(long = "as-of", value_parser = parse_iso_date)]
    pub as_of: Option<IsoDate>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show monthly trend, category breakdown and KPIs together
    #[command(after_long_help = SOURCE_AFTER_HELP)]
    Insights {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        window: RangeArgs,
    },
    /// Show spend per calendar month, oldest first
    #[command(after_long_help = SOURCE_AFTER_HELP)]
    Trend {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        window: RangeArgs,
    },
    /// Show spend per category, largest first
    #[command(after_long_help = SOURCE_AFTER_HELP)]
    Categories {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        window: RangeArgs,
    },
    /// Show total spend, transaction count and monthly average
    #[command(after_long_help = SOURCE_AFTER_HELP)]
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List the most recent transactions
    #[command(after_long_help = SOURCE_AFTER_HELP)]
    Transactions {
        #[command(flatten)]
        source: SourceArgs,
        /// Maximum number of rows to list
        #[arg(long, default_value_t = 20, value_parser = parse_limit)]
        limit: usize,
    },
    /// Preview insights over bundled sample subscriptions
    Demo {
        #[command(flatten)]
        window: RangeArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
