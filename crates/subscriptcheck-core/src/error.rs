use serde_json::{Value, json};
use thiserror::Error;

use crate::contracts::types::{NormalizeIssue, SourceSummary};

pub(crate) const SOURCE_HELP_COMMAND: &str = "subscriptcheck insights --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct InsightsError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl InsightsError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `subscriptcheck {cmd} --help` for usage."),
            None => "Run `subscriptcheck --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_input(message: &str) -> Self {
        Self::new(
            "invalid_input",
            message,
            vec![
                "Provide a JSON array of transaction objects or a CSV file with a header row."
                    .to_string(),
                format!("Run `{SOURCE_HELP_COMMAND}` to review the accepted fields."),
            ],
        )
    }

    pub fn invalid_input_format(message: &str, received_format: &str) -> Self {
        Self::new(
            "invalid_input_format",
            message,
            vec![
                "Provide a supported source format (JSON array or CSV).".to_string(),
                format!("Run `{SOURCE_HELP_COMMAND}` to confirm field requirements."),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn source_schema_mismatch(
        required_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        Self::new(
            "source_schema_mismatch",
            "CSV headers do not include every required transaction field.",
            vec![
                "Include the `amount` and `date` headers; `id`, `name` and `category` are optional."
                    .to_string(),
                format!("Run `{SOURCE_HELP_COMMAND}` to review the accepted fields."),
            ],
        )
        .with_data(json!({
            "required_headers": required_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn validation_failed(summary: SourceSummary, issues: Vec<NormalizeIssue>) -> Self {
        let issue_count = summary.rows_invalid;
        Self::new(
            "validation_failed",
            &format!(
                "Source failed validation: {issue_count} rows need fixes. Nothing was aggregated."
            ),
            vec![
                "Fix the listed issues in your source file.".to_string(),
                "Or rerun without --strict to skip invalid rows.".to_string(),
            ],
        )
        .with_data(json!({
            "summary": summary,
            "issues": issues,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

/// Rejection of a single raw record by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be present and non-empty.")]
    MissingField { field: &'static str },
    #[error("amount must be a finite number; got \"{received}\"")]
    InvalidAmount { received: String },
    #[error("amount must not be negative; got \"{received}\"")]
    NegativeAmount { received: String },
    #[error("amount must not exceed 10000000000000; got \"{received}\"")]
    AmountTooLarge { received: String },
    #[error("amount must use at most 2 decimal places; got {scale} decimal places.")]
    AmountScale { received: String, scale: u32 },
    #[error("date must be an ISO-8601 calendar date; got \"{received}\"")]
    InvalidDate { received: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } => *field,
            Self::InvalidAmount { .. }
            | Self::NegativeAmount { .. }
            | Self::AmountTooLarge { .. }
            | Self::AmountScale { .. } => "amount",
            Self::InvalidDate { .. } => "date",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_required_field",
            Self::InvalidAmount { .. } => "invalid_number",
            Self::NegativeAmount { .. } => "negative_amount",
            Self::AmountTooLarge { .. } => "amount_too_large",
            Self::AmountScale { .. } => "invalid_amount_scale",
            Self::InvalidDate { .. } => "invalid_date",
        }
    }

    pub fn received(&self) -> Option<&str> {
        match self {
            Self::MissingField { .. } => None,
            Self::InvalidAmount { received }
            | Self::NegativeAmount { received }
            | Self::AmountTooLarge { received }
            | Self::AmountScale { received, .. }
            | Self::InvalidDate { received } => Some(received.as_str()),
        }
    }
}

pub type InsightsResult<T> = Result<T, InsightsError>;
