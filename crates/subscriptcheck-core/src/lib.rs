pub mod commands;
pub mod contracts;
pub mod error;
pub mod insights;
pub mod settings;
pub mod source;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{InsightsError, InsightsResult, ValidationError};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
