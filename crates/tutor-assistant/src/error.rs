use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::RunStatus;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Assistant API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Run {run_id} ended with status {status:?}")]
    RunFailed { run_id: String, status: RunStatus },

    #[error("Run {run_id} did not complete within {deadline:?}")]
    RunTimedOut { run_id: String, deadline: Duration },

    #[error("Invalid API key format")]
    InvalidApiKey,
}

pub type Result<T> = std::result::Result<T, AssistantError>;
