use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("HTTP {status}")]
    HttpStatus { status: reqwest::StatusCode },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl CliError {
    /// Process exit code: usage-class errors exit 2 to match the argument
    /// parser, everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidConfigValue { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
