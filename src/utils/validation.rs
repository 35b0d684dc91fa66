use crate::utils::error::{CliError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Runs before any network activity; a bad --server value is a usage error.
pub fn validate_server_url(url_str: &str) -> Result<()> {
    let invalid = |reason: String| CliError::InvalidConfigValue {
        field: "server".to_string(),
        value: url_str.to_string(),
        reason,
    };

    let url = Url::parse(url_str).map_err(|e| invalid(format!("invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("unsupported URL scheme: {}", scheme))),
    }
}
