use std::env;

use crate::error::{GenerationError, Result};

pub const CREDENTIAL_ENV_VAR: &str = "GEMINI_API_KEY";

/// API key for the generation service. Loaded once at startup; a missing key
/// disables generation for the process but must not stop the server.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Reads the credential from the environment. Absent or blank values are
    /// reported as `MissingCredential`, a condition the caller recovers from
    /// by serving without generation.
    pub fn from_env() -> Result<Self> {
        match env::var(CREDENTIAL_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            _ => Err(GenerationError::MissingCredential),
        }
    }

    pub(crate) fn into_inner(self) -> String {
        self.0
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }
}
