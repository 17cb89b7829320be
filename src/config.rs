//! Runtime configuration: AI credential gate and model selection.

use std::env;

/// Model used when neither `--model` nor `OTTO_MODEL` is set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Runtime configuration loaded once at startup.
///
/// A missing API key is non-fatal at load time; only AI-dependent commands
/// fail, via [`Config::require_api_key`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key, when configured.
    pub api_key: Option<String>,
    /// Model identifier for completion requests.
    pub model: String,
}

impl Config {
    /// Loads configuration from a `.env` file (if present) and the process
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        // A missing .env file is fine; real env vars still apply.
        let _ = dotenvy::dotenv();
        Self {
            api_key: env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty()),
            model: env::var("OTTO_MODEL").ok().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    /// Returns the API key, or the not-configured error every AI-dependent
    /// command reports.
    ///
    /// # Errors
    ///
    /// Returns an error when no API key is configured.
    pub fn require_api_key(&self) -> Result<&str, String> {
        self.api_key.as_deref().ok_or_else(|| {
            format!(
                "AI suggestions are not configured: set {API_KEY_VAR} in the \
                 environment or a .env file"
            )
        })
    }
}
