use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Client configuration for the Gemini endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key; when unset, the `GEMINI_API_KEY` environment variable is
    /// consulted at client construction time.
    pub api_key: Option<String>,
    /// Model identifier used in the endpoint path
    #[serde(default = "default_model")]
    pub model: String,
    /// Endpoint override, used by tests against a local mock server
    pub base_url: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: default_model(),
            base_url: None,
        }
    }
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

impl GeminiConfig {
    /// Load configuration from file and environment variables.
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with CHEF__ prefix (e.g. CHEF__API_KEY)
    /// 2. config.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("CHEF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// The credential to send: configuration first, then the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
    }
}
