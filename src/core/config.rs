use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub api_key_id: Secret<String>,
    pub private_key_pem: Secret<String>,
    pub demo: bool,
    pub base_url: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ExchangeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ExchangeConfig", 4)?;
        state.serialize_field("api_key_id", "[REDACTED]")?;
        state.serialize_field("private_key_pem", "[REDACTED]")?;
        state.serialize_field("demo", &self.demo)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

// Custom Deserialize implementation
impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            api_key_id: String,
            private_key_pem: String,
            #[serde(default)]
            demo: bool,
            base_url: Option<String>,
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            api_key_id: Secret::new(helper.api_key_id),
            private_key_pem: Secret::new(helper.private_key_pem),
            demo: helper.demo,
            base_url: helper.base_url,
        })
    }
}

impl ExchangeConfig {
    /// Create a new configuration from an API key id and the PEM text of the
    /// matching RSA private key
    #[must_use]
    pub fn new(api_key_id: String, private_key_pem: String) -> Self {
        Self {
            api_key_id: Secret::new(api_key_id),
            private_key_pem: Secret::new(private_key_pem),
            demo: false,
            base_url: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_API_KEY_ID` (e.g., `KALSHI_API_KEY_ID`)
    /// - `{PREFIX}_PRIVATE_KEY_PATH` (path to the PEM file)
    /// - `{PREFIX}_DEMO` (optional, defaults to false)
    /// - `{PREFIX}_BASE_URL` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let api_key_var = format!("{}_API_KEY_ID", prefix.to_uppercase());
        let key_path_var = format!("{}_PRIVATE_KEY_PATH", prefix.to_uppercase());
        let demo_var = format!("{}_DEMO", prefix.to_uppercase());
        let base_url_var = format!("{}_BASE_URL", prefix.to_uppercase());

        let api_key_id = env::var(&api_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(api_key_var))?;

        let key_path = env::var(&key_path_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(key_path_var))?;
        let private_key_pem = std::fs::read_to_string(&key_path).map_err(|e| {
            ConfigError::InvalidConfiguration(format!(
                "failed to read private key file '{}': {}",
                key_path, e
            ))
        })?;

        let demo = env::var(&demo_var)
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        let base_url = env::var(&base_url_var).ok();

        Ok(Self {
            api_key_id: Secret::new(api_key_id),
            private_key_pem: Secret::new(private_key_pem),
            demo,
            base_url,
        })
    }

    /// Create configuration from .env file and environment variables
    ///
    /// This method first loads environment variables from a .env file (if it
    /// exists), then reads the configuration using the standard environment
    /// variable names.
    ///
    /// **Security Warning**: Never commit .env files to version control!
    /// Add .env to your .gitignore file.
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // .env file doesn't exist, continue with system env vars
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Route requests to the demo environment instead of production
    #[must_use]
    pub const fn demo(mut self, demo: bool) -> Self {
        self.demo = demo;
        self
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Get the API key id (use carefully - exposes secret)
    pub fn api_key_id(&self) -> &str {
        self.api_key_id.expose_secret()
    }

    /// Get the private key PEM text (use carefully - exposes secret)
    pub fn private_key_pem(&self) -> &str {
        self.private_key_pem.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
