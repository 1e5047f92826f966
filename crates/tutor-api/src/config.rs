use std::path::Path;
use std::time::Duration;

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

use tutor_assistant::PollPolicy;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub assistant: AssistantSettings,
    pub registry: RegistrySettings,
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(default)]
    pub openai_api_key: String,
    #[serde(default)]
    pub assistant_id: String,
    #[serde(default)]
    pub vector_store_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantSettings {
    pub base_url: String,
    pub poll_interval_ms: u64,
    pub poll_deadline_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrySettings {
    pub thread_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables (SERVER_, CORS_, ASSISTANT_, etc. prefixes)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::default()
                    .prefix("SERVER")
                    .separator("_")
                    .try_parsing(true),
            )
            .add_source(
                Environment::default()
                    .prefix("CORS")
                    .separator("_")
                    .try_parsing(true),
            )
            .add_source(
                Environment::default()
                    .prefix("ASSISTANT")
                    .separator("_")
                    .try_parsing(true),
            )
            .add_source(
                Environment::default()
                    .prefix("REGISTRY")
                    .separator("_")
                    .try_parsing(true),
            )
            .add_source(
                Environment::default()
                    .prefix("LOG")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;

        let mut cfg: Config = config.try_deserialize()?;

        // Load secrets from ENV (not in TOML)
        cfg.openai_api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ConfigError::Message("OPENAI_API_KEY environment variable is required".to_string())
        })?;
        cfg.assistant_id = std::env::var("ASSISTANT_ID").map_err(|_| {
            ConfigError::Message("ASSISTANT_ID environment variable is required".to_string())
        })?;
        cfg.vector_store_id = std::env::var("VECTOR_STORE_ID").map_err(|_| {
            ConfigError::Message("VECTOR_STORE_ID environment variable is required".to_string())
        })?;

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy::new(
            Duration::from_millis(self.assistant.poll_interval_ms),
            Duration::from_secs(self.assistant.poll_deadline_secs),
        )
    }

    pub fn thread_ttl(&self) -> Duration {
        Duration::from_secs(self.registry.thread_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_structure() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 3001

            [cors]
            enabled = true
            origins = ["http://localhost:3000"]

            [assistant]
            base_url = "https://api.openai.com/v1"
            poll_interval_ms = 1000
            poll_deadline_secs = 120

            [registry]
            thread_ttl_secs = 3600

            [logging]
            level = "debug"
            format = "json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.assistant.poll_interval_ms, 1000);
        assert_eq!(config.poll_policy().interval, Duration::from_secs(1));
        assert_eq!(config.thread_ttl(), Duration::from_secs(3600));
    }
}
