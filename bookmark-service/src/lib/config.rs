use std::env;

use chrono::Duration;
use config::builder::DefaultState;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
}

/// One year.
const MAX_TOKEN_TTL_MINUTES: i64 = 365 * 24 * 60;

impl JwtConfig {
    /// Lifetime of issued tokens. Bounded by `Config::from_builder`.
    pub fn token_ttl(&self) -> Duration {
        Duration::minutes(self.expiration_minutes)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let builder = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"));

        Self::from_builder(builder)
    }

    /// Apply built-in defaults under the given sources and deserialize.
    ///
    /// `jwt.secret` has no default: a missing secret fails here.
    pub fn from_builder(builder: config::ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Config = builder
            .set_default("database.max_connections", 5)?
            .set_default("server.http_port", 3333)?
            .set_default("jwt.expiration_minutes", 5)?
            .build()?
            .try_deserialize()?;

        if config.jwt.secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".to_string()));
        }

        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&config.jwt.expiration_minutes) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be between 1 and {}",
                MAX_TOKEN_TTL_MINUTES
            )));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> Result<Config, ConfigError> {
        Config::from_builder(
            ConfigBuilder::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    #[test]
    fn test_defaults_are_applied() {
        let config = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/bookmarks"

            [jwt]
            secret = "s3cret"
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.server.http_port, 3333);
        assert_eq!(config.jwt.expiration_minutes, 5);
        assert_eq!(config.jwt.secret, "s3cret");
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let result = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/bookmarks"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_token_ttl_from_minutes() {
        let config = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/bookmarks"

            [jwt]
            secret = "s3cret"
            expiration_minutes = 15
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.jwt.token_ttl(), Duration::minutes(15));
    }

    #[test]
    fn test_non_positive_expiration_is_an_error() {
        for minutes in ["0", "-5"] {
            let result = from_toml(&format!(
                r#"
                [database]
                url = "postgresql://localhost/bookmarks"

                [jwt]
                secret = "s3cret"
                expiration_minutes = {}
                "#,
                minutes
            ));

            assert!(result.is_err(), "expiration_minutes = {} was accepted", minutes);
        }
    }

    #[test]
    fn test_oversized_expiration_is_an_error() {
        let result = from_toml(&format!(
            r#"
            [database]
            url = "postgresql://localhost/bookmarks"

            [jwt]
            secret = "s3cret"
            expiration_minutes = {}
            "#,
            i64::MAX
        ));

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_secret_is_an_error() {
        let result = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/bookmarks"

            [jwt]
            secret = ""
            "#,
        );

        assert!(result.is_err());
    }
}
