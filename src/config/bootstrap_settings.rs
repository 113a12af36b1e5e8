use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

use crate::config::errors::ConfigError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

const DEFAULT_DATABASE_URL: &str = "sqlite://items.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SHUTDOWN_GRACE_SECONDS: u64 = 5;

/// Settings needed before the server can start
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    shutdown_grace: Duration,
}

impl BootstrapSettings {
    /// Load settings from the given environment, falling back to defaults
    /// for anything unset
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        let database_url = env
            .get_var("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if database_url.trim().is_empty() {
            return Err(ConfigError::MissingRequiredSetting {
                setting_name: "DATABASE_URL".to_string(),
            });
        }

        let server_host = env
            .get_var("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        Self::validate_host(&server_host)?;

        let server_port = match env.get_var("PORT") {
            Some(value) => Self::parse_port(&value)?,
            None => DEFAULT_PORT,
        };

        let grace_seconds = match env.get_var("SHUTDOWN_GRACE_SECONDS") {
            Some(value) => value.parse::<u64>().map_err(|_| ConfigError::InvalidFormat {
                setting_name: "SHUTDOWN_GRACE_SECONDS".to_string(),
                expected: "non-negative integer".to_string(),
                actual: value.clone(),
            })?,
            None => DEFAULT_SHUTDOWN_GRACE_SECONDS,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
            shutdown_grace: Duration::from_secs(grace_seconds),
        })
    }

    /// Convenience method that uses the system environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_provider(&SystemEnvironment)
    }

    /// Apply command-line overrides on top of the environment values
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = host {
            Self::validate_host(&host)?;
            self.server_host = host;
        }
        if let Some(port) = port {
            if port == 0 {
                return Err(Self::invalid_port("0"));
            }
            self.server_port = port;
        }
        if let Some(database_url) = database_url {
            self.database_url = database_url;
        }
        Ok(self)
    }

    fn validate_host(value: &str) -> Result<(), ConfigError> {
        value
            .parse::<IpAddr>()
            .map(|_| ())
            .map_err(|_| ConfigError::InvalidFormat {
                setting_name: "HOST".to_string(),
                expected: "IP address".to_string(),
                actual: value.to_string(),
            })
    }

    fn parse_port(value: &str) -> Result<u16, ConfigError> {
        match value.parse::<u16>() {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(Self::invalid_port(value)),
        }
    }

    fn invalid_port(value: &str) -> ConfigError {
        ConfigError::InvalidFormat {
            setting_name: "PORT".to_string(),
            expected: "integer between 1 and 65535".to_string(),
            actual: value.to_string(),
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn shutdown_grace(&self) -> Duration {
        self.shutdown_grace
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("shutdown_grace", &self.shutdown_grace)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let settings = BootstrapSettings::from_env_provider(&MockEnvironment::empty()).unwrap();

        assert_eq!(settings.database_url(), "sqlite://items.db?mode=rwc");
        assert_eq!(settings.server_host(), "0.0.0.0");
        assert_eq!(settings.server_port(), 5000);
        assert_eq!(settings.server_address(), "0.0.0.0:5000");
        assert_eq!(settings.shutdown_grace(), Duration::from_secs(5));
    }

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let env = MockEnvironment::empty()
            .with_var("DATABASE_URL", "sqlite://test.db")
            .with_var("HOST", "127.0.0.1")
            .with_var("PORT", "8080")
            .with_var("SHUTDOWN_GRACE_SECONDS", "0");

        let settings = BootstrapSettings::from_env_provider(&env).unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert_eq!(settings.shutdown_grace(), Duration::ZERO);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        for bad in ["abc", "0", "70000", "-1"] {
            let env = MockEnvironment::empty().with_var("PORT", bad);
            let result = BootstrapSettings::from_env_provider(&env);

            assert!(
                matches!(result, Err(ConfigError::InvalidFormat { ref setting_name, .. }) if setting_name == "PORT"),
                "port {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let env = MockEnvironment::empty().with_var("HOST", "not-an-ip");
        let result = BootstrapSettings::from_env_provider(&env);

        assert!(matches!(result, Err(ConfigError::InvalidFormat { .. })));
    }

    #[test]
    fn test_empty_database_url_is_rejected() {
        let env = MockEnvironment::empty().with_var("DATABASE_URL", "  ");
        let result = BootstrapSettings::from_env_provider(&env);

        assert!(matches!(result, Err(ConfigError::MissingRequiredSetting { .. })));
    }

    #[test]
    fn test_overrides_replace_environment_values() {
        let env = MockEnvironment::empty().with_var("PORT", "8080");
        let settings = BootstrapSettings::from_env_provider(&env)
            .unwrap()
            .with_overrides(
                Some("127.0.0.1".to_string()),
                Some(9090),
                Some("sqlite::memory:".to_string()),
            )
            .unwrap();

        assert_eq!(settings.server_address(), "127.0.0.1:9090");
        assert_eq!(settings.database_url(), "sqlite::memory:");
    }

    #[test]
    fn test_missing_overrides_keep_environment_values() {
        let env = MockEnvironment::empty().with_var("PORT", "8080");
        let settings = BootstrapSettings::from_env_provider(&env)
            .unwrap()
            .with_overrides(None, None, None)
            .unwrap();

        assert_eq!(settings.server_port(), 8080);
    }
}
