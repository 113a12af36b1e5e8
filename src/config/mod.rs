mod bootstrap_settings;
mod database;
mod env_provider;
mod errors;
mod logging;

pub use bootstrap_settings::BootstrapSettings;
pub use database::{close_database, connect_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use errors::ConfigError;
pub use logging::{init_logging, LoggingConfig, LoggingError};

#[cfg(test)]
pub use env_provider::MockEnvironment;
