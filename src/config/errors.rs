use std::fmt;

/// Startup configuration errors
#[derive(Debug)]
pub enum ConfigError {
    MissingRequiredSetting { setting_name: String },
    InvalidFormat { setting_name: String, expected: String, actual: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredSetting { setting_name } => {
                write!(f, "Required setting '{}' is missing or empty", setting_name)
            }
            Self::InvalidFormat { setting_name, expected, actual } => {
                write!(
                    f,
                    "Setting '{}' has invalid format. Expected: {}, got: {}",
                    setting_name, expected, actual
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
