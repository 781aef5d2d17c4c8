use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::CoreError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory virtual resource paths are resolved against.
    pub root: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails,
    /// or if the storage root is empty.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = Config::builder()
            .set_default("storage.root", "./data")?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Validates loaded settings.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidConfiguration`] if the storage root is empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.storage.root.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "storage.root must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_root() {
        let settings = Settings {
            storage: StorageConfig {
                root: "  ".to_string(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_accepts_root() {
        let settings = Settings {
            storage: StorageConfig {
                root: "/var/lib/kunai".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        };
        assert!(settings.validate().is_ok());
    }
}
