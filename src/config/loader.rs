//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::account::AccountAddress;
use crate::config::schema::DemoConfig;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A single validation failure, pointing at the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DemoConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DemoConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &DemoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if url::Url::parse(&config.node_url).is_err() {
        errors.push(ValidationError {
            field: "node_url".to_string(),
            message: format!("'{}' is not a valid URL", config.node_url),
        });
    }
    if url::Url::parse(&config.faucet_url).is_err() {
        errors.push(ValidationError {
            field: "faucet_url".to_string(),
            message: format!("'{}' is not a valid URL", config.faucet_url),
        });
    }
    if config.coin.module_name.is_empty() {
        errors.push(ValidationError {
            field: "coin.module_name".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if config.coin.decimals > 32 {
        errors.push(ValidationError {
            field: "coin.decimals".to_string(),
            message: format!("{} exceeds the maximum of 32", config.coin.decimals),
        });
    }
    if config.escrow.module_name.is_empty() {
        errors.push(ValidationError {
            field: "escrow.module_name".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if let Some(addr) = &config.escrow.module_address {
        if AccountAddress::from_str(addr).is_err() {
            errors.push(ValidationError {
                field: "escrow.module_address".to_string(),
                message: format!("'{}' is not a valid address", addr),
            });
        }
    }
    if config.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "request_timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(validate_config(&DemoConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_urls_rejected() {
        let mut config = DemoConfig::default();
        config.node_url = "not a url".to_string();
        config.faucet_url = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "node_url"));
        assert!(errors.iter().any(|e| e.field == "faucet_url"));
    }

    #[test]
    fn test_bad_module_settings_rejected() {
        let mut config = DemoConfig::default();
        config.coin.module_name = String::new();
        config.coin.decimals = 64;
        config.escrow.module_address = Some("0xnothex".to_string());

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "coin.module_name"));
        assert!(errors.iter().any(|e| e.field == "coin.decimals"));
        assert!(errors.iter().any(|e| e.field == "escrow.module_address"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/demo.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
