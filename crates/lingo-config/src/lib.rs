//! Lingo configuration system.
//!
//! TOML-based configuration with serde defaults so partial configs work out
//! of the box. A missing config file is created from a commented template on
//! first run; validation collects every problem into a single error.

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::LingoConfig;

use lingo_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default if
/// none exists, and validates the result.
pub fn load_config() -> Result<LingoConfig, ConfigError> {
    let config = loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (CLI `--config` override).
pub fn load_config_from(path: &std::path::Path) -> Result<LingoConfig, ConfigError> {
    let config = loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        let config = LingoConfig::default();
        assert!(validation::validate(&config).is_ok());
    }

    #[test]
    fn load_config_from_missing_path_fails() {
        let result = load_config_from(std::path::Path::new("/nonexistent/lingo.toml"));
        assert!(result.is_err());
    }
}
