//! TOML config loading: read from a path or the platform default location.

use std::path::{Path, PathBuf};

use lingo_common::ConfigError;
use tracing::info;

use crate::schema::LingoConfig;

/// Commented template written on first run.
const DEFAULT_CONFIG_TOML: &str = r#"# Lingo configuration.
# Every key is optional; omitted keys keep their defaults.

[window]
# width = 1280.0
# height = 800.0
# title = "Lingo"

[converter]
# Endpoint of the translation service (receives POST {"code": ...}).
# endpoint = "http://127.0.0.1:5000/convert"
# timeout_secs = 60
# connect_timeout_secs = 10

[layout]
# Pane fraction clamp range, in percent.
# min_fraction = 20.0
# max_fraction = 80.0
# divider_hit_width = 6.0
# gap = 6.0
# control_bar_height = 56.0

[logging]
# directive = "lingo=info"
"#;

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<LingoConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: LingoConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/lingo/config.toml`
/// On Linux: `~/.config/lingo/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<LingoConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) if msg.contains("failed to read") => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(LingoConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("lingo").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_to_defaults() {
        let config: LingoConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config.window.title, "Lingo");
        assert_eq!(config.converter.endpoint, "http://127.0.0.1:5000/convert");
    }

    #[test]
    fn load_from_missing_path_is_parse_error() {
        let err = load_from_path(Path::new("/nonexistent/dir/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(msg) if msg.contains("failed to read")));
    }

    #[test]
    fn load_from_written_file_round_trips() {
        let dir = std::env::temp_dir().join("lingo-config-loader-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[window]\ntitle = \"Custom\"\n").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.title, "Custom");
        assert_eq!(config.window.width, 1280.0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn create_default_config_writes_template() {
        let dir = std::env::temp_dir().join("lingo-config-create-test");
        std::fs::remove_dir_all(&dir).ok();
        let path = dir.join("nested").join("config.toml");

        create_default_config(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_CONFIG_TOML);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let dir = std::env::temp_dir().join("lingo-config-invalid-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[window\nbroken").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(msg) if msg.contains("parse TOML")));

        std::fs::remove_file(&path).ok();
    }
}
