//! Configuration schema types for Lingo.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

/// Root configuration for Lingo. Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LingoConfig {
    pub window: WindowConfig,
    pub converter: ConverterConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

/// Window size and title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            title: "Lingo".to_string(),
        }
    }
}

/// The external conversion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Endpoint receiving `POST {"code": ...}`.
    pub endpoint: String,
    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/convert".to_string(),
            timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}

/// Pane layout tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Smallest fraction (percent) any pane may shrink to.
    pub min_fraction: f64,
    /// Largest fraction (percent) any pane may grow to.
    pub max_fraction: f64,
    /// Half-width in pixels of the divider's drag hit zone.
    pub divider_hit_width: f64,
    /// Gap in pixels between panes.
    pub gap: f64,
    /// Height in pixels of the control bar under the editors.
    pub control_bar_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_fraction: 20.0,
            max_fraction: 80.0,
            divider_hit_width: 6.0,
            gap: 6.0,
            control_bar_height: 56.0,
        }
    }
}

/// Logging directive for the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directive: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directive: "lingo=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_behavior() {
        let config = LingoConfig::default();
        assert_eq!(config.window.width, 1280.0);
        assert_eq!(config.window.title, "Lingo");
        assert_eq!(config.converter.endpoint, "http://127.0.0.1:5000/convert");
        assert_eq!(config.layout.min_fraction, 20.0);
        assert_eq!(config.layout.max_fraction, 80.0);
        assert_eq!(config.logging.directive, "lingo=info");
    }

    #[test]
    fn partial_toml_fills_missing_sections() {
        let config: LingoConfig = toml::from_str(
            r#"
            [converter]
            endpoint = "http://localhost:9000/convert"
            "#,
        )
        .unwrap();
        assert_eq!(config.converter.endpoint, "http://localhost:9000/convert");
        // Untouched sections keep their defaults.
        assert_eq!(config.converter.timeout_secs, 60);
        assert_eq!(config.window.height, 800.0);
        assert_eq!(config.layout.gap, 6.0);
    }

    #[test]
    fn empty_toml_is_the_default_config() {
        let config: LingoConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Lingo");
        assert_eq!(config.layout.divider_hit_width, 6.0);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = LingoConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: LingoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.window.title, "Lingo");
        assert_eq!(parsed.converter.endpoint, config.converter.endpoint);
        assert_eq!(parsed.layout.max_fraction, 80.0);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = LingoConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: LingoConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.logging.directive, "lingo=info");
        assert_eq!(parsed.layout.control_bar_height, 56.0);
    }
}
