//! Configuration validation.
//!
//! Validates numeric ranges and the converter endpoint, collecting every
//! problem into a single `ConfigError` so the user sees them all at once.

use lingo_common::ConfigError;

use crate::schema::LingoConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LingoConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_converter(&mut errors, config);
    validate_layout(&mut errors, config);
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &LingoConfig) {
    if config.window.width < 320.0 {
        errors.push(format!(
            "window.width must be at least 320, got {}",
            config.window.width
        ));
    }
    if config.window.height < 240.0 {
        errors.push(format!(
            "window.height must be at least 240, got {}",
            config.window.height
        ));
    }
}

fn validate_converter(errors: &mut Vec<String>, config: &LingoConfig) {
    let endpoint = &config.converter.endpoint;
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        errors.push(format!(
            "converter.endpoint must be an http(s) URL, got {endpoint:?}"
        ));
    }
    if config.converter.timeout_secs == 0 {
        errors.push("converter.timeout_secs must be positive".to_string());
    }
    if config.converter.connect_timeout_secs == 0 {
        errors.push("converter.connect_timeout_secs must be positive".to_string());
    }
}

fn validate_layout(errors: &mut Vec<String>, config: &LingoConfig) {
    let layout = &config.layout;
    if layout.min_fraction <= 0.0 || layout.min_fraction >= 100.0 {
        errors.push(format!(
            "layout.min_fraction must be in (0, 100), got {}",
            layout.min_fraction
        ));
    }
    if layout.max_fraction <= 0.0 || layout.max_fraction >= 100.0 {
        errors.push(format!(
            "layout.max_fraction must be in (0, 100), got {}",
            layout.max_fraction
        ));
    }
    if layout.min_fraction >= layout.max_fraction {
        errors.push(format!(
            "layout.min_fraction ({}) must be below layout.max_fraction ({})",
            layout.min_fraction, layout.max_fraction
        ));
    }
    if layout.divider_hit_width <= 0.0 {
        errors.push(format!(
            "layout.divider_hit_width must be positive, got {}",
            layout.divider_hit_width
        ));
    }
    if layout.gap < 0.0 {
        errors.push(format!("layout.gap must not be negative, got {}", layout.gap));
    }
    if layout.control_bar_height < 0.0 {
        errors.push(format!(
            "layout.control_bar_height must not be negative, got {}",
            layout.control_bar_height
        ));
    }
}

fn validate_logging(errors: &mut Vec<String>, config: &LingoConfig) {
    if config.logging.directive.trim().is_empty() {
        errors.push("logging.directive must not be empty".to_string());
    }
}
