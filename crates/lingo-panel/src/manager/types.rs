/// Configuration for creating a new panel WebView.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Inline HTML content to render.
    pub html: String,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            html: "<html><body></body></html>".to_string(),
            transparent: false,
            devtools: cfg!(debug_assertions),
        }
    }
}

impl PanelConfig {
    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_html_keeps_other_defaults() {
        let config = PanelConfig::with_html("<html></html>");
        assert_eq!(config.html, "<html></html>");
        assert!(!config.transparent);
    }
}
