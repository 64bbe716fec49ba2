//! HTTP transport for the conversion service.
//!
//! The wire contract is fixed: `POST {endpoint}` with `{"code": <source>}`,
//! success responses carry `{"javascript": <converted>}`. Any non-2xx status
//! is a failure regardless of body.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ConvertError, ConvertedCode, Converter};

/// Default endpoint of the local translation service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/convert";

/// Request body for the conversion endpoint.
#[derive(Debug, Serialize)]
struct ConvertRequest<'a> {
    code: &'a str,
}

/// Success response body. The `javascript` field may be absent; that is a
/// success without text, not an error.
#[derive(Debug, Deserialize)]
struct ConvertResponse {
    #[serde(default)]
    javascript: Option<String>,
}

/// Conversion service client configuration.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(60),
        }
    }
}

impl ConverterConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

/// Conversion service client.
pub struct HttpConverter {
    config: ConverterConfig,
    http: reqwest::Client,
}

impl HttpConverter {
    pub fn new(config: ConverterConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { config, http }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl Converter for HttpConverter {
    async fn convert(&self, code: &str) -> Result<ConvertedCode, ConvertError> {
        debug!(endpoint = %self.config.endpoint, bytes = code.len(), "conversion request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("Accept", "application/json")
            .json(&ConvertRequest { code })
            .send()
            .await
            .map_err(|e| ConvertError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(ConvertError::Service {
                status: status.as_u16(),
                body: text,
            });
        }

        let body: ConvertResponse = response
            .json()
            .await
            .map_err(|e| ConvertError::Decode(e.to_string()))?;

        debug!(has_text = body.javascript.is_some(), "conversion response");
        Ok(ConvertedCode {
            javascript: body.javascript,
        })
    }
}
