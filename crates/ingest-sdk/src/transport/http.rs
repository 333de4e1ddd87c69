//! Blocking reqwest transport

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::debug;

use super::{Method, ResponseEnvelope, Transport};
use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult, TransportError};

/// [`Transport`] backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    access_token: Option<String>,
}

impl HttpTransport {
    /// Create a transport using the timeout and token from `config`
    pub fn new(config: &ClientConfig) -> SdkResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SdkError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config.access_token.clone()))
    }

    /// Wrap an already configured client
    pub fn with_client(client: Client, access_token: Option<String>) -> Self {
        Self {
            client,
            access_token,
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method.into(), url)
            .header(ACCEPT, "application/json");

        match &self.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn send(
        &self,
        method: Method,
        url: &str,
        builder: RequestBuilder,
    ) -> Result<ResponseEnvelope, TransportError> {
        debug!(method = method.as_str(), url = %url, "Sending request");

        let http_error = |source| TransportError::Http {
            url: url.to_string(),
            source,
        };

        let response = builder.send().map_err(http_error)?;
        let status = response.status();
        let text = response.text().map_err(http_error)?;

        debug!(
            method = method.as_str(),
            url = %url,
            status = status.as_u16(),
            "Received response"
        );

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let body = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(&text)?)
        };

        Ok(ResponseEnvelope::new(status.as_u16(), body))
    }
}

impl Transport for HttpTransport {
    fn post_for_object(&self, url: &str, payload: &Value) -> Result<Option<Value>, TransportError> {
        let builder = self.request(Method::Post, url).json(payload);
        self.send(Method::Post, url, builder)
            .map(ResponseEnvelope::into_body)
    }

    fn exchange(
        &self,
        url: &str,
        method: Method,
        payload: Option<&Value>,
    ) -> Result<ResponseEnvelope, TransportError> {
        let mut builder = self.request(method, url);
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }
        self.send(method, url, builder)
    }
}
