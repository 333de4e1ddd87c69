//! HTTP transport used by the services
//!
//! The services only see the [`Transport`] trait: they hand it a fully
//! built URL and a JSON payload and get the decoded JSON body back.
//! [`HttpTransport`] is the blocking reqwest implementation.

mod http;

pub use http::HttpTransport;

use serde_json::Value;

use crate::error::TransportError;

/// HTTP verbs used by the ingestion API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Status and decoded body of a completed exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub status: u16,
    /// `None` when the response had no body
    pub body: Option<Value>,
}

impl ResponseEnvelope {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn into_body(self) -> Option<Value> {
        self.body
    }
}

/// Performs the request/response exchange for the services.
///
/// Implementations are shared between services and callers, so they must be
/// safe to use from several threads at once. Any retry or timeout policy
/// belongs here, not in the services.
pub trait Transport: Send + Sync {
    /// Single POST, returning the decoded response body if there is one
    fn post_for_object(&self, url: &str, payload: &Value) -> Result<Option<Value>, TransportError>;

    /// Call with an arbitrary verb and optional body
    fn exchange(
        &self,
        url: &str,
        method: Method,
        payload: Option<&Value>,
    ) -> Result<ResponseEnvelope, TransportError>;
}
