//! Resource URI construction

use std::fmt;

use url::Url;

use crate::error::{SdkError, SdkResult};

/// Resource segment for event ingestion
pub const EVENT_PATH: &str = "events";
/// Resource segment for smart objects
pub const OBJECT_PATH: &str = "objects";
/// Sub-resource segment for the events of one object
pub const EVENT_PATH_SEGMENT: &str = "events";

/// Ingestion base URI plus appended path segments.
///
/// Rendering always keeps the port, including scheme defaults, so
/// `https://host:443/api/v3` stays exactly that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionUri {
    url: Url,
    port: u16,
}

impl IngestionUri {
    /// Build from parts, e.g. `("https", "host", 443, "/api/v3")`
    pub fn new(scheme: &str, host: &str, port: u16, base_path: &str) -> SdkResult<Self> {
        let mut url = Url::parse(&format!("{}://{}:{}", scheme, host, port))?;
        url.set_path(base_path);
        Self::from_url(url)
    }

    /// Parse a full base URI such as `https://host:443/api/v3`
    pub fn parse(base: &str) -> SdkResult<Self> {
        Self::from_url(Url::parse(base)?)
    }

    fn from_url(mut url: Url) -> SdkResult<Self> {
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(SdkError::Config(format!("{} is not a valid base URI", url)));
        }
        let port = url
            .port_or_known_default()
            .ok_or_else(|| SdkError::Config(format!("no port known for {}", url)))?;
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self { url, port })
    }

    /// Append one path segment, percent-encoding anything that is not
    /// segment-safe (including `/`).
    pub fn segment(mut self, segment: &str) -> Self {
        if let Ok(mut segments) = self.url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        self
    }

    /// Append several path segments in order
    pub fn segments<'a>(self, segments: impl IntoIterator<Item = &'a str>) -> Self {
        segments.into_iter().fold(self, IngestionUri::segment)
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }
}

impl fmt::Display for IngestionUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}:{}{}",
            self.scheme(),
            self.host(),
            self.port,
            self.path()
        )
    }
}
