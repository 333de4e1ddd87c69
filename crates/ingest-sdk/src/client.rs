//! Entry point tying configuration, transport and services together

use std::sync::Arc;

use tracing::info;

use crate::config::ClientConfig;
use crate::error::SdkResult;
use crate::services::{EventsService, ObjectsService, ServiceContext};
use crate::transport::{HttpTransport, Transport};
use crate::uri::IngestionUri;

/// Client for the ingestion API.
///
/// Both services share one transport; the client is cheap to clone and can
/// be used from several threads.
#[derive(Clone)]
pub struct IngestClient {
    base: IngestionUri,
    events: EventsService,
    objects: ObjectsService,
}

impl IngestClient {
    /// Create a client talking HTTP to the host in `config`
    pub fn from_config(config: &ClientConfig) -> SdkResult<Self> {
        let base = config.ingestion_base_uri()?;
        let transport = HttpTransport::new(config)?;

        info!(
            base_uri = %base,
            timeout_secs = config.request_timeout_secs,
            authenticated = config.access_token.is_some(),
            "Ingestion client configured"
        );

        Ok(Self::with_transport(base, Arc::new(transport)))
    }

    /// Create a client on top of any transport
    pub fn with_transport(base: IngestionUri, transport: Arc<dyn Transport>) -> Self {
        let ctx = ServiceContext::new(base.clone(), transport);
        Self {
            base,
            events: EventsService::new(ctx.clone()),
            objects: ObjectsService::new(ctx),
        }
    }

    pub fn events(&self) -> &EventsService {
        &self.events
    }

    pub fn objects(&self) -> &ObjectsService {
        &self.objects
    }

    pub fn ingestion_base_uri(&self) -> &IngestionUri {
        &self.base
    }
}
