//! Service façades for the ingestion API
//!
//! Each operation validates its arguments, builds the target URL from the
//! ingestion base URI, hands the payload to the transport and maps the
//! response. Validation failures return before anything is sent.
//!
//! Batch responses are returned exactly as received: no reordering,
//! filtering or aggregation. Items that failed on the server are
//! [`Outcome::Error`](crate::models::Outcome::Error) entries, not errors.

mod events;
mod objects;


pub use events::EventsService;
pub use objects::ObjectsService;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::{SdkError, SdkResult, TransportError};
use crate::models::ItemResult;
use crate::observability::{ClientMetrics, StructuredLogger};
use crate::transport::{Method, ResponseEnvelope, Transport};
use crate::uri::IngestionUri;

/// Operations exposed by the services, used as log and metric labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SendEvents,
    SendDeviceEvents,
    CreateObject,
    UpdateObject,
    DeleteObject,
    CreateOrUpdateObjects,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::SendEvents => "send_events",
            Operation::SendDeviceEvents => "send_device_events",
            Operation::CreateObject => "create_object",
            Operation::UpdateObject => "update_object",
            Operation::DeleteObject => "delete_object",
            Operation::CreateOrUpdateObjects => "create_or_update_objects",
        }
    }
}

/// Plumbing shared by the services: base URI, transport and observability
#[derive(Clone)]
pub(crate) struct ServiceContext {
    base: IngestionUri,
    transport: Arc<dyn Transport>,
    metrics: ClientMetrics,
    logger: StructuredLogger,
}

impl ServiceContext {
    pub(crate) fn new(base: IngestionUri, transport: Arc<dyn Transport>) -> Self {
        let logger = StructuredLogger::new(base.host());
        Self {
            base,
            transport,
            metrics: ClientMetrics::new(),
            logger,
        }
    }

    /// Full URL for the given path segments below the base URI
    fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> String {
        self.base.clone().segments(segments).to_string()
    }

    /// Pass a validation result through, recording rejections
    fn checked<T>(&self, operation: Operation, validated: SdkResult<T>) -> SdkResult<T> {
        if let Err(e) = &validated {
            self.metrics.inc_validation_failures(operation.as_str());
            self.logger.log_rejected(operation.as_str(), e);
        }
        validated
    }

    fn encode<T: Serialize + ?Sized>(payload: &T) -> SdkResult<Value> {
        serde_json::to_value(payload).map_err(SdkError::Encode)
    }

    fn post(
        &self,
        operation: Operation,
        url: &str,
        payload: &Value,
        items: usize,
    ) -> SdkResult<Option<Value>> {
        self.dispatch(operation, Method::Post, url, items, || {
            self.transport.post_for_object(url, payload)
        })
    }

    fn exchange(
        &self,
        operation: Operation,
        method: Method,
        url: &str,
        payload: Option<&Value>,
        items: usize,
    ) -> SdkResult<ResponseEnvelope> {
        self.dispatch(operation, method, url, items, || {
            self.transport.exchange(url, method, payload)
        })
    }

    fn dispatch<T>(
        &self,
        operation: Operation,
        method: Method,
        url: &str,
        items: usize,
        call: impl FnOnce() -> Result<T, TransportError>,
    ) -> SdkResult<T> {
        self.metrics.inc_requests(operation.as_str());
        self.logger
            .log_request(operation.as_str(), method.as_str(), url, items);

        call().map_err(|e| {
            let err = SdkError::from(e);
            self.metrics.inc_remote_failures(operation.as_str());
            self.logger.log_failure(operation.as_str(), &err);
            err
        })
    }

    /// Decode a batch response body. A response without a body is an empty batch.
    fn results(&self, operation: Operation, body: Option<Value>) -> SdkResult<Vec<ItemResult>> {
        let results: Vec<ItemResult> = match body {
            Some(body) => serde_json::from_value(body).map_err(|e| {
                let err = SdkError::from(TransportError::from(e));
                self.metrics.inc_remote_failures(operation.as_str());
                self.logger.log_failure(operation.as_str(), &err);
                err
            })?,
            None => Vec::new(),
        };

        self.metrics.record_results(&results);
        self.logger.log_batch(operation.as_str(), &results);
        Ok(results)
    }
}
