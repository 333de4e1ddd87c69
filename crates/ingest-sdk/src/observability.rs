//! Observability for the ingestion client
//!
//! Provides:
//! - Prometheus counters (requests, validation failures, remote failures, item outcomes)
//! - Structured logging of calls and batch outcomes with tracing

use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::error::SdkError;
use crate::models::{BatchOutcome, ItemResult};

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<ClientMetricsInner> = OnceLock::new();

struct ClientMetricsInner {
    requests: IntCounterVec,
    validation_failures: IntCounterVec,
    remote_failures: IntCounterVec,
    item_results: IntCounterVec,
}

impl ClientMetricsInner {
    fn new() -> Self {
        Self {
            requests: register_int_counter_vec!(
                "ingest_client_requests_total",
                "Requests dispatched to the ingestion API",
                &["operation"]
            )
            .expect("Failed to register requests_total"),

            validation_failures: register_int_counter_vec!(
                "ingest_client_validation_failures_total",
                "Calls rejected before any request was sent",
                &["operation"]
            )
            .expect("Failed to register validation_failures_total"),

            remote_failures: register_int_counter_vec!(
                "ingest_client_remote_failures_total",
                "Requests that failed at the transport or HTTP level",
                &["operation"]
            )
            .expect("Failed to register remote_failures_total"),

            item_results: register_int_counter_vec!(
                "ingest_client_item_results_total",
                "Per-item outcomes reported in batch responses",
                &["outcome"]
            )
            .expect("Failed to register item_results_total"),
        }
    }
}

/// Handle to the process-wide client metrics.
///
/// Clones share the same underlying counters.
#[derive(Clone)]
pub struct ClientMetrics {
    _private: (),
}

impl Default for ClientMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientMetrics {
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(ClientMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &ClientMetricsInner {
        GLOBAL_METRICS.get_or_init(ClientMetricsInner::new)
    }

    pub fn inc_requests(&self, operation: &str) {
        self.inner().requests.with_label_values(&[operation]).inc();
    }

    pub fn inc_validation_failures(&self, operation: &str) {
        self.inner()
            .validation_failures
            .with_label_values(&[operation])
            .inc();
    }

    pub fn inc_remote_failures(&self, operation: &str) {
        self.inner()
            .remote_failures
            .with_label_values(&[operation])
            .inc();
    }

    /// Count the success and error entries of one batch response
    pub fn record_results(&self, results: &[ItemResult]) {
        let batch = BatchOutcome::new(results);
        let inner = self.inner();
        inner
            .item_results
            .with_label_values(&["success"])
            .inc_by(batch.succeeded() as u64);
        inner
            .item_results
            .with_label_values(&["error"])
            .inc_by(batch.failed() as u64);
    }

    pub fn requests(&self, operation: &str) -> u64 {
        self.inner().requests.with_label_values(&[operation]).get()
    }

    pub fn validation_failures(&self, operation: &str) -> u64 {
        self.inner()
            .validation_failures
            .with_label_values(&[operation])
            .get()
    }

    /// Render every registered metric in the Prometheus text format
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&prometheus::gather(), &mut buffer) {
            warn!(error = %e, "Failed to encode metrics");
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Structured logger for client calls
///
/// Emits consistent fields for dispatched requests, rejected calls and
/// batch outcomes.
#[derive(Clone)]
pub struct StructuredLogger {
    host: String,
}

impl StructuredLogger {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn log_request(&self, operation: &str, method: &str, url: &str, items: usize) {
        debug!(
            event = "request_dispatched",
            host = %self.host,
            operation = %operation,
            method = %method,
            url = %url,
            items = items,
            "Dispatching request"
        );
    }

    pub fn log_rejected(&self, operation: &str, error: &SdkError) {
        debug!(
            event = "request_rejected",
            host = %self.host,
            operation = %operation,
            reason = %error,
            "Call rejected before dispatch"
        );
    }

    pub fn log_failure(&self, operation: &str, error: &SdkError) {
        warn!(
            event = "request_failed",
            host = %self.host,
            operation = %operation,
            error = %error,
            "Request to ingestion API failed"
        );
    }

    /// Log the summary of a batch response. Per-item errors are reported
    /// at warn level, but are not failures of the call.
    pub fn log_batch(&self, operation: &str, results: &[ItemResult]) {
        let batch = BatchOutcome::new(results);
        if batch.all_succeeded() {
            info!(
                event = "batch_completed",
                host = %self.host,
                operation = %operation,
                total = batch.total(),
                "Batch accepted"
            );
        } else {
            warn!(
                event = "batch_completed",
                host = %self.host,
                operation = %operation,
                total = batch.total(),
                succeeded = batch.succeeded(),
                failed = batch.failed(),
                "Batch completed with item errors"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_metrics_counters() {
        let metrics = ClientMetrics::new();
        let before = metrics.requests("metrics_test_op");

        metrics.inc_requests("metrics_test_op");
        metrics.inc_requests("metrics_test_op");
        metrics.inc_validation_failures("metrics_test_op");
        metrics.inc_remote_failures("metrics_test_op");
        metrics.record_results(&[ItemResult::success("a"), ItemResult::error("b", "m")]);

        assert_eq!(metrics.requests("metrics_test_op"), before + 2);
        assert!(metrics.validation_failures("metrics_test_op") >= 1);
    }

    #[test]
    fn test_render_contains_counters() {
        let metrics = ClientMetrics::new();
        metrics.inc_requests("render_test_op");

        let text = metrics.render();
        assert!(text.contains("ingest_client_requests_total"));
        assert!(text.contains("render_test_op"));
    }

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new("rest.example.com");
        assert_eq!(logger.host, "rest.example.com");
        logger.log_batch("send_events", &[]);
    }
}
