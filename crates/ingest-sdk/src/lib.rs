//! Client library for the smart object ingestion API
//!
//! This crate provides:
//! - Typed payloads for events and smart objects
//! - Pre-flight validation of every call
//! - Event and object services over a pluggable HTTP transport
//! - Per-item batch results
//! - Metrics and structured logging of calls

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod transport;
pub mod uri;
pub mod validation;

pub use client::IngestClient;
pub use config::ClientConfig;
pub use error::{SdkError, SdkResult, TransportError};
pub use models::*;
pub use observability::{ClientMetrics, StructuredLogger};
pub use services::{EventsService, ObjectsService, Operation};
pub use transport::{HttpTransport, Method, ResponseEnvelope, Transport};
pub use uri::IngestionUri;
