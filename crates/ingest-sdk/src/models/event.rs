//! Events submitted to the ingestion API

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::check_attribute_names;
use super::smart_object::DEVICE_ID;
use crate::error::SdkResult;

pub const EVENT_ID: &str = "event_id";
pub const EVENT_TYPE: &str = "x_event_type";
pub const OBJECT: &str = "x_object";
pub const TIMESTAMP: &str = "x_timestamp";

// x_device_id belongs under x_object for events
const RESERVED: &[&str] = &[EVENT_ID, EVENT_TYPE, OBJECT, TIMESTAMP, DEVICE_ID];

/// Named fields used to construct an [`Event`]
#[derive(Debug, Clone, Default)]
pub struct EventOptions {
    /// Client-assigned identifier, echoed back in batch results
    pub event_id: Option<String>,
    pub event_type: Option<String>,
    /// Device that owns the event
    pub device_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    /// Free-form time series values
    pub timeseries: BTreeMap<String, Value>,
}

/// Reference to the smart object an event belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    #[serde(rename = "x_device_id")]
    pub device_id: String,
}

/// A timestamped occurrence for an object type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "event_id", default, skip_serializing_if = "Option::is_none")]
    event_id: Option<String>,
    #[serde(rename = "x_event_type", default, skip_serializing_if = "Option::is_none")]
    event_type: Option<String>,
    #[serde(rename = "x_object", default, skip_serializing_if = "Option::is_none")]
    object: Option<ObjectRef>,
    #[serde(rename = "x_timestamp", default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    timeseries: BTreeMap<String, Value>,
}

impl Event {
    /// Build an event, rejecting time series names that clash with reserved fields
    pub fn from_options(options: EventOptions) -> SdkResult<Self> {
        check_attribute_names("event", options.timeseries.keys(), RESERVED)?;

        Ok(Self {
            event_id: options.event_id,
            event_type: options.event_type,
            object: options.device_id.map(|device_id| ObjectRef { device_id }),
            timestamp: options.timestamp,
            timeseries: options.timeseries,
        })
    }

    /// Event with only a type set
    pub fn of_type(event_type: impl Into<String>) -> Self {
        Self {
            event_type: Some(event_type.into()),
            ..Self::default()
        }
    }

    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    pub fn event_type(&self) -> Option<&str> {
        self.event_type.as_deref()
    }

    pub fn device_id(&self) -> Option<&str> {
        self.object.as_ref().map(|o| o.device_id.as_str())
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn timeseries(&self) -> &BTreeMap<String, Value> {
        &self.timeseries
    }
}
