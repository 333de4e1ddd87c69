//! Smart objects registered with the ingestion API

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::check_attribute_names;
use crate::error::SdkResult;

pub const DEVICE_ID: &str = "x_device_id";
pub const OBJECT_TYPE: &str = "x_object_type";
pub const REGISTRATION_DATE: &str = "x_registration_date";
pub const OWNER: &str = "x_owner";
pub const USERNAME: &str = "username";

const RESERVED: &[&str] = &[DEVICE_ID, OBJECT_TYPE, REGISTRATION_DATE, OWNER];

/// Named fields used to construct a [`SmartObject`]
#[derive(Debug, Clone, Default)]
pub struct SmartObjectOptions {
    pub device_id: Option<String>,
    pub object_type: Option<String>,
    pub registration_date: Option<DateTime<Utc>>,
    /// Username of the owner the object is claimed by
    pub owner: Option<String>,
    /// Free-form object attributes
    pub attributes: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub username: String,
}

/// A registered device record, identified by device id and typed by object type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmartObject {
    #[serde(rename = "x_device_id", default, skip_serializing_if = "Option::is_none")]
    device_id: Option<String>,
    #[serde(rename = "x_object_type", default, skip_serializing_if = "Option::is_none")]
    object_type: Option<String>,
    #[serde(
        rename = "x_registration_date",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    registration_date: Option<DateTime<Utc>>,
    #[serde(rename = "x_owner", default, skip_serializing_if = "Option::is_none")]
    owner: Option<Owner>,
    #[serde(flatten)]
    attributes: BTreeMap<String, Value>,
}

impl SmartObject {
    /// Build an object, rejecting attribute names that clash with reserved fields.
    ///
    /// Device id and object type may be left unset here; operations that
    /// require them reject the object before sending it.
    pub fn from_options(options: SmartObjectOptions) -> SdkResult<Self> {
        check_attribute_names("smart object", options.attributes.keys(), RESERVED)?;

        Ok(Self {
            device_id: options.device_id,
            object_type: options.object_type,
            registration_date: options.registration_date,
            owner: options.owner.map(|username| Owner { username }),
            attributes: options.attributes,
        })
    }

    /// Object with only device id and object type set
    pub fn new(device_id: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            device_id: Some(device_id.into()),
            object_type: Some(object_type.into()),
            ..Self::default()
        }
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    pub fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    pub fn registration_date(&self) -> Option<DateTime<Utc>> {
        self.registration_date
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_ref().map(|o| o.username.as_str())
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }
}
