//! Core data models for the ingestion API

mod event;
mod result;
mod smart_object;

pub use event::{Event, EventOptions, ObjectRef};
pub use result::{BatchOutcome, ItemResult, Outcome};
pub use smart_object::{Owner, SmartObject, SmartObjectOptions};

/// Wire field names and literals, shared by every payload type
pub mod fields {
    pub use super::event::{EVENT_ID, EVENT_TYPE, OBJECT, TIMESTAMP};
    pub use super::result::{ERROR, ID, MESSAGE, RESULT, SUCCESS};
    pub use super::smart_object::{DEVICE_ID, OBJECT_TYPE, OWNER, REGISTRATION_DATE, USERNAME};
}

/// Placeholder printed for absent fields in diagnostic output
pub const PRINT_OBJECT_NULL: &str = "null";

use crate::error::{SdkError, SdkResult};

/// Reject free-form attribute names that would clash with a reserved field
fn check_attribute_names<'a>(
    payload: &'static str,
    names: impl IntoIterator<Item = &'a String>,
    reserved: &[&str],
) -> SdkResult<()> {
    for name in names {
        if name.trim().is_empty() {
            return Err(SdkError::Payload {
                payload,
                message: "attribute names cannot be blank".to_string(),
            });
        }
        if reserved.contains(&name.as_str()) {
            return Err(SdkError::Payload {
                payload,
                message: format!("'{}' is a reserved field name", name),
            });
        }
    }
    Ok(())
}
