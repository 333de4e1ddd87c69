//! Pre-flight argument validation.
//!
//! Every operation is checked here before any request is built. Checks run
//! in a fixed precedence and the first violation determines the error:
//! - required bodies are present (and lists non-empty where required)
//! - identifiers are present and non-blank
//! - object creation carries an object type
//!
//! The messages are matched on by callers and must not change.

use crate::error::{SdkError, SdkResult};
use crate::models::{Event, SmartObject};

pub const EVENT_LIST_REQUIRED: &str = "Event list cannot be null or empty.";
pub const OBJECT_BODY_REQUIRED: &str = "Object body cannot be null.";
pub const OBJECT_LIST_REQUIRED: &str = "List of smart objects body cannot be null.";
pub const DEVICE_ID_BLANK: &str = "device_Id cannot be blank.";
pub const BODY_DEVICE_ID_BLANK: &str = "x_device_Id cannot be blank.";
pub const BODY_OBJECT_TYPE_BLANK: &str = "x_object_Type cannot be blank.";

/// Require a value to be present
pub fn require<T>(value: Option<T>, message: &str) -> SdkResult<T> {
    value.ok_or_else(|| SdkError::invalid_argument(message))
}

/// Require a list to be present and non-empty
pub fn require_non_empty<'a, T>(items: Option<&'a [T]>, message: &str) -> SdkResult<&'a [T]> {
    match items {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(SdkError::invalid_argument(message)),
    }
}

/// Require a string to be present and non-empty.
///
/// Whitespace-only values are accepted and left to the server.
pub fn require_not_blank<'a>(value: Option<&'a str>, message: &str) -> SdkResult<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SdkError::invalid_argument(message)),
    }
}

pub fn validate_send(events: Option<&[Event]>) -> SdkResult<&[Event]> {
    require_non_empty(events, EVENT_LIST_REQUIRED)
}

pub fn validate_send_for_device<'a>(
    device_id: Option<&'a str>,
    events: Option<&'a [Event]>,
) -> SdkResult<(&'a str, &'a [Event])> {
    let events = require_non_empty(events, EVENT_LIST_REQUIRED)?;
    let device_id = require_not_blank(device_id, DEVICE_ID_BLANK)?;
    Ok((device_id, events))
}

/// Returns the object together with its device id
pub fn validate_create(object: Option<&SmartObject>) -> SdkResult<(&SmartObject, &str)> {
    let object = require(object, OBJECT_BODY_REQUIRED)?;
    let device_id = require_not_blank(object.device_id(), BODY_DEVICE_ID_BLANK)?;
    require_not_blank(object.object_type(), BODY_OBJECT_TYPE_BLANK)?;
    Ok((object, device_id))
}

pub fn validate_delete(device_id: Option<&str>) -> SdkResult<&str> {
    require_not_blank(device_id, DEVICE_ID_BLANK)
}

/// The explicit device id is checked on its own; the body's embedded id is
/// not consulted.
pub fn validate_update<'a>(
    object: Option<&'a SmartObject>,
    device_id: Option<&'a str>,
) -> SdkResult<(&'a SmartObject, &'a str)> {
    let object = require(object, OBJECT_BODY_REQUIRED)?;
    let device_id = require_not_blank(device_id, DEVICE_ID_BLANK)?;
    Ok((object, device_id))
}

/// An empty list is passed through unchanged
pub fn validate_create_or_update(objects: Option<&[SmartObject]>) -> SdkResult<&[SmartObject]> {
    require(objects, OBJECT_LIST_REQUIRED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: SdkError) -> String {
        assert!(err.is_invalid_argument(), "unexpected error kind: {err:?}");
        err.to_string()
    }

    #[test]
    fn test_require_not_blank() {
        assert_eq!(require_not_blank(Some("dev"), "m").unwrap(), "dev");
        assert_eq!(message(require_not_blank(None, "m").unwrap_err()), "m");
        assert_eq!(message(require_not_blank(Some(""), "m").unwrap_err()), "m");
        // Only exact-empty counts as blank
        assert_eq!(require_not_blank(Some(" "), "m").unwrap(), " ");
    }

    #[test]
    fn test_require_non_empty() {
        let items = [1, 2];
        assert_eq!(require_non_empty(Some(&items[..]), "m").unwrap().len(), 2);
        assert!(require_non_empty::<i32>(Some(&[]), "m").is_err());
        assert!(require_non_empty::<i32>(None, "m").is_err());
    }

    #[test]
    fn test_send_messages() {
        assert_eq!(message(validate_send(None).unwrap_err()), EVENT_LIST_REQUIRED);
        assert_eq!(message(validate_send(Some(&[])).unwrap_err()), EVENT_LIST_REQUIRED);

        let events = [Event::of_type("type")];
        assert_eq!(validate_send(Some(&events)).unwrap().len(), 1);
    }

    #[test]
    fn test_send_for_device_precedence() {
        let events = [Event::of_type("type")];

        assert_eq!(
            message(validate_send_for_device(None, Some(&events)).unwrap_err()),
            DEVICE_ID_BLANK
        );
        assert_eq!(
            message(validate_send_for_device(Some(""), Some(&events)).unwrap_err()),
            DEVICE_ID_BLANK
        );
        assert_eq!(
            message(validate_send_for_device(Some("deviceId"), None).unwrap_err()),
            EVENT_LIST_REQUIRED
        );
        // Missing body wins over a missing identifier
        assert_eq!(
            message(validate_send_for_device(None, Some(&[])).unwrap_err()),
            EVENT_LIST_REQUIRED
        );
    }

    #[test]
    fn test_create_messages() {
        assert_eq!(message(validate_create(None).unwrap_err()), OBJECT_BODY_REQUIRED);

        let no_type = SmartObject::from_options(crate::models::SmartObjectOptions {
            device_id: Some("deviceId".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            message(validate_create(Some(&no_type)).unwrap_err()),
            BODY_OBJECT_TYPE_BLANK
        );

        let empty_type = SmartObject::new("deviceId", "");
        assert_eq!(
            message(validate_create(Some(&empty_type)).unwrap_err()),
            BODY_OBJECT_TYPE_BLANK
        );

        let empty_device = SmartObject::new("", "type");
        assert_eq!(
            message(validate_create(Some(&empty_device)).unwrap_err()),
            BODY_DEVICE_ID_BLANK
        );

        let ok = SmartObject::new("device", "type");
        let (_, device_id) = validate_create(Some(&ok)).unwrap();
        assert_eq!(device_id, "device");
    }

    #[test]
    fn test_create_identifier_checked_before_object_type() {
        let neither = SmartObject::default();
        assert_eq!(
            message(validate_create(Some(&neither)).unwrap_err()),
            BODY_DEVICE_ID_BLANK
        );
    }

    #[test]
    fn test_update_uses_explicit_device_id() {
        let object = SmartObject::new("", "type");
        let (_, device_id) = validate_update(Some(&object), Some("deviceId")).unwrap();
        assert_eq!(device_id, "deviceId");

        let with_id = SmartObject::new("deviceId", "type");
        assert_eq!(
            message(validate_update(Some(&with_id), Some("")).unwrap_err()),
            DEVICE_ID_BLANK
        );
        assert_eq!(
            message(validate_update(None, Some("deviceId")).unwrap_err()),
            OBJECT_BODY_REQUIRED
        );
    }

    #[test]
    fn test_delete_and_create_or_update() {
        assert_eq!(message(validate_delete(None).unwrap_err()), DEVICE_ID_BLANK);
        assert_eq!(message(validate_delete(Some("")).unwrap_err()), DEVICE_ID_BLANK);
        assert_eq!(validate_delete(Some("d")).unwrap(), "d");

        assert_eq!(
            message(validate_create_or_update(None).unwrap_err()),
            OBJECT_LIST_REQUIRED
        );
        assert!(validate_create_or_update(Some(&[])).unwrap().is_empty());
    }
}
