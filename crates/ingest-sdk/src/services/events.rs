//! Event ingestion

use crate::error::SdkResult;
use crate::models::{Event, ItemResult};
use crate::uri::{EVENT_PATH, EVENT_PATH_SEGMENT, OBJECT_PATH};
use crate::validation;

use super::{Operation, ServiceContext};

/// Submits batches of events
#[derive(Clone)]
pub struct EventsService {
    ctx: ServiceContext,
}

impl EventsService {
    pub(crate) fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// POST a batch of events to `{base}/events`.
    ///
    /// Returns one result per event as reported by the server; items the
    /// server rejected come back as error entries rather than as an `Err`.
    pub fn send<'a>(&self, events: impl Into<Option<&'a [Event]>>) -> SdkResult<Vec<ItemResult>> {
        let operation = Operation::SendEvents;
        let events = self
            .ctx
            .checked(operation, validation::validate_send(events.into()))?;

        let url = self.ctx.url([EVENT_PATH]);
        let payload = ServiceContext::encode(events)?;
        let body = self.ctx.post(operation, &url, &payload, events.len())?;
        self.ctx.results(operation, body)
    }

    /// POST a batch of events owned by one device to
    /// `{base}/objects/{device_id}/events`
    pub fn send_for_device<'a>(
        &self,
        device_id: impl Into<Option<&'a str>>,
        events: impl Into<Option<&'a [Event]>>,
    ) -> SdkResult<Vec<ItemResult>> {
        let operation = Operation::SendDeviceEvents;
        let (device_id, events) = self.ctx.checked(
            operation,
            validation::validate_send_for_device(device_id.into(), events.into()),
        )?;

        let url = self.ctx.url([OBJECT_PATH, device_id, EVENT_PATH_SEGMENT]);
        let payload = ServiceContext::encode(events)?;
        let body = self.ctx.post(operation, &url, &payload, events.len())?;
        self.ctx.results(operation, body)
    }
}
