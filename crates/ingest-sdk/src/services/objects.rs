//! Smart object management

use crate::error::SdkResult;
use crate::models::{ItemResult, SmartObject};
use crate::transport::Method;
use crate::uri::OBJECT_PATH;
use crate::validation;

use super::{Operation, ServiceContext};

/// Creates, updates and deletes smart objects
#[derive(Clone)]
pub struct ObjectsService {
    ctx: ServiceContext,
}

impl ObjectsService {
    pub(crate) fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// POST a single object to `{base}/objects`.
    ///
    /// The object must carry both a device id and an object type.
    pub fn create<'a>(&self, object: impl Into<Option<&'a SmartObject>>) -> SdkResult<()> {
        let operation = Operation::CreateObject;
        let (object, _) = self
            .ctx
            .checked(operation, validation::validate_create(object.into()))?;

        let url = self.ctx.url([OBJECT_PATH]);
        let payload = ServiceContext::encode(object)?;
        self.ctx.post(operation, &url, &payload, 1)?;
        Ok(())
    }

    /// DELETE `{base}/objects/{device_id}`
    pub fn delete<'a>(&self, device_id: impl Into<Option<&'a str>>) -> SdkResult<()> {
        let operation = Operation::DeleteObject;
        let device_id = self
            .ctx
            .checked(operation, validation::validate_delete(device_id.into()))?;

        let url = self.ctx.url([OBJECT_PATH, device_id]);
        self.ctx
            .exchange(operation, Method::Delete, &url, None, 0)?;
        Ok(())
    }

    /// PUT an object to `{base}/objects/{device_id}`.
    ///
    /// `device_id` addresses the object; the device id inside `object` is
    /// not used for addressing.
    pub fn update<'a>(
        &self,
        object: impl Into<Option<&'a SmartObject>>,
        device_id: impl Into<Option<&'a str>>,
    ) -> SdkResult<()> {
        let operation = Operation::UpdateObject;
        let (object, device_id) = self.ctx.checked(
            operation,
            validation::validate_update(object.into(), device_id.into()),
        )?;

        let url = self.ctx.url([OBJECT_PATH, device_id]);
        let payload = ServiceContext::encode(object)?;
        self.ctx
            .exchange(operation, Method::Put, &url, Some(&payload), 1)?;
        Ok(())
    }

    /// PUT a batch of objects to `{base}/objects`, creating the ones that do
    /// not exist yet and updating the others.
    ///
    /// An empty batch is sent as is.
    pub fn create_or_update<'a>(
        &self,
        objects: impl Into<Option<&'a [SmartObject]>>,
    ) -> SdkResult<Vec<ItemResult>> {
        let operation = Operation::CreateOrUpdateObjects;
        let objects = self.ctx.checked(
            operation,
            validation::validate_create_or_update(objects.into()),
        )?;

        let url = self.ctx.url([OBJECT_PATH]);
        let payload = ServiceContext::encode(objects)?;
        let response = self
            .ctx
            .exchange(operation, Method::Put, &url, Some(&payload), objects.len())?;
        self.ctx.results(operation, response.into_body())
    }
}
