//! Smart object CLI commands

use anyhow::Result;
use ingest_sdk::{IngestClient, SmartObject};
use std::path::Path;

use crate::commands::read_json;
use crate::output::{print_results, print_success, OutputFormat};

/// Create the object described in `file`
pub fn create_object(client: &IngestClient, file: &Path) -> Result<()> {
    let object: SmartObject = read_json(file)?;
    client.objects().create(&object)?;

    print_success(&format!(
        "Created object {}",
        object.device_id().unwrap_or_default()
    ));
    Ok(())
}

/// Update the object addressed by `device_id` with the fields in `file`
pub fn update_object(client: &IngestClient, device_id: &str, file: &Path) -> Result<()> {
    let object: SmartObject = read_json(file)?;
    client.objects().update(&object, device_id)?;

    print_success(&format!("Updated object {}", device_id));
    Ok(())
}

pub fn delete_object(client: &IngestClient, device_id: &str) -> Result<()> {
    client.objects().delete(device_id)?;

    print_success(&format!("Deleted object {}", device_id));
    Ok(())
}

/// Create or update every object listed in `file`
pub fn upsert_objects(client: &IngestClient, file: &Path, format: OutputFormat) -> Result<()> {
    let objects: Vec<SmartObject> = read_json(file)?;
    let results = client.objects().create_or_update(objects.as_slice())?;

    print_results(&results, format)
}
