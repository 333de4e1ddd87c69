//! Event-related CLI commands

use anyhow::Result;
use ingest_sdk::{Event, IngestClient};
use std::path::Path;

use crate::commands::read_json;
use crate::output::{print_results, OutputFormat};

/// Send the events in `file`, optionally on behalf of one device
pub fn send_events(
    client: &IngestClient,
    file: &Path,
    device_id: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let events: Vec<Event> = read_json(file)?;

    let results = match device_id {
        Some(device_id) => client
            .events()
            .send_for_device(device_id, events.as_slice())?,
        None => client.events().send(events.as_slice())?,
    };

    print_results(&results, format)
}
