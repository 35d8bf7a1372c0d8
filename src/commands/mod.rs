use crate::services::launcher::{AppLauncher, spawn_open};
use crate::types::intent::IntentUrl;
use crate::utils::json_path;
use log::info;
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;

// Vendor-assigned intent identifiers, matched byte-for-byte.
pub const OPEN_BLUETOOTH: &str = "com.example.commands.Open-Bluetooth";
pub const CLOSE_BLUETOOTH: &str = "com.example.commands.Close-Bluetooth";

pub const OPEN_AND_PLAY_LOCATOR: &str = "app://bluetooth/open_and_play";
pub const STOP_LOCATOR: &str = "app://bluetooth-music/stop";

const COMMAND_PATH: &str = "inputs.0.payload.commands.0.execution.0.command";

pub fn parse_envelope(raw: &str) -> Option<Value> {
    serde_json::from_str(raw).ok()
}

pub fn dispatch(url: &IntentUrl, launcher: Arc<dyn AppLauncher>) -> Option<JoinHandle<()>> {
    info!("url {:?}", url);

    let envelope = url.request().and_then(parse_envelope);
    let command = envelope
        .as_ref()
        .and_then(|envelope| json_path::get_str(envelope, COMMAND_PATH));

    info!("command {:?}", command);

    match command {
        Some(OPEN_BLUETOOTH) => Some(spawn_open(launcher, OPEN_AND_PLAY_LOCATOR)),
        Some(CLOSE_BLUETOOTH) => Some(spawn_open(launcher, STOP_LOCATOR)),
        _ => None,
    }
}
