use async_trait::async_trait;
use intentd::services::launcher::{AppLauncher, LauncherError};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingLauncher {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AppLauncher for RecordingLauncher {
    async fn open_url(&self, locator: &str) -> Result<(), LauncherError> {
        self.calls.lock().unwrap().push(locator.to_string());

        if self.fail {
            return Err(LauncherError::Rejected(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }

        Ok(())
    }
}
