use async_trait::async_trait;
use log::error;
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("bridge request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("bridge rejected open request with status {0}")]
    Rejected(StatusCode),
}

#[async_trait]
pub trait AppLauncher: Send + Sync {
    async fn open_url(&self, locator: &str) -> Result<(), LauncherError>;
}

pub struct HostLauncher {
    client: Client,
    bridge_url: String,
}

impl HostLauncher {
    pub fn new(bridge_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            bridge_url: bridge_url.into(),
        }
    }
}

#[async_trait]
impl AppLauncher for HostLauncher {
    async fn open_url(&self, locator: &str) -> Result<(), LauncherError> {
        let response = self
            .client
            .post(&self.bridge_url)
            .json(&json!({ "url": locator }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LauncherError::Rejected(response.status()));
        }

        Ok(())
    }
}

// Detached on purpose: the dispatcher never waits on the host.
pub fn spawn_open(launcher: Arc<dyn AppLauncher>, locator: &'static str) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(err) = launcher.open_url(locator).await {
            error!("Failed to open {}: {}", locator, err);
        }
    })
}
