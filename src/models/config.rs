use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub port: u16,

    pub bridge_url: String,

    pub logs_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1".to_string(),
            port: 7700,
            bridge_url: "http://127.0.0.1:7701/open".to_string(),
            logs_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logs_dir.as_ref().map(|dir| dir.join("intentd.log"))
    }
}
