use anyhow::Result;
use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;
use std::{fs::OpenOptions, path::Path};

pub fn init_logger(log_file: Option<&Path>, log_level: &str) -> Result<()> {
    let log_level = match log_level.to_lowercase().as_str() {
        "debug" => LevelFilter::Debug,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "trace" => LevelFilter::Trace,
        "info" => LevelFilter::Info,
        _ => LevelFilter::Info,
    };
    let mut base_config = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(log_level)
        .chain(std::io::stdout());

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .append(true)
            .open(path)?;
        base_config = base_config.chain(file);
    }

    base_config.apply()?;

    Ok(())
}
