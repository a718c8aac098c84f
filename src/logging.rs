//! Logging setup.
//!
//! The game owns the terminal's alternate screen, so log records go to a
//! file or nowhere. Level comes from `RUST_LOG`, default `info`.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

/// Route `log` records to `path`. Returns whether a logger was installed.
pub fn init(path: Option<&str>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialised")?;

    Ok(true)
}
