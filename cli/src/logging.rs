// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs::OpenOptions, path::PathBuf, sync::Arc};

use eventboard_core::APP_NAME;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// The terminal belongs to the board while it is open, so records go to
/// `<state dir>/eventboard/eventboard.log`. Without a state directory they go
/// to stderr.
pub fn init() -> Result<(), Box<dyn Error>> {
    let Some(path) = log_file() else {
        return install(std::io::stderr);
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create log directory {}: {}", dir.display(), e))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?;

    install(Arc::new(file))?;
    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(())
}

fn install<W>(writer: W) -> Result<(), Box<dyn Error>>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
        .try_init()
        .map_err(|e| format!("Failed to install log subscriber: {e}"))?;
    Ok(())
}

fn log_file() -> Option<PathBuf> {
    get_state_dir().map(|dir| dir.join(APP_NAME).join(format!("{APP_NAME}.log")))
}

fn get_state_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_local_dir();
    state_dir
}
