//! Logging init: one tracing subscriber for the whole process, writing to
//! the XDG state file when it can be opened and to stderr otherwise.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,urlsan=debug";

/// Install the global subscriber.
///
/// Prefers `~/.local/state/urlsan/urlsan.log`; when the state dir or log file
/// cannot be opened (read-only home, missing XDG dirs) the subscriber writes
/// to stderr instead and the CLI keeps working.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match open_log_file() {
        Ok((file, path)) => {
            install(filter, Mutex::new(file));
            tracing::info!("logging to {}", path.display());
        }
        Err(err) => {
            install(filter, io::stderr);
            tracing::warn!("log file unavailable, logging to stderr: {}", err);
        }
    }
}

fn install<W>(filter: EnvFilter, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
}

fn open_log_file() -> io::Result<(fs::File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsan")
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&dir)?;
    let path = dir.join("urlsan.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}
