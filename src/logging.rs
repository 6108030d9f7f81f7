//! Logging setup.
//!
//! The TUI owns the terminal, so log records go to a file. Nothing is
//! installed unless `RUST_LOG` is set.

use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::Result;

pub const LOG_ENV: &str = "RUST_LOG";

/// Install a file-backed logger when `RUST_LOG` is present.
///
/// Returns `Ok(false)` when logging stays disabled.
pub fn init(path: &Path) -> Result<bool> {
    if std::env::var_os(LOG_ENV).is_none() {
        return Ok(false);
    }
    init_with_filter(path, None)?;
    Ok(true)
}

/// Install a file-backed logger with an explicit filter, or the one in `RUST_LOG`.
pub fn init_with_filter(path: &Path, filter: Option<&str>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;
    log::info!("logging to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_records_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("sporting.log");
        // only one logger per process; other tests never install one
        init_with_filter(&path, Some("debug")).unwrap();
        log::debug!("hello from the test");
        log::logger().flush();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("hello from the test"));

        assert!(init_with_filter(&path, None).is_err());
    }
}
