// src/logging.rs

use crate::constants::APP_NAME;
use crate::errors::PortfolioResult;
use flexi_logger::{detailed_format, FileSpec, Logger, LoggerHandle, WriteMode};
use std::path::Path;

/// Starts file logging under `log_dir`.
///
/// The terminal is in raw mode while the UI runs, so nothing goes to stdout or
/// stderr. `RUST_LOG` overrides `level`. Keep the returned handle alive for the
/// lifetime of the program.
pub fn init_logging(level: &str, log_dir: &Path) -> PortfolioResult<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(APP_NAME)
                .suppress_timestamp(),
        )
        .append()
        .format(detailed_format)
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;
    Ok(handle)
}
