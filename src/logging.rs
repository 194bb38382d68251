// src/logging.rs

use crate::config::Config;
use crate::errors::{CatchatError, CatchatResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use std::path::PathBuf;

/// Sends `log` output to `catchat.log`, since the terminal belongs to the UI.
///
/// `RUST_LOG` wins over the configured level. Keep the returned handle alive
/// for as long as logging is wanted.
pub fn init_logging(config: &Config) -> CatchatResult<LoggerHandle> {
    let directory = log_dir(config)?;

    Logger::try_with_env_or_str(&config.log_level)
        .map_err(|e| CatchatError::config_error(format!("Invalid log level: {}", e)))?
        .log_to_file(
            FileSpec::default()
                .directory(directory)
                .basename("catchat")
                .suppress_timestamp(),
        )
        .append()
        .format(flexi_logger::detailed_format)
        .start()
        .map_err(|e| CatchatError::config_error(format!("Failed to start logger: {}", e)))
}

fn log_dir(config: &Config) -> CatchatResult<PathBuf> {
    if let Some(dir) = &config.log_dir {
        return Ok(dir.clone());
    }
    let data_dir = dirs::data_dir()
        .ok_or_else(|| CatchatError::config_error("Could not determine data directory"))?;
    Ok(data_dir.join("catchat"))
}
