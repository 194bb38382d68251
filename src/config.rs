use crate::constants::{DEFAULT_TIME_TO_START_TYPING_MS, DEFAULT_TYPING_TIME_MS};
use crate::errors::{CatchatError, CatchatResult};
use crate::sequencer::TypingOptions;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::RwLock,
    time::Duration,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub time_to_start_typing_ms: u64,
    pub typing_time_ms: u64,
    pub sound_enabled: bool,
    pub cookie_path: Option<PathBuf>,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_to_start_typing_ms: DEFAULT_TIME_TO_START_TYPING_MS,
            typing_time_ms: DEFAULT_TYPING_TIME_MS,
            sound_enabled: true,
            cookie_path: None,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Typing options for assistant replies.
    pub fn typing_options(&self) -> TypingOptions {
        TypingOptions {
            time_to_start_typing: Duration::from_millis(self.time_to_start_typing_ms),
            typing_time: Duration::from_millis(self.typing_time_ms),
            scroll_to_bottom: true,
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> CatchatResult<()> {
    let config = load_or_create(&get_config_path()?)?;
    *CONFIG
        .write()
        .map_err(|_| CatchatError::config_error("Config lock poisoned"))? = config;
    Ok(())
}

/// Reads the config at `config_path`, writing the defaults there first if it does not exist.
pub fn load_or_create(config_path: &Path) -> CatchatResult<Config> {
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path)
            .map_err(|e| CatchatError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| CatchatError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;
        Ok(config)
    } else {
        let config = Config::default();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CatchatError::config_error(format!("Failed to create config directory: {}", e))
            })?;
        }

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| CatchatError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_path, config_str)
            .map_err(|e| CatchatError::config_error(format!("Failed to write config file: {}", e)))?;

        Ok(config)
    }
}

fn get_config_path() -> CatchatResult<PathBuf> {
    if let Ok(path) = env::var("CATCHAT_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| CatchatError::config_error("Could not determine config directory"))?;

    Ok(config_dir.join("catchat").join("config.json"))
}

fn validate_config(config: &Config) -> CatchatResult<()> {
    if config.typing_time_ms == 0 {
        return Err(CatchatError::config_error("typing_time_ms must be greater than 0"));
    }

    if config.log_level.trim().is_empty() {
        return Err(CatchatError::config_error("log_level is required"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG
        .read()
        .map(|config| config.clone())
        .unwrap_or_default()
}
