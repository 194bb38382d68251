// src/errors.rs

use thiserror::Error;

/// Errors raised by the ambient parts of catchat.
///
/// The widgets themselves never fail: missing controls, empty input and bad
/// cookies all fall back silently. These variants cover config, cookie
/// persistence and audio setup.
#[derive(Error, Debug)]
pub enum CatchatError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatchatError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CatchatError::Config(msg.into())
    }

    pub fn cookie_error(msg: impl Into<String>) -> Self {
        CatchatError::Cookie(msg.into())
    }

    pub fn audio_error(msg: impl Into<String>) -> Self {
        CatchatError::Audio(msg.into())
    }
}

pub type CatchatResult<T> = Result<T, CatchatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_build_matching_variants() {
        assert!(matches!(CatchatError::config_error("x"), CatchatError::Config(_)));
        assert!(matches!(CatchatError::cookie_error("x"), CatchatError::Cookie(_)));
        assert_eq!(
            CatchatError::audio_error("no device").to_string(),
            "Audio error: no device"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> CatchatResult<()> {
            Err::<(), _>(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(CatchatError::Io(_))));
    }
}
