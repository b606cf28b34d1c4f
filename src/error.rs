//! Error types for filepick.

use thiserror::Error;

use crate::layout::{MIN_HEIGHT, MIN_WIDTH};

/// Errors that can occur while running the dialog.
#[derive(Debug, Error)]
pub enum Error {
    /// No native console input API is available on this platform.
    ///
    /// Only one platform family is modeled; supporting another means adding
    /// another [`ConsoleBackend`](crate::input::ConsoleBackend) implementation.
    #[error("no native console input API is available on this platform")]
    UnsupportedPlatform,

    /// The terminal is too small to hold the bordered panel layout.
    #[error("terminal too small: {width}x{height} (minimum {MIN_WIDTH}x{MIN_HEIGHT})")]
    TerminalTooSmall { width: u16, height: u16 },

    /// IO error from console or filesystem operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_message() {
        let err = Error::UnsupportedPlatform;
        assert!(err.to_string().contains("native console input API"));
    }

    #[test]
    fn test_too_small_names_both_dimensions() {
        let err = Error::TerminalTooSmall {
            width: 4,
            height: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("4x3"));
        assert!(msg.contains("minimum"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
