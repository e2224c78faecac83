//! Error types for timecode operations.

use thiserror::Error;

use crate::framerate::Framerate;

/// Main error type for timecode construction, parsing and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    #[error("Invalid timecode: {0}")]
    InvalidTimecode(String),

    #[error("Drop-frame is not supported at {0} fps")]
    DropFrameUnsupported(Framerate),

    #[error("Unknown framerate: {0}")]
    UnknownFramerate(String),

    #[error("Framerate mismatch: {left} vs {right}")]
    FramerateMismatch { left: Framerate, right: Framerate },
}

impl TimecodeError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidTimecode(message.into())
    }
}

/// Result type alias for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;
