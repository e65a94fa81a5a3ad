//! Error types

use thiserror::Error;

/// Structural problems in a WAVE container, one kind per distinct
/// precondition so callers can react to the exact failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// A chunk tag did not match the expected constant.
    BadTag,
    /// `audio_format` is not 1 (integer PCM).
    UnsupportedFormat,
    /// `bits_per_sample` is not 16.
    UnsupportedBitDepth,
    /// `block_align` disagrees with channels x bytes-per-sample.
    InconsistentLayout,
    /// The data subchunk declares zero bytes.
    EmptyData,
    /// `subchunk2_size` is not a whole multiple of `block_align`.
    MisalignedData,
}

/// Main error type
#[derive(Debug, Clone, Error)]
pub enum AudiokitError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("IO error: {message}")]
    Io { message: String },
    #[error("Format error: {message}")]
    Format { kind: FormatKind, message: String },
    #[error("Out of memory: {message}")]
    OutOfMemory { message: String },
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Numeric error taxonomy exposed through the diagnostics context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    Ok = 0,
    InvalidArgument = 1,
    Io = 2,
    Format = 3,
    OutOfMemory = 4,
    Internal = 5,
}

impl AudiokitError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument { message: msg.into() }
    }

    pub fn io<S: Into<String>>(msg: S) -> Self {
        Self::Io { message: msg.into() }
    }

    pub fn format<S: Into<String>>(kind: FormatKind, msg: S) -> Self {
        Self::Format { kind, message: msg.into() }
    }

    pub fn out_of_memory<S: Into<String>>(msg: S) -> Self {
        Self::OutOfMemory { message: msg.into() }
    }

    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal { message: msg.into() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Self::Io { .. } => ErrorCode::Io,
            Self::Format { .. } => ErrorCode::Format,
            Self::OutOfMemory { .. } => ErrorCode::OutOfMemory,
            Self::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// The structural failure kind, when the error is a format error.
    pub fn format_kind(&self) -> Option<FormatKind> {
        match self {
            Self::Format { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AudiokitError>;

impl From<std::io::Error> for AudiokitError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}
