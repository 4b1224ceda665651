//! Shared error type across ssap crates.

use thiserror::Error;

/// Stable error codes for callers that map failures to user-facing states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Command has no statically known endpoint.
    TranslationGap,
    /// Envelope could not be serialized.
    Encoding,
    /// Inbound text could not be parsed.
    Decoding,
    /// Command tag outside the catalog.
    UnsupportedVariant,
    /// Invalid configuration.
    BadConfig,
    /// Unsupported configuration version.
    UnsupportedVersion,
    /// Encoded frame over the configured limit.
    FrameTooLarge,
    /// Transport refused the frame.
    Transport,
}

impl ErrorCode {
    /// String representation used in logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::TranslationGap => "TRANSLATION_GAP",
            ErrorCode::Encoding => "ENCODING",
            ErrorCode::Decoding => "DECODING",
            ErrorCode::UnsupportedVariant => "UNSUPPORTED_VARIANT",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::FrameTooLarge => "FRAME_TOO_LARGE",
            ErrorCode::Transport => "TRANSPORT",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SsapError>;

/// Unified error type used by core and remote.
#[derive(Debug, Error)]
pub enum SsapError {
    /// Non-fatal: the envelope goes out with no target.
    #[error("no uri for command: {command}")]
    TranslationGap { command: &'static str },
    #[error("encoding failed: {0}")]
    Encoding(String),
    #[error("decoding failed: {0}")]
    Decoding(String),
    #[error("unsupported variant: {0}")]
    UnsupportedVariant(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("frame too large: {size} bytes exceeds maximum of {max} bytes")]
    FrameTooLarge { size: usize, max: usize },
    #[error("transport: {0}")]
    Transport(String),
}

impl SsapError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SsapError::TranslationGap { .. } => ErrorCode::TranslationGap,
            SsapError::Encoding(_) => ErrorCode::Encoding,
            SsapError::Decoding(_) => ErrorCode::Decoding,
            SsapError::UnsupportedVariant(_) => ErrorCode::UnsupportedVariant,
            SsapError::BadConfig(_) => ErrorCode::BadConfig,
            SsapError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            SsapError::FrameTooLarge { .. } => ErrorCode::FrameTooLarge,
            SsapError::Transport(_) => ErrorCode::Transport,
        }
    }

    /// Whether the caller may proceed with the request anyway.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SsapError::TranslationGap { .. })
    }
}
