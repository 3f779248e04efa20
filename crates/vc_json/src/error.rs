use thiserror::Error;
use vc_mapping::CodecError;

// -----------------------------------------------------------------------------
// JsonError

/// A failure of a top-level JSON operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("json stream failed: {0}")]
    Io(#[from] std::io::Error),
}

impl JsonError {
    /// Returns `true` if the input ended before a complete document was read.
    pub fn is_eof(&self) -> bool {
        match self {
            JsonError::Codec(e) => e.is_eof(),
            JsonError::Io(e) => e.kind() == std::io::ErrorKind::UnexpectedEof,
        }
    }
}

pub type JsonResult<T> = Result<T, JsonError>;
