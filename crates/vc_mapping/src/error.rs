use thiserror::Error;

// -----------------------------------------------------------------------------
// CodecError

/// A failure of the JSON codec.
///
/// Inside the engine these errors only drop the affected field or element;
/// the entry points of `vc_json` return them to the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodecError {
    #[error("failed to encode flat value: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode flat value: {0}")]
    Decode(#[source] serde_json::Error),
}

impl CodecError {
    /// Returns `true` if the input ended before a complete value was read.
    pub fn is_eof(&self) -> bool {
        match self {
            CodecError::Decode(e) => e.is_eof(),
            CodecError::Encode(_) => false,
        }
    }
}
