/// Convenience alias used by every fallible operation in this crate.
pub type NoisetexResult<T> = Result<T, NoisetexError>;

/// Error taxonomy for the texture pipeline.
///
/// The computation is deterministic and pure given its inputs, so there is no
/// retry story: every error is surfaced synchronously to the caller and no
/// partially filled buffer is ever returned.
#[derive(thiserror::Error, Debug)]
pub enum NoisetexError {
    /// Settings rejected at the synthesis boundary (non-positive scale or
    /// size, NaN/infinite intensities, negative grain).
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Requested size exceeds the configured pixel budget.
    #[error("allocation too large: {0}")]
    AllocationTooLarge(String),

    /// Base and overlay buffers disagree on dimensions.
    #[error("buffer mismatch: {0}")]
    BufferMismatch(String),

    /// Render aborted through a [`CancelToken`](crate::CancelToken).
    #[error("render canceled")]
    Canceled,

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NoisetexError {
    /// Build a [`NoisetexError::InvalidSettings`] from any message.
    pub fn invalid_settings(msg: impl Into<String>) -> Self {
        Self::InvalidSettings(msg.into())
    }

    /// Build a [`NoisetexError::AllocationTooLarge`] from any message.
    pub fn allocation_too_large(msg: impl Into<String>) -> Self {
        Self::AllocationTooLarge(msg.into())
    }

    /// Build a [`NoisetexError::BufferMismatch`] from any message.
    pub fn buffer_mismatch(msg: impl Into<String>) -> Self {
        Self::BufferMismatch(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
