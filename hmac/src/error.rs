use crate::session::SessionStatus;
use thiserror::Error;

/// Error of the hmac engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HmacError {
    /// The algorithm is unknown or the selected backend can't compute it
    #[error("unsupported hash algorithm: `{0}`")]
    UnsupportedAlgorithm(String),
    /// Session is not ready: already finalized, errored or released
    #[error("session is not ready, status: `{0:?}`")]
    InvalidState(SessionStatus),
    /// Output buffer can't hold the digest, nothing was written
    #[error("output buffer too small, need {needed} bytes, got {available}")]
    BufferTooSmall {
        /// digest size of the session
        needed: usize,
        /// size of the buffer passed in
        available: usize,
    },
    /// Argument rejected before any hashing happened
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The underlying hash implementation failed
    #[error("hash backend failure: {0}")]
    BackendFailure(String),
}

/// Discriminant of [`HmacError`], cheap to copy into a session status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`HmacError::UnsupportedAlgorithm`]
    UnsupportedAlgorithm,
    /// See [`HmacError::InvalidState`]
    InvalidState,
    /// See [`HmacError::BufferTooSmall`]
    BufferTooSmall,
    /// See [`HmacError::InvalidArgument`]
    InvalidArgument,
    /// See [`HmacError::BackendFailure`]
    BackendFailure,
}

impl HmacError {
    /// Kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HmacError::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
            HmacError::InvalidState(_) => ErrorKind::InvalidState,
            HmacError::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
            HmacError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            HmacError::BackendFailure(_) => ErrorKind::BackendFailure,
        }
    }

    /// Only `BufferTooSmall` leaves the session usable.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        self.kind() == ErrorKind::BufferTooSmall
    }
}

#[cfg(unix)]
impl From<openssl::error::ErrorStack> for HmacError {
    fn from(err: openssl::error::ErrorStack) -> HmacError {
        HmacError::BackendFailure(err.to_string())
    }
}
