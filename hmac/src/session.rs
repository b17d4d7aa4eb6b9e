use log::{debug, trace};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use std::{fmt, mem};

use crate::{
    backend::{self, BackendKind, BoxHashBackend},
    error::{ErrorKind, HmacError},
    Algorithm,
};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Lifecycle status of a [`HmacSession`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Accepts `update` and `finalize`
    Ready,
    /// MAC was produced
    Finalized,
    /// Aborted by an error of this kind
    Errored(ErrorKind),
    /// `cleanup` was called before finalizing
    Released,
}

enum State {
    /// Running inner hash over `(K ^ ipad) || message`
    Ready(BoxHashBackend),
    Closed(SessionStatus),
}

/// One incremental HMAC computation.
///
/// `init` derives the padded key blocks and starts the inner hash, `update`
/// appends message bytes, `finalize` runs the outer hash and writes the MAC.
/// The raw key is never stored, and the outer key block is wiped once the
/// session is finalized, errored, released or dropped.
///
/// A session has no internal locking; concurrent streams need one session each.
pub struct HmacSession {
    algorithm: Algorithm,
    backend: BackendKind,
    digest_size: usize,
    state: State,
    outer_key: Zeroizing<Vec<u8>>,
    last_error: Option<HmacError>,
}

impl HmacSession {
    /// Start a session for `algorithm` keyed with `key` on the given backend.
    ///
    /// Keys longer than the block size are hashed first, shorter keys are zero
    /// padded, as RFC 2104 requires. An empty key is rejected.
    pub fn new(backend: BackendKind, algorithm: Algorithm, key: &[u8]) -> Result<Self, HmacError> {
        if key.is_empty() {
            return Err(HmacError::InvalidArgument("key must not be empty"));
        }

        let block_size = algorithm.block_size();
        let mut key_block = Zeroizing::new(vec![0; block_size]);
        if key.len() > block_size {
            let shortened = backend::digest(backend, algorithm, key)?;
            key_block[..shortened.len()].copy_from_slice(&shortened);
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let inner_key = Zeroizing::new(key_block.iter().map(|b| b ^ IPAD).collect::<Vec<u8>>());
        let outer_key = Zeroizing::new(key_block.iter().map(|b| b ^ OPAD).collect::<Vec<u8>>());

        let mut inner = backend::new_backend(backend, algorithm)?;
        inner.update(&inner_key)?;

        trace!(
            "hmac session init: algorithm={:?}, backend={:?}",
            algorithm,
            backend
        );

        Ok(HmacSession {
            algorithm,
            backend,
            digest_size: algorithm.digest_size(),
            state: State::Ready(inner),
            outer_key,
            last_error: None,
        })
    }

    /// Appends `data` to the message.
    ///
    /// Calling it with `A` then `B` is identical to calling it once with `A || B`.
    /// Empty data is a no-op.
    pub fn update(&mut self, data: &[u8]) -> Result<(), HmacError> {
        let status = self.status();
        let result = match self.state {
            State::Ready(ref mut inner) => {
                if data.is_empty() {
                    return Ok(());
                }
                inner.update(data)
            }
            State::Closed(_) => Err(HmacError::InvalidState(status)),
        };
        result.map_err(|err| self.record(err))
    }

    /// Finishes the MAC into the front of `output`, returning the number of
    /// bytes written, always `digest_size`.
    ///
    /// If `output` is too short nothing is written and the session stays
    /// ready, so the call can be retried with a larger buffer. Any other
    /// outcome closes the session.
    pub fn finalize(&mut self, output: &mut [u8]) -> Result<usize, HmacError> {
        if self.is_ready() && output.len() < self.digest_size {
            return Err(self.record(HmacError::BufferTooSmall {
                needed: self.digest_size,
                available: output.len(),
            }));
        }

        let inner = match mem::replace(&mut self.state, State::Closed(SessionStatus::Finalized)) {
            State::Ready(inner) => inner,
            State::Closed(status) => {
                self.state = State::Closed(status);
                return Err(self.record(HmacError::InvalidState(status)));
            }
        };

        match self.outer_hash(inner) {
            Ok(mac) => {
                output[..self.digest_size].copy_from_slice(&mac);
                self.release(SessionStatus::Finalized);
                trace!("hmac session finalized: algorithm={:?}", self.algorithm);
                Ok(self.digest_size)
            }
            Err(err) => Err(self.record(err)),
        }
    }

    /// Finishes the MAC into a new buffer.
    pub fn finalize_vec(&mut self) -> Result<Vec<u8>, HmacError> {
        let mut output = vec![0; self.digest_size];
        self.finalize(&mut output)?;
        Ok(output)
    }

    /// Finishes the MAC and compares it with `expected` in constant time.
    pub fn verify(&mut self, expected: &[u8]) -> Result<bool, HmacError> {
        let mac = Zeroizing::new(self.finalize_vec()?);
        Ok(bool::from(mac.as_slice().ct_eq(expected)))
    }

    /// Releases the backend and wipes the key block without producing a MAC.
    ///
    /// Safe to call in any status, any number of times.
    pub fn cleanup(&mut self) {
        let status = match self.status() {
            SessionStatus::Ready => SessionStatus::Released,
            closed => closed,
        };
        self.release(status);
        trace!("hmac session cleanup: status={:?}", status);
    }

    /// Algorithm of this session
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Backend family of this session
    #[inline]
    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    /// Size of the MAC this session produces
    #[inline]
    pub fn digest_size(&self) -> usize {
        self.digest_size
    }

    /// Current status
    pub fn status(&self) -> SessionStatus {
        match self.state {
            State::Ready(_) => SessionStatus::Ready,
            State::Closed(status) => status,
        }
    }

    /// Whether `update` and `finalize` are accepted
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// The last error any call on this session returned
    pub fn last_error(&self) -> Option<&HmacError> {
        self.last_error.as_ref()
    }

    /// H((K ^ opad) || H((K ^ ipad) || message))
    fn outer_hash(&self, inner: BoxHashBackend) -> Result<Zeroizing<Vec<u8>>, HmacError> {
        let inner_digest = Zeroizing::new(inner.finalize()?);
        self.check_digest_len(&inner_digest)?;

        let mut outer = backend::new_backend(self.backend, self.algorithm)?;
        outer.update(&self.outer_key)?;
        outer.update(&inner_digest)?;
        let mac = Zeroizing::new(outer.finalize()?);
        self.check_digest_len(&mac)?;
        Ok(mac)
    }

    fn check_digest_len(&self, digest: &[u8]) -> Result<(), HmacError> {
        if digest.len() == self.digest_size {
            Ok(())
        } else {
            Err(HmacError::BackendFailure(format!(
                "{:?} backend returned {} bytes, expected {}",
                self.backend,
                digest.len(),
                self.digest_size
            )))
        }
    }

    fn release(&mut self, status: SessionStatus) {
        self.state = State::Closed(status);
        self.outer_key.zeroize();
    }

    /// Remember `err`, closing the session unless the error leaves it usable
    /// or it is already closed.
    fn record(&mut self, err: HmacError) -> HmacError {
        match err.kind() {
            ErrorKind::BufferTooSmall | ErrorKind::InvalidState => (),
            kind => {
                debug!(
                    "hmac session aborted: algorithm={:?}, backend={:?}, error={}",
                    self.algorithm, self.backend, err
                );
                self.release(SessionStatus::Errored(kind));
            }
        }
        self.last_error = Some(err.clone());
        err
    }
}

impl fmt::Debug for HmacSession {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HmacSession")
            .field("algorithm", &self.algorithm)
            .field("backend", &self.backend)
            .field("status", &self.status())
            .finish()
    }
}
