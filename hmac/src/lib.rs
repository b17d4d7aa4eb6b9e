//! Keyed hashing (HMAC, RFC 2104) over SHA-1 and the SHA-2 family
//!
//! Three ways to sign:
//!
//! - one shot, [`compute`]
//! - incremental, [`Engine::init`] then [`HmacSession::update`] as many times as
//!   needed, then [`HmacSession::finalize`]
//! - batch, [`compute_batch`] over several discontiguous buffers
//!
//! The hash primitives live behind [`backend::HashBackend`], either the platform
//! crypto library or the embedded pure Rust implementation.

#![deny(missing_docs)]

/// Hash backends
pub mod backend;
/// Engine configuration
pub mod config;
mod engine;
/// Error type
pub mod error;
/// Incremental HMAC session
pub mod session;
/// Algorithm names
mod support;

pub use crate::{
    backend::{BackendKind, HashBackend},
    config::Config,
    engine::Engine,
    error::{ErrorKind, HmacError},
    session::{HmacSession, SessionStatus},
};

/// Possible hash algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Sha1, kept for legacy peers
    Sha1,
    /// Sha256
    Sha256,
    /// Sha384
    Sha384,
    /// Sha512
    Sha512,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Returns the size in bytes of a digest of this kind.
    #[inline]
    pub const fn digest_size(self) -> usize {
        match self {
            Algorithm::Sha1 => 160 / 8,
            Algorithm::Sha256 => 256 / 8,
            Algorithm::Sha384 => 384 / 8,
            Algorithm::Sha512 => 512 / 8,
        }
    }

    /// Returns the size in bytes of the block the compression function consumes.
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            Algorithm::Sha1 | Algorithm::Sha256 => 64,
            Algorithm::Sha384 | Algorithm::Sha512 => 128,
        }
    }

    /// Canonical name, as accepted by `str::parse`.
    #[inline]
    pub const fn name(self) -> &'static str {
        support::algorithm_name(self)
    }
}

/// The largest digest any supported algorithm produces.
pub const MAX_DIGEST_SIZE: usize = Algorithm::Sha512.digest_size();

/// The largest block any supported algorithm consumes.
pub const MAX_BLOCK_SIZE: usize = Algorithm::Sha512.block_size();

/// Computes `HMAC(key, data)` with the default engine.
///
/// Writes the MAC to the front of `output` and returns its length.
pub fn compute(
    algorithm: Algorithm,
    key: &[u8],
    data: &[u8],
    output: &mut [u8],
) -> Result<usize, HmacError> {
    Engine::default().compute(algorithm, key, data, output)
}

/// Computes one HMAC over all `entries`, in order, with the default engine.
///
/// The result equals [`compute`] over the concatenation of the entries.
pub fn compute_batch<I, E>(
    algorithm: Algorithm,
    key: &[u8],
    entries: I,
    output: &mut [u8],
) -> Result<usize, HmacError>
where
    I: IntoIterator<Item = E>,
    E: AsRef<[u8]>,
{
    Engine::default().compute_batch(algorithm, key, entries, output)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sizes() {
        let sizes = Algorithm::ALL
            .iter()
            .map(|a| (a.block_size(), a.digest_size()))
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![(64, 20), (64, 32), (128, 48), (128, 64)]);

        for algorithm in Algorithm::ALL {
            assert!(algorithm.digest_size() <= MAX_DIGEST_SIZE);
            assert!(algorithm.block_size() <= MAX_BLOCK_SIZE);
            assert!(algorithm.digest_size() < algorithm.block_size());
        }
    }

    #[test]
    fn test_free_functions() {
        let mut whole = [0; MAX_DIGEST_SIZE];
        let mut batch = [0; MAX_DIGEST_SIZE];

        let n = compute(Algorithm::Sha256, b"key", b"hello world", &mut whole).unwrap();
        let m = compute_batch(Algorithm::Sha256, b"key", [&b"hello"[..], b" ", b"world"], &mut batch)
            .unwrap();

        assert_eq!(n, 32);
        assert_eq!(m, 32);
        assert_eq!(whole, batch);
        assert!(whole[32..].iter().all(|b| *b == 0));
    }
}
