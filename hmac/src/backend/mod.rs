use zeroize::Zeroizing;

use crate::{error::HmacError, Algorithm};

/// Pure Rust sha1/sha2
pub mod embedded;
mod native;

/// Variant backend which contains any hash implementation
pub type BoxHashBackend = Box<dyn HashBackend + Send>;

/// A running hash computation.
///
/// `update` could be called multiple times, feeding the message in order.
/// `finalize` consumes the backend and returns the digest; the resources of the
/// underlying implementation are released with it.
pub trait HashBackend {
    /// Algorithm this backend computes.
    fn algorithm(&self) -> Algorithm;
    /// Feeds data into the running hash.
    fn update(&mut self, data: &[u8]) -> Result<(), HmacError>;
    /// Finishes the hash, returning exactly `digest_size` bytes.
    fn finalize(self: Box<Self>) -> Result<Vec<u8>, HmacError>;

    /// Block size of the algorithm, in bytes.
    fn block_size(&self) -> usize {
        self.algorithm().block_size()
    }

    /// Digest size of the algorithm, in bytes.
    fn digest_size(&self) -> usize {
        self.algorithm().digest_size()
    }
}

/// Which family of implementations backs the hashes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Platform crypto library: openssl on unix, ring on other native targets,
    /// RustCrypto on wasm
    Native,
    /// Pure Rust implementation from this crate
    Embedded,
}

impl BackendKind {
    /// Name, as accepted by `str::parse`.
    pub const fn name(self) -> &'static str {
        crate::support::backend_name(self)
    }
}

/// Generate a fresh hash context for `algorithm`
pub fn new_backend(kind: BackendKind, algorithm: Algorithm) -> Result<BoxHashBackend, HmacError> {
    match kind {
        BackendKind::Native => Ok(Box::new(native::Context::new(algorithm)?)),
        BackendKind::Embedded => Ok(Box::new(embedded::Context::new(algorithm))),
    }
}

/// Single shot hash of `data`.
///
/// The output is wiped on drop, since it may hold a shortened key.
pub fn digest(
    kind: BackendKind,
    algorithm: Algorithm,
    data: &[u8],
) -> Result<Zeroizing<Vec<u8>>, HmacError> {
    let mut ctx = new_backend(kind, algorithm)?;
    ctx.update(data)?;
    ctx.finalize().map(Zeroizing::new)
}

#[cfg(test)]
mod test {
    use super::*;

    // FIPS 180 "abc" and empty message vectors
    const VECTORS: [(Algorithm, &str, &str); 4] = [
        (
            Algorithm::Sha1,
            "a9993e364706816aba3e25717850c26c9cd0d89d",
            "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        ),
        (
            Algorithm::Sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ),
        (
            Algorithm::Sha384,
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
        ),
        (
            Algorithm::Sha512,
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
        ),
    ];

    #[test]
    fn test_known_digests() {
        for kind in [BackendKind::Native, BackendKind::Embedded] {
            for (algorithm, abc, empty) in VECTORS {
                let out = digest(kind, algorithm, b"abc").unwrap();
                assert_eq!(hex::encode(&*out), abc, "{:?} {:?}", kind, algorithm);

                let out = digest(kind, algorithm, b"").unwrap();
                assert_eq!(hex::encode(&*out), empty, "{:?} {:?}", kind, algorithm);
            }
        }
    }

    #[test]
    fn test_sizes_reported() {
        for kind in [BackendKind::Native, BackendKind::Embedded] {
            for algorithm in Algorithm::ALL {
                let ctx = new_backend(kind, algorithm).unwrap();
                assert_eq!(ctx.algorithm(), algorithm);
                assert_eq!(ctx.block_size(), algorithm.block_size());
                assert_eq!(ctx.digest_size(), algorithm.digest_size());
                assert_eq!(ctx.finalize().unwrap().len(), algorithm.digest_size());
            }
        }
    }
}
