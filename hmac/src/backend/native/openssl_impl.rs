use openssl::hash::{Hasher, MessageDigest};

use crate::{backend::HashBackend, error::HmacError, Algorithm};

/// Hash context backed by openssl's EVP digests
pub struct Context {
    algorithm: Algorithm,
    inner: Hasher,
}

impl Context {
    pub fn new(algorithm: Algorithm) -> Result<Self, HmacError> {
        let digest = match algorithm {
            Algorithm::Sha1 => MessageDigest::sha1(),
            Algorithm::Sha256 => MessageDigest::sha256(),
            Algorithm::Sha384 => MessageDigest::sha384(),
            Algorithm::Sha512 => MessageDigest::sha512(),
        };
        // a FIPS or stripped down openssl build may refuse the digest
        let inner = Hasher::new(digest)
            .map_err(|_| HmacError::UnsupportedAlgorithm(algorithm.name().to_owned()))?;
        Ok(Context { algorithm, inner })
    }
}

impl HashBackend for Context {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn update(&mut self, data: &[u8]) -> Result<(), HmacError> {
        self.inner.update(data)?;
        Ok(())
    }

    fn finalize(mut self: Box<Self>) -> Result<Vec<u8>, HmacError> {
        Ok(self.inner.finish()?.to_vec())
    }
}
