use crate::{backend::HashBackend, error::HmacError, Algorithm};

/// Hash context backed by ring
pub struct Context {
    algorithm: Algorithm,
    inner: ring::digest::Context,
}

impl Context {
    pub fn new(algorithm: Algorithm) -> Result<Self, HmacError> {
        let digest = match algorithm {
            Algorithm::Sha1 => &ring::digest::SHA1_FOR_LEGACY_USE_ONLY,
            Algorithm::Sha256 => &ring::digest::SHA256,
            Algorithm::Sha384 => &ring::digest::SHA384,
            Algorithm::Sha512 => &ring::digest::SHA512,
        };
        Ok(Context {
            algorithm,
            inner: ring::digest::Context::new(digest),
        })
    }
}

impl HashBackend for Context {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn update(&mut self, data: &[u8]) -> Result<(), HmacError> {
        self.inner.update(data);
        Ok(())
    }

    fn finalize(self: Box<Self>) -> Result<Vec<u8>, HmacError> {
        Ok(self.inner.finish().as_ref().to_vec())
    }
}
