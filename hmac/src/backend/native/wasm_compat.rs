#![allow(dead_code)]

use sha2::Digest;

use crate::{backend::HashBackend, error::HmacError, Algorithm};

/// Hash context backed by the RustCrypto hashes
pub enum Context {
    /// sha1
    Sha1(sha1::Sha1),
    /// sha256
    Sha256(sha2::Sha256),
    /// sha384
    Sha384(sha2::Sha384),
    /// sha512
    Sha512(sha2::Sha512),
}

impl Context {
    pub fn new(algorithm: Algorithm) -> Result<Self, HmacError> {
        Ok(match algorithm {
            Algorithm::Sha1 => Context::Sha1(sha1::Sha1::new()),
            Algorithm::Sha256 => Context::Sha256(sha2::Sha256::new()),
            Algorithm::Sha384 => Context::Sha384(sha2::Sha384::new()),
            Algorithm::Sha512 => Context::Sha512(sha2::Sha512::new()),
        })
    }
}

impl HashBackend for Context {
    fn algorithm(&self) -> Algorithm {
        match *self {
            Context::Sha1(_) => Algorithm::Sha1,
            Context::Sha256(_) => Algorithm::Sha256,
            Context::Sha384(_) => Algorithm::Sha384,
            Context::Sha512(_) => Algorithm::Sha512,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<(), HmacError> {
        match *self {
            Context::Sha1(ref mut hash) => hash.update(data),
            Context::Sha256(ref mut hash) => hash.update(data),
            Context::Sha384(ref mut hash) => hash.update(data),
            Context::Sha512(ref mut hash) => hash.update(data),
        }
        Ok(())
    }

    fn finalize(self: Box<Self>) -> Result<Vec<u8>, HmacError> {
        Ok(match *self {
            Context::Sha1(hash) => hash.finalize().to_vec(),
            Context::Sha256(hash) => hash.finalize().to_vec(),
            Context::Sha384(hash) => hash.finalize().to_vec(),
            Context::Sha512(hash) => hash.finalize().to_vec(),
        })
    }
}
