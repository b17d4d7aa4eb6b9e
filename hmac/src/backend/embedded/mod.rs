//! Self contained hash implementations (FIPS 180-4), used when the platform
//! library is unwanted or unavailable.

mod sha1;
mod sha256;
mod sha512;

pub use self::{sha1::Sha1, sha256::Sha256, sha512::Sha512};

use zeroize::Zeroize;

use crate::{backend::HashBackend, error::HmacError, Algorithm};

/// Hash context backed by the embedded implementations
pub enum Context {
    /// sha1
    Sha1(Sha1),
    /// sha256
    Sha256(Sha256),
    /// sha384, a truncated sha512 with its own initial state
    Sha384(Sha512),
    /// sha512
    Sha512(Sha512),
}

impl Context {
    /// Start a hash of `algorithm`
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sha1 => Context::Sha1(Sha1::new()),
            Algorithm::Sha256 => Context::Sha256(Sha256::new()),
            Algorithm::Sha384 => Context::Sha384(Sha512::new_384()),
            Algorithm::Sha512 => Context::Sha512(Sha512::new()),
        }
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
            Context::Sha384(ref mut hash) | Context::Sha512(ref mut hash) => hash.update(data),
        }
        Ok(())
    }

    fn finalize(self: Box<Self>) -> Result<Vec<u8>, HmacError> {
        Ok(match *self {
            Context::Sha1(hash) => hash.finalize().to_vec(),
            Context::Sha256(hash) => hash.finalize().to_vec(),
            Context::Sha384(hash) => hash.finalize()[..Algorithm::Sha384.digest_size()].to_vec(),
            Context::Sha512(hash) => hash.finalize().to_vec(),
        })
    }
}

/// Block buffering shared by the Merkle-Damgard hashes.
///
/// Holds at most `N - 1` pending bytes between calls.
struct BlockBuffer<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> BlockBuffer<N> {
    const fn new() -> Self {
        BlockBuffer {
            data: [0; N],
            len: 0,
        }
    }

    /// Feed `input`, calling `compress` on every full block.
    fn absorb<F: FnMut(&[u8])>(&mut self, mut input: &[u8], mut compress: F) {
        if self.len > 0 {
            let take = (N - self.len).min(input.len());
            self.data[self.len..self.len + take].copy_from_slice(&input[..take]);
            self.len += take;
            input = &input[take..];
            if self.len < N {
                return;
            }
            compress(&self.data[..]);
            self.len = 0;
        }

        let mut blocks = input.chunks_exact(N);
        for block in &mut blocks {
            compress(block);
        }
        let rest = blocks.remainder();
        self.data[..rest.len()].copy_from_slice(rest);
        self.len = rest.len();
    }

    /// Append `0x80`, zero fill and the big endian message length, compressing
    /// the final one or two blocks.
    fn pad<F: FnMut(&[u8])>(&mut self, length: &[u8], mut compress: F) {
        let length_at = N - length.len();

        self.data[self.len] = 0x80;
        self.len += 1;
        if self.len > length_at {
            self.data[self.len..].fill(0);
            compress(&self.data[..]);
            self.len = 0;
        }
        self.data[self.len..length_at].fill(0);
        self.data[length_at..].copy_from_slice(length);
        compress(&self.data[..]);
        self.len = 0;
    }
}

impl<const N: usize> Drop for BlockBuffer<N> {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use ::sha2::Digest;

    fn embedded(algorithm: Algorithm, data: &[u8], step: usize) -> Vec<u8> {
        let mut ctx = Box::new(Context::new(algorithm));
        for chunk in data.chunks(step.max(1)) {
            ctx.update(chunk).unwrap();
        }
        ctx.finalize().unwrap()
    }

    fn reference(algorithm: Algorithm, data: &[u8]) -> Vec<u8> {
        match algorithm {
            Algorithm::Sha1 => ::sha1::Sha1::digest(data).to_vec(),
            Algorithm::Sha256 => ::sha2::Sha256::digest(data).to_vec(),
            Algorithm::Sha384 => ::sha2::Sha384::digest(data).to_vec(),
            Algorithm::Sha512 => ::sha2::Sha512::digest(data).to_vec(),
        }
    }

    #[test]
    fn test_padding_boundaries() {
        // lengths around the point where the length field spills into a second block
        let data = (0..=255u8).cycle().take(600).collect::<Vec<_>>();
        for algorithm in Algorithm::ALL {
            let block = algorithm.block_size();
            let lengths = [
                0,
                1,
                block - 17,
                block - 16,
                block - 9,
                block - 8,
                block - 1,
                block,
                block + 1,
                2 * block,
                599,
            ];
            for len in lengths {
                assert_eq!(
                    embedded(algorithm, &data[..len], len),
                    reference(algorithm, &data[..len]),
                    "{:?} len {}",
                    algorithm,
                    len
                );
            }
        }
    }

    #[test]
    fn test_million_a() {
        let data = vec![b'a'; 1_000_000];
        assert_eq!(
            hex::encode(embedded(Algorithm::Sha1, &data, 4096)),
            "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
        );
        assert_eq!(
            hex::encode(embedded(Algorithm::Sha256, &data, 4096)),
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
        );
    }

    #[test]
    fn test_two_block_message() {
        let data = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        assert_eq!(
            hex::encode(embedded(Algorithm::Sha256, data, 7)),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    proptest! {
        #[test]
        fn test_embedded_matches_rustcrypto(data: Vec<u8>, step in 1usize..300) {
            for algorithm in Algorithm::ALL {
                let expected = reference(algorithm, &data);
                assert_eq!(embedded(algorithm, &data, data.len()), expected.clone());
                assert_eq!(embedded(algorithm, &data, step), expected);
            }
        }
    }
}
