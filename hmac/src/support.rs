use crate::{backend::BackendKind, error::HmacError, Algorithm};

use std::str::FromStr;

const SHA_1: &str = "SHA1";
const SHA_256: &str = "SHA256";
const SHA_384: &str = "SHA384";
const SHA_512: &str = "SHA512";

const NATIVE: &str = "native";
const EMBEDDED: &str = "embedded";

pub(crate) const fn algorithm_name(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Sha1 => SHA_1,
        Algorithm::Sha256 => SHA_256,
        Algorithm::Sha384 => SHA_384,
        Algorithm::Sha512 => SHA_512,
    }
}

pub(crate) const fn backend_name(kind: BackendKind) -> &'static str {
    match kind {
        BackendKind::Native => NATIVE,
        BackendKind::Embedded => EMBEDDED,
    }
}

/// Accepts `SHA256`, `sha256` and `sha-256` alike.
impl FromStr for Algorithm {
    type Err = HmacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "").to_ascii_uppercase();
        match normalized.as_str() {
            SHA_1 => Ok(Algorithm::Sha1),
            SHA_256 => Ok(Algorithm::Sha256),
            SHA_384 => Ok(Algorithm::Sha384),
            SHA_512 => Ok(Algorithm::Sha512),
            _ => Err(HmacError::UnsupportedAlgorithm(s.to_owned())),
        }
    }
}

impl FromStr for BackendKind {
    type Err = HmacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            NATIVE => Ok(BackendKind::Native),
            EMBEDDED => Ok(BackendKind::Embedded),
            _ => Err(HmacError::InvalidArgument("unknown hash backend")),
        }
    }
}
