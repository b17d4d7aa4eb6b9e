//! Configuration of the engine

use crate::backend::BackendKind;

/// Default hash backend
pub const DEFAULT_BACKEND: BackendKind = BackendKind::Native;

/// Configuration of the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Backend every session of this engine hashes with.
    ///
    /// `Native` uses the platform crypto library, `Embedded` the pure Rust
    /// implementation shipped in this crate. Both produce identical digests.
    pub backend: BackendKind,
}

impl Config {
    /// Replace the backend
    pub fn backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            backend: DEFAULT_BACKEND,
        }
    }
}
