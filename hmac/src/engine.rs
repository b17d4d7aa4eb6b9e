use crate::{config::Config, error::HmacError, session::HmacSession, Algorithm};

/// Entry point creating sessions and running one shot or batch signatures.
///
/// An engine only holds its configuration, it is cheap to copy and may be
/// shared by any number of threads; each call works on its own session.
#[derive(Clone, Copy, Debug, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    /// Engine with the given configuration
    pub fn new(config: Config) -> Self {
        Engine { config }
    }

    /// Configuration of this engine
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start an incremental session.
    pub fn init(&self, algorithm: Algorithm, key: &[u8]) -> Result<HmacSession, HmacError> {
        HmacSession::new(self.config.backend, algorithm, key)
    }

    /// Start an incremental session, the algorithm given by name, e.g. `"SHA256"`.
    pub fn init_named(&self, algorithm: &str, key: &[u8]) -> Result<HmacSession, HmacError> {
        self.init(algorithm.parse()?, key)
    }

    /// Computes `HMAC(key, data)` into the front of `output`, returning the MAC length.
    pub fn compute(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        data: &[u8],
        output: &mut [u8],
    ) -> Result<usize, HmacError> {
        self.sign_with(algorithm, key, output, |session| session.update(data))
    }

    /// Computes one HMAC over `entries` in the order given.
    ///
    /// Same result as [`Engine::compute`] over the concatenated entries; no
    /// entry means the empty message.
    pub fn compute_batch<I, E>(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        entries: I,
        output: &mut [u8],
    ) -> Result<usize, HmacError>
    where
        I: IntoIterator<Item = E>,
        E: AsRef<[u8]>,
    {
        self.sign_with(algorithm, key, output, |session| {
            for entry in entries {
                session.update(entry.as_ref())?;
            }
            Ok(())
        })
    }

    /// Batch signature over parallel arrays of entries and lengths.
    ///
    /// The first `lengths[i]` bytes of `entries[i]` are signed. A missing entry
    /// is only allowed with a zero length, and a length may not exceed its
    /// entry; both mistakes abort the batch with `InvalidArgument`.
    pub fn compute_batch_entries(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        entries: &[Option<&[u8]>],
        lengths: &[usize],
        output: &mut [u8],
    ) -> Result<usize, HmacError> {
        if entries.len() != lengths.len() {
            return Err(HmacError::InvalidArgument(
                "entry count and length count differ",
            ));
        }

        self.sign_with(algorithm, key, output, |session| {
            for (entry, &length) in entries.iter().zip(lengths) {
                match *entry {
                    Some(data) if length <= data.len() => session.update(&data[..length])?,
                    Some(_) => {
                        return Err(HmacError::InvalidArgument("entry length exceeds its buffer"))
                    }
                    None if length == 0 => (),
                    None => {
                        return Err(HmacError::InvalidArgument(
                            "missing entry with nonzero length",
                        ))
                    }
                }
            }
            Ok(())
        })
    }

    /// Computes `HMAC(key, data)` and compares it with `expected` in constant time.
    pub fn verify(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        data: &[u8],
        expected: &[u8],
    ) -> Result<bool, HmacError> {
        let mut session = self.init(algorithm, key)?;
        let result = session
            .update(data)
            .and_then(|_| session.verify(expected));
        session.cleanup();
        result
    }

    /// init, feed, finalize; the session is cleaned up on every path.
    fn sign_with<F>(
        &self,
        algorithm: Algorithm,
        key: &[u8],
        output: &mut [u8],
        feed: F,
    ) -> Result<usize, HmacError>
    where
        F: FnOnce(&mut HmacSession) -> Result<(), HmacError>,
    {
        let mut session = self.init(algorithm, key)?;
        let result = feed(&mut session).and_then(|_| session.finalize(output));
        session.cleanup();
        result
    }
}
