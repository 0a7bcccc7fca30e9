use crate::{Error, RandSource, Result};
use rand::{TryRngCore, rngs::OsRng};

/// A `RandSource` that reads straight from the operating system.
///
/// Slower than [`ThreadRandom`](crate::ThreadRandom), but reports entropy
/// failures as [`Error::Entropy`] instead of panicking. It may block while the
/// OS pool is being initialised.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn try_fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest).map_err(|err| Error::Entropy {
            reason: err.to_string(),
        })
    }
}
