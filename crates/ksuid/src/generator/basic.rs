use crate::{
    Result,
    id::{Ksuid, PAYLOAD_LEN},
    rand::RandSource,
    time::TimeSource,
};
use std::time::SystemTime;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// A stateless KSUID generator over an injected clock and random source.
///
/// Every call reads the clock once and draws a fresh 16-byte payload; nothing
/// is carried between calls, so one generator can be shared across threads
/// whenever `T` and `R` are `Sync`.
///
/// ## Features
/// - ✅ Thread-safe (given thread-safe sources)
/// - ✅ Probabilistically unique (128 random bits per ID)
/// - ✅ Roughly time-ordered (second resolution)
///
/// ## See Also
/// - [`generate`] and [`generate_at`] for the default system sources
///
/// [`generate`]: crate::generate
/// [`generate_at`]: crate::generate_at
#[derive(Clone, Debug, Default)]
pub struct KsuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    time: T,
    rng: R,
}

impl<T, R> KsuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`KsuidGenerator`] with the provided time source and
    /// random source.
    ///
    /// # Example
    /// ```
    /// use ksuid::{KsuidGenerator, SystemClock, ThreadRandom};
    ///
    /// let generator = KsuidGenerator::new(SystemClock, ThreadRandom);
    /// let id = generator.generate().unwrap();
    /// assert!(id.len() <= 27);
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates an encoded KSUID stamped with the current time.
    ///
    /// # Errors
    ///
    /// - [`Error::Entropy`] if the random source fails
    /// - [`Error::TimestampOutOfRange`] if the clock reads outside the
    ///   32-bit KSUID range
    ///
    /// [`Error::Entropy`]: crate::Error::Entropy
    /// [`Error::TimestampOutOfRange`]: crate::Error::TimestampOutOfRange
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Result<String> {
        self.generate_raw()?.encode()
    }

    /// Generates an encoded KSUID stamped with `instant`.
    ///
    /// # Errors
    ///
    /// See [`Self::generate`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_at(&self, instant: SystemTime) -> Result<String> {
        self.generate_raw_at(instant)?.encode()
    }

    /// Generates a raw KSUID stamped with the current time.
    ///
    /// # Errors
    ///
    /// See [`Self::generate`].
    pub fn generate_raw(&self) -> Result<Ksuid> {
        self.generate_raw_at(self.time.now())
    }

    /// Generates a raw KSUID stamped with `instant`.
    ///
    /// # Errors
    ///
    /// See [`Self::generate`].
    pub fn generate_raw_at(&self, instant: SystemTime) -> Result<Ksuid> {
        let mut payload = [0; PAYLOAD_LEN];
        self.rng.try_fill(&mut payload)?;
        Ksuid::from_instant(instant, payload)
    }
}
