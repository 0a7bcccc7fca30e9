use crate::Result;

/// A trait for sources of random payload bytes.
///
/// This abstraction allows you to plug in a secure random generator or a
/// mocked source in tests. It takes `&self`, so a single source may be shared
/// between threads when the implementor is `Sync`.
///
/// # Example
/// ```
/// use ksuid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn try_fill(&self, dest: &mut [u8]) -> ksuid::Result<()> {
///         dest.fill(0xAB);
///         Ok(())
///     }
/// }
///
/// let mut buf = [0; 4];
/// FixedRand.try_fill(&mut buf).unwrap();
/// assert_eq!(buf, [0xAB; 4]);
/// ```
pub trait RandSource {
    /// Fills `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`](crate::Error::Entropy) if the source is
    /// unavailable. Nothing is retried.
    fn try_fill(&self, dest: &mut [u8]) -> Result<()>;
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn try_fill(&self, dest: &mut [u8]) -> Result<()> {
        (**self).try_fill(dest)
    }
}
