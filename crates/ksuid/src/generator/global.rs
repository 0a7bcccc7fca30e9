//! One-call KSUID generation using the system clock and the thread-local
//! RNG.
//!
//! # Example
//! ```rust
//! let id = ksuid::generate().unwrap();
//! let millis = ksuid::timestamp_millis(&id).unwrap();
//! assert!(millis > 1_400_000_000_000);
//! ```

use crate::{KsuidGenerator, Result, SystemClock, ThreadRandom};
use std::time::SystemTime;

const GENERATOR: KsuidGenerator<SystemClock, ThreadRandom> =
    KsuidGenerator::new(SystemClock, ThreadRandom);

/// Generates a new encoded KSUID for the current time.
///
/// # Errors
///
/// See [`KsuidGenerator::generate`].
pub fn generate() -> Result<String> {
    GENERATOR.generate()
}

/// Generates a new encoded KSUID for `instant`.
///
/// # Errors
///
/// See [`KsuidGenerator::generate`].
///
/// # Example
/// ```rust
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let instant = UNIX_EPOCH + Duration::from_millis(1_600_000_000_250);
/// let id = ksuid::generate_at(instant).unwrap();
/// assert_eq!(ksuid::timestamp_millis(&id).unwrap(), 1_600_000_000_000);
/// ```
pub fn generate_at(instant: SystemTime) -> Result<String> {
    GENERATOR.generate_at(instant)
}
