use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// KSUID epoch: Tuesday, May 13, 2014 16:53:20 UTC, in seconds since the Unix
/// epoch. Timestamps are stored as an offset from this instant.
pub const KSUID_EPOCH: i64 = 1_400_000_000;

/// A trait for sources of wall-clock time.
///
/// This abstraction allows you to plug in the system clock or a mocked time
/// source in tests.
///
/// # Example
///
/// ```
/// use ksuid::TimeSource;
/// use std::time::{Duration, SystemTime, UNIX_EPOCH};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn now(&self) -> SystemTime {
///         UNIX_EPOCH + Duration::from_secs(1_500_000_000)
///     }
/// }
///
/// assert_eq!(ksuid::unix_seconds_floor(FixedTime.now()), 1_500_000_000);
/// ```
pub trait TimeSource {
    /// Returns the current instant.
    fn now(&self) -> SystemTime;
}

/// A [`TimeSource`] backed by [`SystemTime::now`].
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Whole seconds since the Unix epoch, rounded toward negative infinity.
///
/// Instants before 1970 produce negative values; `1969-12-31T23:59:59.5Z`
/// maps to `-1`.
#[must_use]
pub fn unix_seconds_floor(instant: SystemTime) -> i64 {
    match instant.duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() == 0 {
                -secs
            } else {
                -secs - 1
            }
        }
    }
}

/// The instant `secs` whole seconds after (or before) the Unix epoch.
///
/// Returns `None` if the platform cannot represent it.
#[must_use]
pub fn instant_from_unix_seconds(secs: i64) -> Option<SystemTime> {
    let magnitude = Duration::from_secs(secs.unsigned_abs());
    if secs >= 0 {
        UNIX_EPOCH.checked_add(magnitude)
    } else {
        UNIX_EPOCH.checked_sub(magnitude)
    }
}
