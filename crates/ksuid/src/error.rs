use crate::base62::Base62Error;

/// A result type defaulting to the crate [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors `ksuid` can produce.
///
/// Every error is local to the call that returned it; no partial output is
/// handed back alongside one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Base62 decoding failed, or a bit cursor left its buffer.
    ///
    /// This wraps [`Base62Error`].
    #[error(transparent)]
    Base62Error(#[from] Base62Error),

    /// The random source could not produce the payload.
    #[error("entropy source failed: {reason}")]
    Entropy {
        /// Description reported by the source.
        reason: String,
    },

    /// The instant does not fit in a signed 32-bit offset from
    /// [`KSUID_EPOCH`](crate::KSUID_EPOCH).
    #[error("{secs}s since the unix epoch is outside the KSUID timestamp range")]
    TimestampOutOfRange {
        /// The instant, in whole seconds since the Unix epoch.
        secs: i64,
    },

    /// The input is longer than any encoded KSUID, so its payload would
    /// exceed 16 bytes.
    #[error("encoded KSUID has {len} characters, at most 27 are allowed")]
    TooLong {
        /// Number of characters in the input.
        len: usize,
    },

    /// A decoded identifier is too short to hold the 4-byte timestamp.
    #[error("decoded KSUID has {len} bytes, the timestamp alone needs 4")]
    Truncated {
        /// Number of bytes recovered.
        len: usize,
    },
}
