use crate::{
    Error, KSUID_EPOCH, Result, base62, instant_from_unix_seconds, unix_seconds_floor,
};
use core::{cmp::Ordering, fmt};
use std::time::SystemTime;

#[cfg(feature = "tracing")]
use tracing::{instrument, trace};

/// Bytes of big-endian timestamp at the start of a KSUID.
pub const TIMESTAMP_LEN: usize = 4;
/// Bytes of random payload following the timestamp.
pub const PAYLOAD_LEN: usize = 16;
/// Total size of a raw KSUID.
pub const KSUID_LEN: usize = TIMESTAMP_LEN + PAYLOAD_LEN;
/// Encoded identifiers are cut to at most this many characters.
pub const MAX_ENCODED_LEN: usize = 27;

/// A raw KSUID: a signed 32-bit second offset from [`KSUID_EPOCH`] followed by
/// 16 random bytes.
///
/// ```text
///  Byte:   0           4                         20
///          +-----------+-------------------------+
///  Field:  | ts (BE32) |      payload (128)      |
///          +-----------+-------------------------+
/// ```
///
/// The text form produced by [`Ksuid::encode`] is capped at
/// [`MAX_ENCODED_LEN`] characters, which usually drops the tail of the
/// payload. Parsing such a string therefore yields a [`ParsedKsuid`] rather
/// than the original `Ksuid`.
///
/// IDs order by signed timestamp offset, then payload, so pre-epoch IDs sort
/// before later ones.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Ksuid {
    bytes: [u8; KSUID_LEN],
}

impl Ksuid {
    /// Builds a KSUID from a raw epoch offset and payload.
    #[must_use]
    pub fn from_parts(timestamp: i32, payload: [u8; PAYLOAD_LEN]) -> Self {
        let mut bytes = [0; KSUID_LEN];
        bytes[..TIMESTAMP_LEN].copy_from_slice(&timestamp.to_be_bytes());
        bytes[TIMESTAMP_LEN..].copy_from_slice(&payload);
        Self { bytes }
    }

    /// Builds a KSUID stamped with `instant`, truncated to whole seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if `instant` is more than
    /// `i32::MAX` seconds away from [`KSUID_EPOCH`].
    pub fn from_instant(instant: SystemTime, payload: [u8; PAYLOAD_LEN]) -> Result<Self> {
        let secs = unix_seconds_floor(instant);
        let timestamp = secs
            .checked_sub(KSUID_EPOCH)
            .and_then(|offset| i32::try_from(offset).ok())
            .ok_or(Error::TimestampOutOfRange { secs })?;
        Ok(Self::from_parts(timestamp, payload))
    }

    /// Wraps an existing 20-byte buffer.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; KSUID_LEN]) -> Self {
        Self { bytes }
    }

    /// The raw 20-byte buffer.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; KSUID_LEN] {
        &self.bytes
    }

    /// Seconds since [`KSUID_EPOCH`] as stored.
    #[must_use]
    pub const fn timestamp_offset(&self) -> i32 {
        i32::from_be_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]])
    }

    /// Seconds since the Unix epoch.
    #[must_use]
    pub const fn unix_seconds(&self) -> i64 {
        KSUID_EPOCH + self.timestamp_offset() as i64
    }

    /// The 16 random bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.bytes[TIMESTAMP_LEN..]
    }

    /// Encodes the KSUID and cuts the result to [`MAX_ENCODED_LEN`]
    /// characters.
    ///
    /// Nothing is padded when the encoding comes out shorter.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::Base62Error`], which does not occur for a 20-byte
    /// buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use ksuid::Ksuid;
    ///
    /// let id = Ksuid::from_parts(0, [0; 16]);
    /// assert_eq!(id.encode().unwrap(), "AAAAAAAAAAAAAAAAAAAAAAAAAAA");
    /// ```
    pub fn encode(&self) -> Result<String> {
        let mut encoded = base62::encode(&self.bytes)?;
        if encoded.len() > MAX_ENCODED_LEN {
            #[cfg(feature = "tracing")]
            trace!(
                full_len = encoded.len(),
                max_len = MAX_ENCODED_LEN,
                "truncating encoded ksuid"
            );
            encoded.truncate(MAX_ENCODED_LEN);
        }
        Ok(encoded)
    }
}

impl fmt::Debug for Ksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ksuid")
            .field("timestamp", &self.unix_seconds())
            .field("payload", &self.payload())
            .finish()
    }
}

impl Ord for Ksuid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp_offset()
            .cmp(&other.timestamp_offset())
            .then_with(|| self.payload().cmp(other.payload()))
    }
}

impl PartialOrd for Ksuid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<[u8; KSUID_LEN]> for Ksuid {
    fn from(bytes: [u8; KSUID_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Ksuid> for [u8; KSUID_LEN] {
    fn from(id: Ksuid) -> Self {
        id.bytes
    }
}

/// The decoded view of an encoded KSUID.
///
/// Rendering it as text is left to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedKsuid {
    /// Creation time, to the second.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub instant: SystemTime,
    /// Seconds since the Unix epoch.
    pub timestamp_secs: i64,
    /// `timestamp_secs * 1000`.
    pub timestamp_millis: i64,
    /// Whatever payload bytes survived encoding: 16 for an uncut string,
    /// fewer for one capped at [`MAX_ENCODED_LEN`].
    pub payload: Vec<u8>,
}

/// Rejects text longer than any encoded KSUID. At most 27 symbols decode to
/// at most 20 bytes, which bounds the payload at 16.
fn check_encoded_len(encoded: &str) -> Result<()> {
    // only called after every symbol was validated, so bytes == chars
    match encoded.len() {
        len if len > MAX_ENCODED_LEN => Err(Error::TooLong { len }),
        _ => Ok(()),
    }
}

/// Reads the Unix timestamp in seconds from the start of a decoded buffer.
fn decode_timestamp(bytes: &[u8]) -> Result<i64> {
    let prefix = bytes
        .first_chunk::<TIMESTAMP_LEN>()
        .ok_or(Error::Truncated { len: bytes.len() })?;
    Ok(KSUID_EPOCH + i64::from(i32::from_be_bytes(*prefix)))
}

/// Decodes an encoded KSUID into its timestamp and payload.
///
/// # Errors
///
/// - [`Error::Base62Error`] if `encoded` contains a character outside the
///   alphabet
/// - [`Error::TooLong`] if `encoded` is longer than [`MAX_ENCODED_LEN`]
/// - [`Error::Truncated`] if fewer than 4 bytes decode
///
/// # Example
///
/// ```
/// let parsed = ksuid::parse("AAAAAAAAAAAAAAAAAAAAAAAAAAA").unwrap();
/// assert_eq!(parsed.timestamp_secs, 1_400_000_000);
/// assert_eq!(parsed.timestamp_millis, 1_400_000_000_000);
/// assert_eq!(parsed.payload, vec![0; 16]);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn parse(encoded: &str) -> Result<ParsedKsuid> {
    let bytes = base62::decode(encoded)?;
    check_encoded_len(encoded)?;
    let timestamp_secs = decode_timestamp(&bytes)?;
    let instant = instant_from_unix_seconds(timestamp_secs)
        .ok_or(Error::TimestampOutOfRange { secs: timestamp_secs })?;

    Ok(ParsedKsuid {
        instant,
        timestamp_secs,
        timestamp_millis: timestamp_secs * 1000,
        payload: bytes[TIMESTAMP_LEN..].to_vec(),
    })
}

/// Returns the creation time of an encoded KSUID in milliseconds since the
/// Unix epoch.
///
/// Only the timestamp bytes are decoded, though every character is still
/// validated.
///
/// # Errors
///
/// Same as [`parse`].
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn timestamp_millis(encoded: &str) -> Result<i64> {
    let bytes = base62::decode_prefix(encoded, TIMESTAMP_LEN)?;
    check_encoded_len(encoded)?;
    Ok(decode_timestamp(&bytes)? * 1000)
}
