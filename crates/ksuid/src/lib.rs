//! K-Sortable Unique Identifiers.
//!
//! A KSUID is 20 bytes: a big-endian, signed 32-bit count of seconds since
//! [`KSUID_EPOCH`] followed by 16 random bytes. It is rendered with the
//! bit-packed [`base62`] codec and capped at [`MAX_ENCODED_LEN`] characters.
//!
//! ```
//! use std::time::{Duration, UNIX_EPOCH};
//!
//! let id = ksuid::generate_at(UNIX_EPOCH + Duration::from_secs(1_700_000_000)).unwrap();
//! let parsed = ksuid::parse(&id).unwrap();
//! assert_eq!(parsed.timestamp_secs, 1_700_000_000);
//! ```
//!
//! # Features
//!
//! - `std` (default): [`ThreadRandom`], [`OsRandom`] and the one-call
//!   [`generate`]/[`generate_at`] helpers
//! - `serde`: serialization of [`Ksuid`] and [`ParsedKsuid`]
//! - `tracing`: trace-level spans around generation and parsing

pub mod base62;
mod error;
mod generator;
mod id;
mod rand;
mod time;

pub use crate::base62::Base62Error;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::time::*;
