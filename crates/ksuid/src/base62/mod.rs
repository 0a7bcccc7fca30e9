//! Bit-packed base62 codec.
//!
//! Input bytes are consumed six bits at a time, least significant bit first.
//! Groups whose bits 1..=4 are all set (`?1111?`, i.e. 30, 31, 62 and 63) are
//! emitted as a five-bit symbol instead, and the unread high bit is carried
//! into the next group. Symbols 30 and 31 therefore always mean "five bits"
//! on decode, and 62 and 63 never need a symbol of their own.
//!
//! The output has no fixed width and is not compatible with integer-style
//! base62 encodings.

mod bit_reader;
mod bit_writer;
mod codec;
mod error;

pub use bit_reader::*;
pub use bit_writer::*;
pub use codec::*;
pub use error::*;
