use super::bit_reader::low_mask;
use crate::base62::{Base62Error, MAX_BITS_PER_CALL};

/// A bit cursor that fills a pre-sized, zeroed byte buffer.
///
/// Uses the same ordering as [`BitReader`](crate::base62::BitReader): least
/// significant bit first, spilling into the low bits of the following byte.
/// Bits are OR-ed into place, so a byte is never rewritten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitWriter {
    buf: Vec<u8>,
    offset: usize,
}

impl BitWriter {
    /// Allocates room for `capacity_bits` bits, rounded up to whole bytes.
    #[must_use]
    pub fn with_capacity(capacity_bits: usize) -> Self {
        Self {
            buf: vec![0; capacity_bits.div_ceil(8)],
            offset: 0,
        }
    }

    /// Number of bits written so far.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Writes the low `bits` bits of `value` and advances the cursor.
    ///
    /// # Errors
    ///
    /// - [`Base62Error::TooWide`] if `bits` exceeds 7
    /// - [`Base62Error::OutOfRange`] if the write does not fit in the buffer
    pub fn write_bits(&mut self, bits: u8, value: u8) -> Result<(), Base62Error> {
        if bits > MAX_BITS_PER_CALL {
            return Err(Base62Error::TooWide { bits });
        }
        let end = self.offset + usize::from(bits);
        let len_bits = self.buf.len() * 8;
        if end > len_bits {
            return Err(Base62Error::OutOfRange {
                target: isize::try_from(end).unwrap_or(isize::MAX),
                len_bits,
            });
        }
        if bits == 0 {
            return Ok(());
        }

        let bit_num = self.offset % 8;
        let byte_num = self.offset / 8;

        let first = (8 - bit_num).min(usize::from(bits));
        let second = usize::from(bits) - first;
        let value = u16::from(value);

        self.buf[byte_num] |= ((value & low_mask(first)) << bit_num) as u8;
        if second > 0 {
            self.buf[byte_num + 1] |= ((value >> first) & low_mask(second)) as u8;
        }

        self.offset = end;
        Ok(())
    }

    /// Bits still needed to complete the current byte, or 0 when aligned.
    #[must_use]
    pub const fn bits_to_byte_boundary(&self) -> u8 {
        match self.offset % 8 {
            0 => 0,
            // 1..=7 remain
            rem => (8 - rem) as u8,
        }
    }

    /// Returns the written bytes, including a trailing partial byte.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.buf.truncate(self.offset.div_ceil(8));
        self.buf
    }
}
