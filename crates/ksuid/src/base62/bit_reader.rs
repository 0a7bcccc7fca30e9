use crate::base62::Base62Error;

/// Widest read or write a single call may perform.
pub const MAX_BITS_PER_CALL: u8 = 7;

/// Returns a mask with the low `bits` bits set (`bits <= 8`).
#[inline]
pub(crate) const fn low_mask(bits: usize) -> u16 {
    (1 << bits) - 1
}

/// A seekable bit cursor over a borrowed byte slice.
///
/// Bits are read least significant first within each byte, and a read that
/// spans two bytes continues with the low bits of the next one. The cursor is
/// just a slice and an offset, so rewinding is plain arithmetic.
///
/// # Example
///
/// ```
/// use ksuid::base62::BitReader;
///
/// let mut reader = BitReader::new(&[0b1010_0110, 0b0000_0001]);
/// assert_eq!(reader.read_bits(3), Ok(0b110));
/// assert_eq!(reader.read_bits(6), Ok(0b1_10100));
/// assert!(reader.has_more());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BitReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a cursor positioned at the first bit of `buf`.
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Current position in bits. May run past [`Self::len_bits`] after a read
    /// that consumed padding.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Size of the underlying buffer in bits.
    #[must_use]
    pub const fn len_bits(&self) -> usize {
        self.buf.len() * 8
    }

    /// Returns `true` while unread bits remain.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.offset < self.len_bits()
    }

    /// Reads the next `bits` bits (at most 7) and advances the cursor.
    ///
    /// Bits past the end of the buffer read as zero.
    ///
    /// # Errors
    ///
    /// Returns [`Base62Error::TooWide`] if `bits` exceeds
    /// [`MAX_BITS_PER_CALL`].
    pub fn read_bits(&mut self, bits: u8) -> Result<u8, Base62Error> {
        if bits > MAX_BITS_PER_CALL {
            return Err(Base62Error::TooWide { bits });
        }
        let bit_num = self.offset % 8;
        let byte_num = self.offset / 8;

        let first = (8 - bit_num).min(usize::from(bits));
        let second = usize::from(bits) - first;

        let mut value = self
            .buf
            .get(byte_num)
            .map_or(0, |&b| (u16::from(b) >> bit_num) & low_mask(first));
        if second > 0 {
            if let Some(&next) = self.buf.get(byte_num + 1) {
                value |= (u16::from(next) & low_mask(second)) << first;
            }
        }

        self.offset += usize::from(bits);
        // At most 7 bits were assembled.
        Ok(value as u8)
    }

    /// Moves the cursor by `delta` bits, typically `-1` to return a bit to
    /// the stream.
    ///
    /// # Errors
    ///
    /// Returns [`Base62Error::OutOfRange`] if the new offset would be negative
    /// or past the end of the buffer. The cursor is left untouched.
    pub fn seek_bit(&mut self, delta: isize) -> Result<(), Base62Error> {
        let len_bits = self.len_bits();
        match self.offset.checked_add_signed(delta) {
            Some(target) if target <= len_bits => {
                self.offset = target;
                Ok(())
            }
            _ => Err(Base62Error::OutOfRange {
                target: isize::try_from(self.offset)
                    .unwrap_or(isize::MAX)
                    .saturating_add(delta),
                len_bits,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_least_significant_bits_first() {
        let mut reader = BitReader::new(&[0b1011_0010]);
        assert_eq!(reader.read_bits(1), Ok(0));
        assert_eq!(reader.read_bits(1), Ok(1));
        assert_eq!(reader.read_bits(2), Ok(0b00));
        assert_eq!(reader.read_bits(4), Ok(0b1011));
        assert!(!reader.has_more());
    }

    #[test]
    fn read_spanning_two_bytes_takes_low_bits_of_the_next() {
        let mut reader = BitReader::new(&[0b1100_0000, 0b0000_0101]);
        reader.seek_bit(6).unwrap();
        // two high bits of byte 0 (11), then the low four of byte 1 (0101)
        assert_eq!(reader.read_bits(6), Ok(0b0101_11));
        assert_eq!(reader.offset(), 12);
    }

    #[test]
    fn bits_past_the_end_read_as_zero() {
        let mut reader = BitReader::new(&[0xFF]);
        reader.seek_bit(5).unwrap();
        assert_eq!(reader.read_bits(6), Ok(0b111));
        assert_eq!(reader.offset(), 11);
        assert!(!reader.has_more());
        assert_eq!(reader.read_bits(3), Ok(0));
    }

    #[test]
    fn zero_width_read_is_a_no_op() {
        let mut reader = BitReader::new(&[]);
        assert_eq!(reader.read_bits(0), Ok(0));
        assert_eq!(reader.offset(), 0);
        assert!(!reader.has_more());
    }

    #[test]
    fn rejects_reads_wider_than_seven_bits() {
        let mut reader = BitReader::new(&[0xAA, 0xAA]);
        assert_eq!(reader.read_bits(8), Err(Base62Error::TooWide { bits: 8 }));
        assert_eq!(reader.offset(), 0);
    }

    #[test]
    fn seek_back_rereads_the_same_bit() {
        let mut reader = BitReader::new(&[0b0010_0000]);
        assert_eq!(reader.read_bits(6), Ok(0b10_0000));
        reader.seek_bit(-1).unwrap();
        assert_eq!(reader.read_bits(1), Ok(1));
    }

    #[test]
    fn seek_outside_the_buffer_fails_without_moving() {
        let mut reader = BitReader::new(&[0, 0]);
        assert_eq!(
            reader.seek_bit(-1),
            Err(Base62Error::OutOfRange {
                target: -1,
                len_bits: 16
            })
        );
        assert_eq!(
            reader.seek_bit(17),
            Err(Base62Error::OutOfRange {
                target: 17,
                len_bits: 16
            })
        );
        assert_eq!(reader.offset(), 0);

        // the very end is a valid position
        reader.seek_bit(16).unwrap();
        assert!(!reader.has_more());
    }
}
