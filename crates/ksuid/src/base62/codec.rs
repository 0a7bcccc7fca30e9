use crate::base62::{Base62Error, BitReader, BitWriter};

/// Symbol table: upper case, lower case, then digits. A symbol's index is its
/// position here.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const NO_VALUE: u8 = 255;

const GROUP_BITS: u8 = 6;
const COMPACT_BITS: u8 = 5;
/// Bits 1..=4 of a group. A group with all of them set has no full symbol.
const COMPACT_MASK: u8 = 0b0001_1110;
const LOW_5_BITS: u8 = 0b0001_1111;

/// Reverse lookup from ASCII byte to symbol index.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
};

#[inline]
const fn is_compact(bits: u8) -> bool {
    bits & COMPACT_MASK == COMPACT_MASK
}

/// Resolves one input character to its symbol index.
#[inline]
fn symbol_index(symbol: char, index: usize) -> Result<u8, Base62Error> {
    match u8::try_from(symbol).map(|b| LOOKUP[usize::from(b)]) {
        Ok(value) if value != NO_VALUE => Ok(value),
        _ => Err(Base62Error::InvalidSymbol { symbol, index }),
    }
}

/// Encodes `input` into base62 symbols.
///
/// The result is never padded or truncated; its length depends on how many
/// groups needed the five-bit form.
///
/// # Errors
///
/// Only a broken cursor invariant can fail here, reported as
/// [`Base62Error::OutOfRange`].
///
/// # Example
///
/// ```
/// use ksuid::base62;
///
/// let encoded = base62::encode(&[0x1E]).unwrap();
/// assert_eq!(encoded, "eA");
/// assert_eq!(base62::decode(&encoded).unwrap(), vec![0x1E]);
/// ```
pub fn encode(input: &[u8]) -> Result<String, Base62Error> {
    // Worst case is a five-bit symbol for every group.
    let mut out = String::with_capacity(input.len() * 8 / usize::from(COMPACT_BITS) + 1);
    let mut reader = BitReader::new(input);

    while reader.has_more() {
        let raw = reader.read_bits(GROUP_BITS)?;
        let index = if is_compact(raw) {
            // keep the high bit for the next group
            reader.seek_bit(-1)?;
            raw & LOW_5_BITS
        } else {
            raw
        };
        out.push(char::from(ALPHABET[usize::from(index)]));
    }

    Ok(out)
}

/// Decodes base62 symbols back into bytes.
///
/// The final symbol only contributes the bits needed to reach a byte
/// boundary, so the output of [`encode`] is restored exactly.
///
/// # Errors
///
/// Returns [`Base62Error::InvalidSymbol`] for the first character outside the
/// alphabet.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base62Error> {
    decode_bits(encoded, usize::MAX)
}

/// Decodes only the first `bytes` bytes of `encoded`.
///
/// Every symbol is still validated, so malformed input fails the same way as
/// with [`decode`]. The result is a prefix of what [`decode`] would return and
/// may be shorter than `bytes` if the input runs out.
///
/// # Errors
///
/// Returns [`Base62Error::InvalidSymbol`] for the first character outside the
/// alphabet.
pub fn decode_prefix(encoded: &str, bytes: usize) -> Result<Vec<u8>, Base62Error> {
    let mut out = decode_bits(encoded, bytes.saturating_mul(8))?;
    out.truncate(bytes);
    Ok(out)
}

fn decode_bits(encoded: &str, limit_bits: usize) -> Result<Vec<u8>, Base62Error> {
    let len = encoded.chars().count();
    let mut writer = BitWriter::with_capacity(len * usize::from(GROUP_BITS));
    let last = len.saturating_sub(1);

    for (i, symbol) in encoded.chars().enumerate() {
        let bits = symbol_index(symbol, i)?;
        if writer.offset() >= limit_bits {
            continue;
        }
        let count = if is_compact(bits) {
            COMPACT_BITS
        } else if i == last {
            writer.bits_to_byte_boundary()
        } else {
            GROUP_BITS
        };
        writer.write_bits(count, bits)?;
    }

    Ok(writer.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic filler so failures are reproducible.
    fn pattern(len: usize, seed: u32) -> Vec<u8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (state >> 16) as u8
            })
            .collect()
    }

    #[test]
    fn alphabet_is_upper_lower_digits() {
        assert_eq!(ALPHABET[0], b'A');
        assert_eq!(ALPHABET[25], b'Z');
        assert_eq!(ALPHABET[26], b'a');
        assert_eq!(ALPHABET[51], b'z');
        assert_eq!(ALPHABET[52], b'0');
        assert_eq!(ALPHABET[61], b'9');
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(usize::from(LOOKUP[usize::from(c)]), i);
        }
    }

    #[test]
    fn empty_input_round_trips() {
        assert_eq!(encode(&[]).unwrap(), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn all_zero_ksuid_buffer_encodes_to_27_symbols() {
        let zeros = [0_u8; 20];
        let encoded = encode(&zeros).unwrap();
        assert_eq!(encoded, "A".repeat(27));
        assert_eq!(decode(&encoded).unwrap(), zeros.to_vec());
    }

    #[test]
    fn round_trips_every_length_up_to_64() {
        for len in 0..=64 {
            for seed in [1, 7, 42, 0xDEAD] {
                let input = pattern(len, seed);
                let encoded = encode(&input).unwrap();
                assert_eq!(decode(&encoded).unwrap(), input, "len={len} seed={seed}");
            }
            let ones = vec![0xFF; len];
            assert_eq!(decode(&encode(&ones).unwrap()).unwrap(), ones, "len={len}");
        }
    }

    #[test]
    fn encoded_symbols_stay_in_the_alphabet() {
        for len in [1, 5, 20, 33] {
            let encoded = encode(&pattern(len, 99)).unwrap();
            assert!(encoded.bytes().all(|b| ALPHABET.contains(&b)), "{encoded}");
        }
    }

    #[test]
    fn ambiguous_groups_are_emitted_as_five_bits() {
        // low six bits of each byte: 30, 31, 62, 63
        assert_eq!(encode(&[0x1E]).unwrap(), "eA");
        assert_eq!(encode(&[0x1F]).unwrap(), "fA");
        assert_eq!(encode(&[0x3E]).unwrap(), "eB");
        assert_eq!(encode(&[0x3F]).unwrap(), "fB");
        for byte in [0x1E, 0x1F, 0x3E, 0x3F] {
            assert_eq!(decode(&encode(&[byte]).unwrap()).unwrap(), vec![byte]);
        }
    }

    #[test]
    fn ambiguous_group_across_a_byte_boundary() {
        // bits 6..12 hold 30: the two high bits of byte 0 and the low four of
        // byte 1. The carried bit (bit 11) is re-read by the last group.
        let input = [0x80, 0x07];
        let encoded = encode(&input).unwrap();
        assert_eq!(encoded, "AeA");
        assert_eq!(decode(&encoded).unwrap(), input.to_vec());
    }

    #[test]
    fn plain_groups_use_six_bits() {
        // 0b111101 = 61, the highest full symbol
        assert_eq!(encode(&[0x3D]).unwrap(), "9A");
        assert_eq!(decode("9A").unwrap(), vec![0x3D]);
    }

    #[test]
    fn single_symbol_decodes_to_nothing() {
        assert_eq!(decode("Q").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn decode_rejects_every_symbol_outside_the_alphabet() {
        for b in 0_u8..=127 {
            if b.is_ascii_alphanumeric() {
                continue;
            }
            let symbol = char::from(b);
            assert_eq!(
                decode(&format!("AB{symbol}C")),
                Err(Base62Error::InvalidSymbol { symbol, index: 2 })
            );
        }
        assert_eq!(
            decode("Aé"),
            Err(Base62Error::InvalidSymbol {
                symbol: 'é',
                index: 1
            })
        );
    }

    #[test]
    fn prefix_matches_the_full_decode() {
        for seed in [3, 11, 2024] {
            let input = pattern(20, seed);
            let encoded = encode(&input).unwrap();
            assert_eq!(decode_prefix(&encoded, 4).unwrap(), input[..4].to_vec());
        }
    }

    #[test]
    fn prefix_still_validates_trailing_symbols() {
        let mut encoded = encode(&[0_u8; 20]).unwrap();
        encoded.push('+');
        assert_eq!(
            decode_prefix(&encoded, 4),
            Err(Base62Error::InvalidSymbol {
                symbol: '+',
                index: 27
            })
        );
    }

    #[test]
    fn prefix_of_short_input_is_short() {
        assert_eq!(decode_prefix("AAA", 4).unwrap(), vec![0, 0]);
    }
}
