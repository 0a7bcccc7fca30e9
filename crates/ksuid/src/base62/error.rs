/// Errors produced by the base62 codec and its bit cursors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Base62Error {
    /// The input contains a character outside `A-Z a-z 0-9`.
    #[error("invalid base62 symbol {symbol:?} at index {index}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Its position in the input, counted in characters.
        index: usize,
    },

    /// A bit cursor was moved outside of its buffer.
    ///
    /// Never observed for buffers produced by this codec.
    #[error("bit offset {target} is outside of 0..={len_bits}")]
    OutOfRange {
        /// The offset the cursor would have moved to.
        target: isize,
        /// Size of the underlying buffer in bits.
        len_bits: usize,
    },

    /// A single read or write asked for more than 7 bits.
    #[error("cannot transfer {bits} bits at once, the limit is 7")]
    TooWide {
        /// Requested width.
        bits: u8,
    },
}
