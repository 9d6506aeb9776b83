//! Decoding of the engine's packed 16-bit move representation.
//!
//! Bits 0-5 hold the from-square, bits 6-11 the to-square and bits 12-15 an
//! opaque piece code whose meaning is defined by the engine. Squares are
//! numbered 0-63 with `file = sq % 8` ('a'..'h') and `rank = sq / 8`
//! ('1'..'8'), the same numbering the bitboard renderer uses.

/// Fields extracted from a packed move. Decoding is total: every 16-bit
/// value yields squares in 0..=63 and a piece code in 0..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedMove {
    pub from: u8,
    pub to: u8,
    pub piece: u8,
}

impl DecodedMove {
    /// Four-character notation `<from-file><from-rank><to-file><to-rank>`.
    /// The piece code is not representable in notation.
    pub fn notation(&self) -> String {
        let mut s = String::with_capacity(4);
        s.push((b'a' + self.from % 8) as char);
        s.push((b'1' + self.from / 8) as char);
        s.push((b'a' + self.to % 8) as char);
        s.push((b'1' + self.to / 8) as char);
        s
    }
}

pub fn decode(mv: u16) -> DecodedMove {
    DecodedMove {
        from: (mv & 0x3F) as u8,
        to: ((mv >> 6) & 0x3F) as u8,
        piece: ((mv >> 12) & 0xF) as u8,
    }
}
