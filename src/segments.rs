//! Segment patterns and the glyph table for the 7-segment cells.
//!
//! Each display cell has seven segments plus a decimal point, wired to
//! the shift-register outputs in this order:
//!
//! ```text
//!      aaaa
//!     f    b
//!     f    b
//!      gggg
//!     e    c
//!     e    c
//!      dddd   dp
//! ```
//!
//! The bit assignment below matches the board wiring and is part of the
//! device contract; changing it scrambles every digit on real hardware.

/// One cell's worth of segment bits, as shifted onto the wire.
///
/// Bit positions follow the register wiring:
///
/// | bit | segment |
/// |-----|---------|
/// | 0   | a       |
/// | 1   | f       |
/// | 2   | g       |
/// | 3   | e       |
/// | 4   | d       |
/// | 5   | c       |
/// | 6   | b       |
/// | 7   | dp      |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// No segments lit.
    pub const BLANK: Self = Self(0);

    /// Top bar.
    pub const A: Self = Self(1 << 0);
    /// Upper-left bar.
    pub const F: Self = Self(1 << 1);
    /// Middle bar.
    pub const G: Self = Self(1 << 2);
    /// Lower-left bar.
    pub const E: Self = Self(1 << 3);
    /// Bottom bar.
    pub const D: Self = Self(1 << 4);
    /// Lower-right bar.
    pub const C: Self = Self(1 << 5);
    /// Upper-right bar.
    pub const B: Self = Self(1 << 6);
    /// Decimal point.
    pub const DP: Self = Self(1 << 7);

    /// Builds a pattern from raw wire bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw wire bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every segment of `other` is lit in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the pattern with the segments of `other` added.
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether no segments are lit.
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for SegmentPattern {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

impl core::ops::BitOrAssign for SegmentPattern {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.with(rhs);
    }
}

/// A character the display can attempt to show.
///
/// Anything without a segment rendering collapses to [`Glyph::Blank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// A decimal digit, 0 through 9.
    Digit(u8),
    /// An intentionally dark cell.
    Space,
    /// A minus sign (middle bar only).
    Minus,
    /// Lowercase 'c' shape, used for simple unit suffixes.
    CeeLower,
    /// Fallback for anything unrenderable.
    Blank,
}

impl Glyph {
    /// Glyph for a digit value; values above 9 collapse to blank.
    pub const fn from_digit(digit: u8) -> Self {
        if digit <= 9 {
            Glyph::Digit(digit)
        } else {
            Glyph::Blank
        }
    }

    /// Glyph for a character, blank for anything unsupported.
    pub const fn from_char(c: char) -> Self {
        match c {
            '0'..='9' => Glyph::Digit(c as u8 - b'0'),
            ' ' => Glyph::Space,
            '-' => Glyph::Minus,
            'c' => Glyph::CeeLower,
            _ => Glyph::Blank,
        }
    }
}

/// Segment patterns for the digits 0 through 9, indexed by value.
pub const DIGIT_PATTERNS: [SegmentPattern; 10] = [
    // 0: all outer bars
    SegmentPattern::A
        .with(SegmentPattern::B)
        .with(SegmentPattern::C)
        .with(SegmentPattern::D)
        .with(SegmentPattern::E)
        .with(SegmentPattern::F),
    // 1
    SegmentPattern::B.with(SegmentPattern::C),
    // 2
    SegmentPattern::A
        .with(SegmentPattern::B)
        .with(SegmentPattern::G)
        .with(SegmentPattern::E)
        .with(SegmentPattern::D),
    // 3
    SegmentPattern::A
        .with(SegmentPattern::B)
        .with(SegmentPattern::G)
        .with(SegmentPattern::C)
        .with(SegmentPattern::D),
    // 4
    SegmentPattern::F
        .with(SegmentPattern::G)
        .with(SegmentPattern::B)
        .with(SegmentPattern::C),
    // 5
    SegmentPattern::A
        .with(SegmentPattern::F)
        .with(SegmentPattern::G)
        .with(SegmentPattern::C)
        .with(SegmentPattern::D),
    // 6
    SegmentPattern::A
        .with(SegmentPattern::F)
        .with(SegmentPattern::G)
        .with(SegmentPattern::E)
        .with(SegmentPattern::D)
        .with(SegmentPattern::C),
    // 7
    SegmentPattern::A
        .with(SegmentPattern::B)
        .with(SegmentPattern::C),
    // 8: everything but the decimal point
    SegmentPattern::A
        .with(SegmentPattern::B)
        .with(SegmentPattern::C)
        .with(SegmentPattern::D)
        .with(SegmentPattern::E)
        .with(SegmentPattern::F)
        .with(SegmentPattern::G),
    // 9
    SegmentPattern::A
        .with(SegmentPattern::B)
        .with(SegmentPattern::C)
        .with(SegmentPattern::D)
        .with(SegmentPattern::F)
        .with(SegmentPattern::G),
];

/// Encodes a glyph to its segment pattern, decimal point off.
pub const fn encode(glyph: Glyph) -> SegmentPattern {
    match glyph {
        Glyph::Digit(d) => {
            if d <= 9 {
                DIGIT_PATTERNS[d as usize]
            } else {
                SegmentPattern::BLANK
            }
        }
        Glyph::Minus => SegmentPattern::G,
        Glyph::CeeLower => SegmentPattern::D.with(SegmentPattern::E).with(SegmentPattern::G),
        Glyph::Space | Glyph::Blank => SegmentPattern::BLANK,
    }
}

/// Encodes a glyph with the decimal point lit or dark.
pub const fn encode_with_dp(glyph: Glyph, dp: bool) -> SegmentPattern {
    let pattern = encode(glyph);
    if dp {
        pattern.with(SegmentPattern::DP)
    } else {
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_positions_match_the_wiring() {
        assert_eq!(SegmentPattern::A.bits(), 0b0000_0001);
        assert_eq!(SegmentPattern::F.bits(), 0b0000_0010);
        assert_eq!(SegmentPattern::G.bits(), 0b0000_0100);
        assert_eq!(SegmentPattern::E.bits(), 0b0000_1000);
        assert_eq!(SegmentPattern::D.bits(), 0b0001_0000);
        assert_eq!(SegmentPattern::C.bits(), 0b0010_0000);
        assert_eq!(SegmentPattern::B.bits(), 0b0100_0000);
        assert_eq!(SegmentPattern::DP.bits(), 0b1000_0000);
    }

    #[test]
    fn digit_patterns_light_the_expected_segments() {
        // Every digit byte, straight from the wiring table.
        assert_eq!(encode(Glyph::Digit(0)).bits(), 0b0111_1011);
        assert_eq!(encode(Glyph::Digit(1)).bits(), 0b0110_0000);
        assert_eq!(encode(Glyph::Digit(2)).bits(), 0b0101_1101);
        assert_eq!(encode(Glyph::Digit(3)).bits(), 0b0111_0101);
        assert_eq!(encode(Glyph::Digit(4)).bits(), 0b0110_0110);
        assert_eq!(encode(Glyph::Digit(5)).bits(), 0b0011_0111);
        assert_eq!(encode(Glyph::Digit(6)).bits(), 0b0011_1111);
        assert_eq!(encode(Glyph::Digit(7)).bits(), 0b0110_0001);
        assert_eq!(encode(Glyph::Digit(8)).bits(), 0b0111_1111);
        assert_eq!(encode(Glyph::Digit(9)).bits(), 0b0111_0111);
    }

    #[test]
    fn every_digit_is_distinct_and_nonblank() {
        for a in 0..10u8 {
            assert!(!encode(Glyph::Digit(a)).is_blank());
            for b in (a + 1)..10 {
                assert_ne!(encode(Glyph::Digit(a)), encode(Glyph::Digit(b)));
            }
        }
    }

    #[test]
    fn symbols_encode_to_their_shapes() {
        assert_eq!(encode(Glyph::Minus), SegmentPattern::G);
        assert_eq!(
            encode(Glyph::CeeLower),
            SegmentPattern::D | SegmentPattern::E | SegmentPattern::G
        );
        assert_eq!(encode(Glyph::Space), SegmentPattern::BLANK);
        assert_eq!(encode(Glyph::Blank), SegmentPattern::BLANK);
    }

    #[test]
    fn out_of_range_digits_collapse_to_blank() {
        assert_eq!(Glyph::from_digit(10), Glyph::Blank);
        assert_eq!(encode(Glyph::Digit(200)), SegmentPattern::BLANK);
    }

    #[test]
    fn from_char_covers_the_supported_alphabet() {
        assert_eq!(Glyph::from_char('0'), Glyph::Digit(0));
        assert_eq!(Glyph::from_char('9'), Glyph::Digit(9));
        assert_eq!(Glyph::from_char(' '), Glyph::Space);
        assert_eq!(Glyph::from_char('-'), Glyph::Minus);
        assert_eq!(Glyph::from_char('c'), Glyph::CeeLower);
        assert_eq!(Glyph::from_char('x'), Glyph::Blank);
        assert_eq!(Glyph::from_char('C'), Glyph::Blank);
    }

    #[test]
    fn decimal_point_is_independent_of_the_glyph() {
        for d in 0..10u8 {
            let plain = encode(Glyph::Digit(d));
            let dotted = encode_with_dp(Glyph::Digit(d), true);
            assert_eq!(dotted.bits() & 0x7F, plain.bits());
            assert!(dotted.contains(SegmentPattern::DP));
            assert_eq!(encode_with_dp(Glyph::Digit(d), false), plain);
        }
    }

    #[test]
    fn pattern_set_operations() {
        let mut p = SegmentPattern::BLANK;
        assert!(p.is_blank());
        p |= SegmentPattern::A;
        p = p | SegmentPattern::G;
        assert!(p.contains(SegmentPattern::A));
        assert!(p.contains(SegmentPattern::G));
        assert!(!p.contains(SegmentPattern::B));
        assert_eq!(p, SegmentPattern::from_bits(0b0000_0101));
    }
}
