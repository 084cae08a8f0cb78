//! A 16-lane value, used to load and sample whole buses at once.
//!
//! Lanes follow the same MSB-first order as every block in this crate:
//! lane 0 is bit 15 of the value and lane 15 is bit 0.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::func::Component;
use crate::BUS_WIDTH;

/// Error produced when a [`Word`] cannot be built from text or from a lane slice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWordError {
    /// The literal was empty (or only a radix prefix).
    #[error("empty word literal")]
    Empty,

    /// The literal contained digits that are not valid for its radix.
    #[error("invalid word literal {literal:?}")]
    Invalid {
        /// The literal that failed to parse.
        literal: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError
    },

    /// The literal does not fit in 16 bits.
    #[error("word literal {literal:?} does not fit in 16 bits")]
    OutOfRange {
        /// The literal that failed to parse.
        literal: String
    },

    /// A lane slice did not have exactly [`BUS_WIDTH`] entries.
    #[error("expected 16 lanes, got {0}")]
    LaneCount(usize)
}

/// A 16-bit value viewed as [`BUS_WIDTH`] MSB-first lanes.
///
/// ```
/// use circuitsim_blocks::word::Word;
///
/// let w = Word::new(0x0005);
/// assert!(w.lane(15));
/// assert!(!w.lane(14));
/// assert!(w.lane(13));
/// assert_eq!(w.to_string(), "0x0005");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(u16);
impl Word {
    /// All lanes low.
    pub const ZERO: Word = Word(0);
    /// Only the least-significant lane (lane 15) high.
    pub const ONE: Word = Word(1);
    /// All lanes high.
    pub const MAX: Word = Word(u16::MAX);

    /// Creates a word from its numeric value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }
    /// The numeric value of this word.
    pub const fn value(self) -> u16 {
        self.0
    }

    const fn lane_mask(i: usize) -> u16 {
        assert!(i < BUS_WIDTH, "lane index out of range");
        1 << (BUS_WIDTH - 1 - i)
    }

    /// Reads lane `i` (0 is the MSB).
    ///
    /// Panics if `i >= BUS_WIDTH`.
    pub const fn lane(self, i: usize) -> bool {
        self.0 & Self::lane_mask(i) != 0
    }

    /// Returns a copy of this word with lane `i` set to `value`.
    ///
    /// Panics if `i >= BUS_WIDTH`.
    pub const fn with_lane(self, i: usize, value: bool) -> Self {
        let mask = Self::lane_mask(i);
        match value {
            true  => Self(self.0 | mask),
            false => Self(self.0 & !mask),
        }
    }

    /// Builds a word from its lanes, lane 0 first.
    pub fn from_lanes(lanes: [bool; BUS_WIDTH]) -> Self {
        lanes.into_iter().collect()
    }

    /// The lanes of this word, lane 0 first.
    pub fn lanes(self) -> [bool; BUS_WIDTH] {
        std::array::from_fn(|i| self.lane(i))
    }

    /// Samples output lanes `0..BUS_WIDTH` of a component.
    pub fn read_from<C: Component + ?Sized>(source: &C) -> Self {
        (0..BUS_WIDTH)
            .map(|i| source.get_output_wire(i))
            .collect()
    }

    /// Drives input lanes `offset..offset + BUS_WIDTH` of a component with this word.
    ///
    /// Dual-operand blocks take their second operand at `offset = BUS_WIDTH`.
    pub fn write_to<C: Component + ?Sized>(self, target: &mut C, offset: usize) {
        for (i, lane) in self.lanes().into_iter().enumerate() {
            target.set_input_wire(offset + i, lane);
        }
    }
}

impl From<u16> for Word {
    fn from(value: u16) -> Self {
        Self(value)
    }
}
impl From<Word> for u16 {
    fn from(value: Word) -> Self {
        value.0
    }
}
impl FromIterator<bool> for Word {
    /// Collects lanes MSB first.
    ///
    /// Panics unless the iterator yields exactly [`BUS_WIDTH`] lanes.
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut count = 0;
        let word = iter.into_iter()
            .inspect(|_| count += 1)
            .take(BUS_WIDTH + 1)
            .enumerate()
            .fold(Word::ZERO, |w, (i, lane)| match i < BUS_WIDTH {
                true  => w.with_lane(i, lane),
                false => w,
            });
        assert_eq!(count, BUS_WIDTH, "expected exactly {BUS_WIDTH} lanes");
        word
    }
}
impl TryFrom<&[bool]> for Word {
    type Error = ParseWordError;

    fn try_from(lanes: &[bool]) -> Result<Self, Self::Error> {
        let lanes: [bool; BUS_WIDTH] = lanes.try_into()
            .map_err(|_| ParseWordError::LaneCount(lanes.len()))?;
        Ok(Self::from_lanes(lanes))
    }
}

impl FromStr for Word {
    type Err = ParseWordError;

    /// Parses `0x`-prefixed hex, `0b`-prefixed binary, or plain decimal.
    /// Underscores are allowed as digit separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (digits, radix) = match trimmed.get(..2) {
            Some("0x" | "0X") => (&trimmed[2..], 16),
            Some("0b" | "0B") => (&trimmed[2..], 2),
            _ => (trimmed, 10),
        };
        let digits = digits.replace('_', "");
        if digits.is_empty() {
            return Err(ParseWordError::Empty);
        }

        u16::from_str_radix(&digits, radix)
            .map(Word)
            .map_err(|source| match source.kind() {
                IntErrorKind::PosOverflow => ParseWordError::OutOfRange { literal: s.to_string() },
                _ => ParseWordError::Invalid { literal: s.to_string(), source },
            })
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}
impl std::fmt::Binary for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}
impl std::ops::Not for Word {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseWordError, Word};

    #[test]
    fn lane_order_is_msb_first() {
        let w = Word::new(0x8001);
        assert!(w.lane(0));
        assert!(w.lane(15));
        assert!((1..15).all(|i| !w.lane(i)));

        assert_eq!(Word::ZERO.with_lane(0, true), Word::new(0x8000));
        assert_eq!(Word::ZERO.with_lane(15, true), Word::ONE);
        assert_eq!(Word::MAX.with_lane(7, false), Word::new(0xFEFF));
    }

    #[test]
    #[should_panic]
    fn lane_out_of_range() {
        let _ = Word::ZERO.lane(16);
    }

    #[test]
    fn lanes_inverse_of_from_lanes() {
        for value in [0x0000, 0x0001, 0x8000, 0xABCD, 0x5A5A, 0xFFFF] {
            let w = Word::new(value);
            assert_eq!(Word::from_lanes(w.lanes()), w, "Lane conversion failed for {w}");
        }
    }

    #[test]
    fn lane_slice_length() {
        let lanes = [true; 15];
        assert_eq!(Word::try_from(&lanes[..]), Err(ParseWordError::LaneCount(15)));

        let mut lanes = [false; 16];
        lanes[14] = true;
        assert_eq!(Word::try_from(&lanes[..]), Ok(Word::new(2)));
    }

    #[test]
    fn collect_exact_lane_count() {
        let collected: Word = [false, true].into_iter().cycle().take(16).collect();
        assert_eq!(collected, Word::new(0x5555));
    }

    #[test]
    #[should_panic]
    fn collect_too_few_lanes() {
        let _: Word = std::iter::repeat(true).take(15).collect();
    }

    #[test]
    #[should_panic]
    fn collect_too_many_lanes() {
        let _: Word = std::iter::repeat(true).take(17).collect();
    }

    #[test]
    #[should_panic]
    fn collect_unbounded_lanes() {
        let _: Word = std::iter::repeat(true).collect();
    }

    #[test]
    fn display() {
        assert_eq!(Word::new(0xABCD).to_string(), "0xABCD");
        assert_eq!(Word::ONE.to_string(), "0x0001");
        assert_eq!(format!("{:b}", Word::new(5)), "0000000000000101");
    }

    #[test]
    fn parse() {
        assert_eq!("0x0005".parse::<Word>(), Ok(Word::new(5)));
        assert_eq!("0b0000_0000_0000_0101".parse::<Word>(), Ok(Word::new(5)));
        assert_eq!(" 65535 ".parse::<Word>(), Ok(Word::MAX));
        assert_eq!("0x".parse::<Word>(), Err(ParseWordError::Empty));
        assert_eq!("".parse::<Word>(), Err(ParseWordError::Empty));
        assert_eq!(
            "0x10000".parse::<Word>(),
            Err(ParseWordError::OutOfRange { literal: "0x10000".to_string() })
        );
        assert!(matches!("0b102".parse::<Word>(), Err(ParseWordError::Invalid { .. })));
    }

    #[test]
    fn serde_as_integer() {
        let json = serde_json::to_string(&Word::new(0xABCD)).unwrap();
        assert_eq!(json, "43981");
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Word::new(0xABCD));
    }
}
