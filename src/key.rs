//! Fixed-width binary keys and changing-line sets.
//!
//! A key is six bits, one per line. Bit `i` holds position `i + 1`, so the
//! textual form is written in caster order: position 1 (bottom) first.
//!
//! ```text
//! position:  1 2 3 4 5 6
//! key:      "1 0 1 0 1 0"   (After Completion)
//!            └lower┘└upper┘
//! ```

use crate::registry::Trigram;
use crate::{Error, Line, LineState};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of lines in a structure.
pub const LINE_COUNT: u8 = 6;

/// Six-bit lookup key of a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BinaryKey(u8);

impl BinaryKey {
    /// All-yang key (`111111`).
    pub const PURE_YANG: BinaryKey = BinaryKey(0b11_1111);
    /// All-yin key (`000000`).
    pub const PURE_YIN: BinaryKey = BinaryKey(0);

    /// Build from raw bits; bits above the sixth are discarded.
    pub const fn from_bits(bits: u8) -> Self {
        BinaryKey(bits & 0b11_1111)
    }

    /// Compose from lower (positions 1-3) and upper (positions 4-6) trigrams.
    pub const fn from_trigrams(lower: Trigram, upper: Trigram) -> Self {
        BinaryKey(lower.bits() | (upper.bits() << 3))
    }

    /// Build from six lines in position order.
    pub fn from_lines(lines: &[Line]) -> Self {
        lines.iter().fold(BinaryKey(0), |key, line| key.with(line.position, line.state.is_yang()))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the line at `position` (1..=6) is yang.
    pub fn is_yang(self, position: u8) -> bool {
        (1..=LINE_COUNT).contains(&position) && self.0 & (1 << (position - 1)) != 0
    }

    /// Copy of this key with `position` set to yang or yin.
    fn with(self, position: u8, yang: bool) -> Self {
        if !(1..=LINE_COUNT).contains(&position) {
            return self;
        }
        let mask = 1 << (position - 1);
        if yang { BinaryKey(self.0 | mask) } else { BinaryKey(self.0 & !mask) }
    }

    pub fn lower(self) -> Trigram {
        Trigram::from_bits(self.0 & 0b111)
    }

    pub fn upper(self) -> Trigram {
        Trigram::from_bits(self.0 >> 3)
    }

    /// Stable lines matching this key, without authored content.
    pub fn stable_lines(self) -> [Line; 6] {
        std::array::from_fn(|idx| {
            let position = idx as u8 + 1;
            Line::bare(position, LineState::stable(self.is_yang(position)))
        })
    }

    /// Iterate over all 64 keys in ascending bit order.
    pub fn all() -> impl Iterator<Item = BinaryKey> {
        (0..64u8).map(BinaryKey)
    }
}

impl fmt::Display for BinaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in 1..=LINE_COUNT {
            f.write_str(if self.is_yang(position) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BinaryKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !regex!(r"^[01]{6}$").is_match(s) {
            return Err(Error::InvalidKey(s.to_string()));
        }

        let key = s.chars().zip(1..=LINE_COUNT).fold(BinaryKey(0), |key, (c, position)| key.with(position, c == '1'));
        Ok(key)
    }
}

impl Serialize for BinaryKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

bitflags::bitflags! {
    /// Set of changing positions. Bit `i` is position `i + 1`, matching
    /// [`BinaryKey`] so a flip is a single XOR.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ChangingLines: u8 {
        const P1 = 1 << 0;
        const P2 = 1 << 1;
        const P3 = 1 << 2;
        const P4 = 1 << 3;
        const P5 = 1 << 4;
        const P6 = 1 << 5;
    }
}

impl ChangingLines {
    /// Mark `position` (1..=6) as changing. Out-of-range positions are ignored.
    pub fn insert_position(&mut self, position: u8) {
        if (1..=LINE_COUNT).contains(&position) {
            self.insert(ChangingLines::from_bits_truncate(1 << (position - 1)));
        }
    }

    pub fn contains_position(&self, position: u8) -> bool {
        (1..=LINE_COUNT).contains(&position) && self.bits() & (1 << (position - 1)) != 0
    }

    /// Changing positions in ascending order.
    pub fn positions(&self) -> Vec<u8> {
        (1..=LINE_COUNT).filter(|p| self.contains_position(*p)).collect()
    }
}

impl FromIterator<u8> for ChangingLines {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = ChangingLines::empty();
        for position in iter {
            set.insert_position(position);
        }
        set
    }
}

/// Line-flip transformer: invert every changing position of `key`.
///
/// Total and self-inverse: `flip(flip(k, c), c) == k`.
pub fn flip(key: BinaryKey, changing: ChangingLines) -> BinaryKey {
    BinaryKey::from_bits(key.bits() ^ changing.bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_caster_order() {
        let key: BinaryKey = "100000".parse().unwrap();
        assert!(key.is_yang(1));
        assert!((2..=6).all(|p| !key.is_yang(p)));
        assert_eq!(key.to_string(), "100000");
        assert_eq!(key.lower(), Trigram::Zhen);
        assert_eq!(key.upper(), Trigram::Kun);
    }

    #[test]
    fn rejects_malformed_keys() {
        for bad in ["", "11111", "1111111", "11a111", " 111111", "２２２２２２"] {
            assert_eq!(bad.parse::<BinaryKey>(), Err(Error::InvalidKey(bad.to_string())), "{bad:?}");
        }
    }

    #[test]
    fn display_round_trips_every_key() {
        for key in BinaryKey::all() {
            assert_eq!(key.to_string().parse::<BinaryKey>().unwrap(), key);
        }
    }

    #[test]
    fn flip_only_touches_changing_positions() {
        let key: BinaryKey = "111111".parse().unwrap();
        let changing: ChangingLines = [3].into_iter().collect();

        let next = flip(key, changing);
        assert_eq!(next.to_string(), "110111");
    }

    #[test]
    fn flip_is_an_involution() {
        for key in BinaryKey::all() {
            for bits in 0..64u8 {
                let changing = ChangingLines::from_bits_truncate(bits);
                assert_eq!(flip(flip(key, changing), changing), key);
            }
        }
    }

    #[test]
    fn changing_positions_are_sorted_and_unique() {
        let set: ChangingLines = [6, 2, 2, 4, 9, 0].into_iter().collect();
        assert_eq!(set.positions(), vec![2, 4, 6]);
        assert!(set.contains_position(4));
        assert!(!set.contains_position(9));
    }

    #[test]
    fn composes_from_trigrams() {
        // Fire below, Water above.
        let key = BinaryKey::from_trigrams(Trigram::Li, Trigram::Kan);
        assert_eq!(key.to_string(), "101010");
        assert_eq!(BinaryKey::from_trigrams(Trigram::Qian, Trigram::Qian), BinaryKey::PURE_YANG);
    }

    #[test]
    fn key_from_lines_matches_states() {
        let lines = "011001".parse::<BinaryKey>().unwrap().stable_lines();
        assert_eq!(BinaryKey::from_lines(&lines).to_string(), "011001");
        assert_eq!(lines[1].state, LineState::StableYang);
        assert_eq!(lines[0].state, LineState::StableYin);
    }
}
