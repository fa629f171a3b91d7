//! The eight trigrams and their descriptors.

use crate::Error;
use serde::Serialize;
use std::str::FromStr;

/// A three-line sub-unit. Two trigrams (lower, upper) compose a hexagram.
///
/// Bit layout matches [`crate::BinaryKey`]: bit 0 is the bottom line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

/// Five-phase element associated with a trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrigramDescriptor {
    pub trigram: Trigram,
    /// English image name, e.g. `"Heaven"`.
    pub name: &'static str,
    pub local_name: &'static str,
    pub symbol: char,
    pub element: Element,
    pub attribute: &'static str,
}

impl Trigram {
    /// Earlier Heaven order.
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Dui,
        Trigram::Li,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
    ];

    /// Line bits, bottom line in bit 0.
    pub const fn bits(self) -> u8 {
        match self {
            Trigram::Qian => 0b111,
            Trigram::Dui => 0b011,
            Trigram::Li => 0b101,
            Trigram::Zhen => 0b001,
            Trigram::Xun => 0b110,
            Trigram::Kan => 0b010,
            Trigram::Gen => 0b100,
            Trigram::Kun => 0b000,
        }
    }

    /// Inverse of [`Trigram::bits`]; only the low three bits are read.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b111 => Trigram::Qian,
            0b011 => Trigram::Dui,
            0b101 => Trigram::Li,
            0b001 => Trigram::Zhen,
            0b110 => Trigram::Xun,
            0b010 => Trigram::Kan,
            0b100 => Trigram::Gen,
            _ => Trigram::Kun,
        }
    }

    pub fn descriptor(self) -> &'static TrigramDescriptor {
        &TRIGRAMS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn symbol(self) -> char {
        self.descriptor().symbol
    }
}

impl FromStr for Trigram {
    type Err = Error;

    /// Accepts the English image name, the romanized name, or the Chinese
    /// character; ASCII names are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Trigram::ALL
            .into_iter()
            .find(|t| {
                let d = t.descriptor();
                d.name.eq_ignore_ascii_case(needle)
                    || format!("{t:?}").eq_ignore_ascii_case(needle)
                    || d.local_name == needle
                    || d.symbol.to_string() == needle
            })
            .ok_or_else(|| Error::UnknownTrigram(s.to_string()))
    }
}

/// Indexed by `Trigram as usize`.
static TRIGRAMS: [TrigramDescriptor; 8] = [
    TrigramDescriptor {
        trigram: Trigram::Qian,
        name: "Heaven",
        local_name: "乾",
        symbol: '☰',
        element: Element::Metal,
        attribute: "strong, creative",
    },
    TrigramDescriptor {
        trigram: Trigram::Dui,
        name: "Lake",
        local_name: "兌",
        symbol: '☱',
        element: Element::Metal,
        attribute: "joyous, open",
    },
    TrigramDescriptor {
        trigram: Trigram::Li,
        name: "Fire",
        local_name: "離",
        symbol: '☲',
        element: Element::Fire,
        attribute: "clinging, radiant",
    },
    TrigramDescriptor {
        trigram: Trigram::Zhen,
        name: "Thunder",
        local_name: "震",
        symbol: '☳',
        element: Element::Wood,
        attribute: "arousing, moving",
    },
    TrigramDescriptor {
        trigram: Trigram::Xun,
        name: "Wind",
        local_name: "巽",
        symbol: '☴',
        element: Element::Wood,
        attribute: "gentle, penetrating",
    },
    TrigramDescriptor {
        trigram: Trigram::Kan,
        name: "Water",
        local_name: "坎",
        symbol: '☵',
        element: Element::Water,
        attribute: "abysmal, dangerous",
    },
    TrigramDescriptor {
        trigram: Trigram::Gen,
        name: "Mountain",
        local_name: "艮",
        symbol: '☶',
        element: Element::Earth,
        attribute: "still, resting",
    },
    TrigramDescriptor {
        trigram: Trigram::Kun,
        name: "Earth",
        local_name: "坤",
        symbol: '☷',
        element: Element::Earth,
        attribute: "receptive, yielding",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_round_trip() {
        for t in Trigram::ALL {
            assert_eq!(Trigram::from_bits(t.bits()), t);
        }
    }

    #[test]
    fn bits_are_distinct() {
        let mut seen: Vec<u8> = Trigram::ALL.iter().map(|t| t.bits()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn descriptors_are_aligned_with_variants() {
        for t in Trigram::ALL {
            assert_eq!(t.descriptor().trigram, t);
        }
    }

    #[test]
    fn parses_names() {
        let cases = [
            ("Heaven", Trigram::Qian),
            ("heaven", Trigram::Qian),
            ("kan", Trigram::Kan),
            ("  Mountain ", Trigram::Gen),
            ("巽", Trigram::Xun),
            ("☱", Trigram::Dui),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<Trigram>().unwrap(), expected, "{input:?}");
        }

        assert_eq!("Sky".parse::<Trigram>(), Err(Error::UnknownTrigram("Sky".to_string())));
    }

    #[test]
    fn elements() {
        assert_eq!(Trigram::Li.descriptor().element, Element::Fire);
        assert_eq!(Trigram::Kan.descriptor().element, Element::Water);
        assert_eq!(Trigram::Zhen.descriptor().element, Element::Wood);
    }
}
