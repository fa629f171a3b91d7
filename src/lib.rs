#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod key;
pub mod registry;
mod structure;

pub use api::{
    Context, MissingEntry, Options, ReadingDetails, ReadingVerbose, generate_reading, generate_reading_from,
    generate_reading_verbose_with, generate_reading_with, get_structure_by_id, get_structure_by_key, trigram,
};
pub use engine::{CastTrace, CoinSource, RandomCoins, Reading, ScriptedCoins};
pub use error::{Error, Result};
pub use key::{BinaryKey, ChangingLines, flip};
pub use registry::{Trigram, TrigramDescriptor};
pub use structure::{Interpretation, Structure, Triads};

use serde::Serialize;

// --- Line-level types -------------------------------------------------------

/// Outcome of a single coin toss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    Heads,
    Tails,
}

/// Classification of a cast line.
///
/// ```text
/// heads │ state          │ bit
/// ──────┼────────────────┼────
///   0   │ changing-yin   │  0
///   1   │ stable-yang    │  1
///   2   │ stable-yin     │  0
///   3   │ changing-yang  │  1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineState {
    StableYin,
    StableYang,
    ChangingYin,
    ChangingYang,
}

impl LineState {
    /// Classify a line from the number of heads in its three tosses.
    ///
    /// Returns `None` for counts above three, which three tosses cannot produce.
    pub fn from_heads(heads: u8) -> Option<Self> {
        match heads {
            0 => Some(LineState::ChangingYin),
            1 => Some(LineState::StableYang),
            2 => Some(LineState::StableYin),
            3 => Some(LineState::ChangingYang),
            _ => None,
        }
    }

    /// Stable state for an encoding bit (`true` = yang).
    pub fn stable(yang: bool) -> Self {
        if yang { LineState::StableYang } else { LineState::StableYin }
    }

    pub fn is_yang(self) -> bool {
        matches!(self, LineState::StableYang | LineState::ChangingYang)
    }

    pub fn is_changing(self) -> bool {
        matches!(self, LineState::ChangingYin | LineState::ChangingYang)
    }

    /// Encoding bit used in the binary key.
    pub fn bit(self) -> char {
        if self.is_yang() { '1' } else { '0' }
    }
}

/// One of the six stacked lines of a structure, counted from the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// 1 (bottom) through 6 (top).
    pub position: u8,
    pub state: LineState,
    /// Authored line text; empty until enriched from the registry.
    pub text: String,
    /// Authored gloss of the line text; empty until enriched.
    pub meaning: String,
}

impl Line {
    /// A line with no authored content yet.
    pub fn bare(position: u8, state: LineState) -> Self {
        Line { position, state, text: String::new(), meaning: String::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heads_count_classification() {
        let cases = [
            (0, LineState::ChangingYin, '0', true),
            (1, LineState::StableYang, '1', false),
            (2, LineState::StableYin, '0', false),
            (3, LineState::ChangingYang, '1', true),
        ];

        for (heads, state, bit, changing) in cases {
            let got = LineState::from_heads(heads).unwrap();
            assert_eq!(got, state, "heads={heads}");
            assert_eq!(got.bit(), bit, "heads={heads}");
            assert_eq!(got.is_changing(), changing, "heads={heads}");
        }

        assert_eq!(LineState::from_heads(4), None);
    }

    #[test]
    fn line_state_serializes_kebab_case() {
        let json = serde_json::to_string(&LineState::ChangingYang).unwrap();
        assert_eq!(json, "\"changing-yang\"");
    }
}
