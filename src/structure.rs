//! Owned structure values handed to callers.
//!
//! The registry keeps `&'static str` descriptors; a [`Structure`] is the
//! caller-owned copy with the six lines filled in, either from a cast or from
//! the key alone.

use crate::registry::{Hexagram, Trigram};
use crate::{BinaryKey, Line};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Triads {
    pub upper: Trigram,
    pub lower: Trigram,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub explanation: String,
    pub revelation: String,
    pub guidance: String,
}

/// A hexagram with its six lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Structure {
    /// King Wen number, 1..=64.
    pub id: u8,
    pub name: String,
    pub local_name: String,
    pub triads: Triads,
    /// The judgment attached to the hexagram as a whole.
    pub commentary: String,
    pub image_text: String,
    pub interpretation: Interpretation,
    /// Ordered by position, bottom first.
    pub lines: [Line; 6],
}

impl Structure {
    /// Structure for a registry entry with stable lines derived from its key.
    pub fn from_hexagram(hexagram: &Hexagram) -> Self {
        let lines = hexagram.binary_key().map(BinaryKey::stable_lines).unwrap_or_else(|| {
            BinaryKey::from_trigrams(hexagram.lower, hexagram.upper).stable_lines()
        });
        Self::enrich(hexagram, lines)
    }

    /// Merge authored text onto cast lines.
    ///
    /// Cast states are kept as-is; only `text` and `meaning` are filled.
    pub fn enrich(hexagram: &Hexagram, mut lines: [Line; 6]) -> Self {
        for line in lines.iter_mut() {
            if let Some(authored) = hexagram.line(line.position) {
                line.text = authored.text.to_string();
                line.meaning = authored.meaning.to_string();
            }
        }

        Structure {
            id: hexagram.id,
            name: hexagram.name.to_string(),
            local_name: hexagram.local_name.to_string(),
            triads: Triads { upper: hexagram.upper, lower: hexagram.lower },
            commentary: hexagram.judgment.to_string(),
            image_text: hexagram.image.to_string(),
            interpretation: Interpretation {
                explanation: hexagram.explanation.to_string(),
                revelation: hexagram.revelation.to_string(),
                guidance: hexagram.guidance.to_string(),
            },
            lines,
        }
    }

    /// Key recomputed from the line states.
    pub fn binary_key(&self) -> BinaryKey {
        BinaryKey::from_lines(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineState;
    use crate::registry::REGISTRY;

    #[test]
    fn enrichment_keeps_cast_states() {
        let hexagram = REGISTRY.by_id(1).unwrap();
        let mut lines = BinaryKey::PURE_YANG.stable_lines();
        lines[4].state = LineState::ChangingYang;

        let structure = Structure::enrich(hexagram, lines);

        assert_eq!(structure.lines[4].state, LineState::ChangingYang);
        assert_eq!(structure.lines[4].text, hexagram.lines[4].text);
        assert!(structure.lines.iter().all(|l| !l.meaning.is_empty()));
    }

    #[test]
    fn from_hexagram_derives_lines_from_key() {
        let hexagram = REGISTRY.by_id(63).unwrap();
        let structure = Structure::from_hexagram(hexagram);

        assert_eq!(structure.binary_key().to_string(), "101010");
        assert!(structure.lines.iter().all(|l| !l.state.is_changing()));
        assert_eq!(structure.triads, Triads { upper: Trigram::Kan, lower: Trigram::Li });
    }

    #[test]
    fn serializes_camel_case() {
        let structure = Structure::from_hexagram(REGISTRY.by_id(2).unwrap());
        let value = serde_json::to_value(&structure).unwrap();

        assert_eq!(value["id"], 2);
        assert!(value.get("localName").is_some());
        assert!(value.get("imageText").is_some());
        assert_eq!(value["lines"].as_array().unwrap().len(), 6);
        assert_eq!(value["triads"]["upper"], "Kun");
    }
}
