//! The canonical registry of 64 hexagrams.
//!
//! This module holds the *static* side of the engine: the authored table
//! (`hexagrams.rs`), the trigram descriptors (`trigrams.rs`), and the index
//! that maps a [`BinaryKey`] to an entry.
//!
//! ```text
//! HEXAGRAMS (static, King Wen order)
//!     │  Registry::canonical builds the by_key index once
//!     v
//! REGISTRY (Lazy) ── by_binary_key(key) ──▶ &Hexagram   (falls back to entry #1)
//!                 ├─ lookup(key)        ──▶ Result<&Hexagram>
//!                 └─ by_id(id)          ──▶ Option<&Hexagram>
//! ```
//!
//! ## Missing entries
//!
//! A complete table covers all 64 keys, so the fallback path is only reached
//! when the table has a gap. Gaps are logged at `warn` level and reported by
//! [`validate`]; callers who prefer an error use [`Registry::lookup`].

#[path = "registry/hexagrams.rs"]
mod hexagrams;
#[path = "registry/trigrams.rs"]
mod trigrams;
#[path = "registry/validate.rs"]
mod validate;

#[cfg(test)]
#[path = "registry/tests.rs"]
mod tests;

pub use trigrams::{Element, Trigram, TrigramDescriptor};
pub use validate::{RegistryIssue, validate, validate_entries};

use crate::{BinaryKey, Error, Result};
use once_cell::sync::Lazy;
use serde::Serialize;

pub(crate) use hexagrams::HEXAGRAMS;

/// The process-wide canonical registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::canonical);

/// Authored text for one line of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineText {
    pub text: &'static str,
    pub meaning: &'static str,
}

/// One registry entry. Built with the `hexagram!` macro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hexagram {
    /// King Wen number.
    pub id: u8,
    /// Six characters, bottom line first.
    pub key: &'static str,
    pub name: &'static str,
    pub local_name: &'static str,
    pub upper: Trigram,
    pub lower: Trigram,
    pub judgment: &'static str,
    pub image: &'static str,
    pub explanation: &'static str,
    pub revelation: &'static str,
    pub guidance: &'static str,
    /// Bottom line first.
    pub lines: [LineText; 6],
}

impl Hexagram {
    /// Parsed authored key, or `None` if the literal is malformed.
    pub fn binary_key(&self) -> Option<BinaryKey> {
        self.key.parse().ok()
    }

    /// Authored text for `position` (1..=6).
    pub fn line(&self, position: u8) -> Option<&LineText> {
        self.lines.get(usize::from(position).checked_sub(1)?)
    }
}

/// Indexed view over a table of hexagrams.
#[derive(Debug)]
pub struct Registry {
    entries: &'static [Hexagram],
    /// Entry index per six-bit key.
    by_key: [Option<usize>; 64],
    fallback: &'static Hexagram,
}

impl Registry {
    /// Registry over the full King Wen table.
    pub fn canonical() -> Self {
        Self::build(&HEXAGRAMS, &HEXAGRAMS[0])
    }

    /// Registry over an arbitrary table; the first entry becomes the fallback.
    ///
    /// Returns `None` for an empty table.
    pub fn from_entries(entries: &'static [Hexagram]) -> Option<Self> {
        let fallback = entries.first()?;
        Some(Self::build(entries, fallback))
    }

    fn build(entries: &'static [Hexagram], fallback: &'static Hexagram) -> Self {
        let mut by_key = [None; 64];

        for (idx, hexagram) in entries.iter().enumerate() {
            let Some(key) = hexagram.binary_key() else {
                tracing::warn!(id = hexagram.id, key = hexagram.key, "skipping registry entry with malformed key");
                continue;
            };

            let slot = &mut by_key[usize::from(key.bits())];
            if let Some(existing) = *slot {
                let existing: &Hexagram = &entries[existing];
                tracing::warn!(
                    id = hexagram.id,
                    existing = existing.id,
                    %key,
                    "duplicate registry key; keeping the earlier entry"
                );
                continue;
            }
            *slot = Some(idx);
        }

        Registry { entries, by_key, fallback }
    }

    pub fn entries(&self) -> &'static [Hexagram] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Strict lookup: a key without an entry is an error.
    pub fn lookup(&self, key: BinaryKey) -> Result<&'static Hexagram> {
        self.get(key).ok_or_else(|| Error::MissingEntry { key: key.to_string() })
    }

    /// Lenient lookup: a key without an entry yields the fallback entry.
    pub fn by_binary_key(&self, key: BinaryKey) -> &'static Hexagram {
        self.resolve(key).0
    }

    /// Lenient lookup that also reports whether the fallback was used.
    pub(crate) fn resolve(&self, key: BinaryKey) -> (&'static Hexagram, bool) {
        match self.get(key) {
            Some(hexagram) => (hexagram, false),
            None => {
                tracing::warn!(%key, fallback = self.fallback.id, "no registry entry for key; using fallback");
                (self.fallback, true)
            }
        }
    }

    pub fn by_id(&self, id: u8) -> Option<&'static Hexagram> {
        self.entries.iter().find(|h| h.id == id)
    }

    fn get(&self, key: BinaryKey) -> Option<&'static Hexagram> {
        let entries = self.entries;
        self.by_key[usize::from(key.bits())].and_then(|idx| entries.get(idx))
    }
}
