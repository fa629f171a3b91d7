//! Integrity checks over a hexagram table.
//!
//! The lookup path tolerates gaps (see `Registry::by_binary_key`); these
//! checks make them visible so incomplete content is caught rather than
//! masked by the fallback.

use super::{Hexagram, Registry};
use crate::BinaryKey;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryIssue {
    #[error("entry {id}: id outside 1..=64")]
    IdOutOfRange { id: u8 },

    #[error("entries {first} and {second} share id")]
    DuplicateId { first: usize, second: usize },

    #[error("entry {id}: malformed key '{key}'")]
    MalformedKey { id: u8, key: &'static str },

    #[error("entries {first} and {second} share key {key}")]
    DuplicateKey { first: u8, second: u8, key: BinaryKey },

    #[error("entry {id}: key {key} disagrees with trigrams (expected {expected})")]
    TrigramMismatch { id: u8, key: BinaryKey, expected: BinaryKey },

    #[error("entry {id}: blank {field}")]
    BlankText { id: u8, field: &'static str },

    #[error("no entry for key {0}")]
    Uncovered(BinaryKey),
}

/// Check a registry's table. An empty result means the table is complete.
pub fn validate(registry: &Registry) -> Vec<RegistryIssue> {
    validate_entries(registry.entries())
}

pub fn validate_entries(entries: &[Hexagram]) -> Vec<RegistryIssue> {
    let mut issues = Vec::new();
    let mut ids: HashMap<u8, usize> = HashMap::new();
    let mut keys: HashMap<BinaryKey, u8> = HashMap::new();

    for (idx, hexagram) in entries.iter().enumerate() {
        let id = hexagram.id;
        if !(1..=64).contains(&id) {
            issues.push(RegistryIssue::IdOutOfRange { id });
        }
        if let Some(first) = ids.insert(id, idx) {
            issues.push(RegistryIssue::DuplicateId { first, second: idx });
        }

        check_text(hexagram, &mut issues);

        let Some(key) = hexagram.binary_key() else {
            issues.push(RegistryIssue::MalformedKey { id, key: hexagram.key });
            continue;
        };

        let expected = BinaryKey::from_trigrams(hexagram.lower, hexagram.upper);
        if key != expected {
            issues.push(RegistryIssue::TrigramMismatch { id, key, expected });
        }

        match keys.get(&key) {
            Some(&first) => issues.push(RegistryIssue::DuplicateKey { first, second: id, key }),
            None => {
                keys.insert(key, id);
            }
        }
    }

    issues.extend(BinaryKey::all().filter(|k| !keys.contains_key(k)).map(RegistryIssue::Uncovered));
    issues
}

fn check_text(hexagram: &Hexagram, issues: &mut Vec<RegistryIssue>) {
    let id = hexagram.id;
    let fields = [
        ("name", hexagram.name),
        ("local name", hexagram.local_name),
        ("judgment", hexagram.judgment),
        ("image", hexagram.image),
        ("explanation", hexagram.explanation),
        ("revelation", hexagram.revelation),
        ("guidance", hexagram.guidance),
    ];

    for (field, value) in fields {
        if value.trim().is_empty() {
            issues.push(RegistryIssue::BlankText { id, field });
        }
    }

    for line in &hexagram.lines {
        if line.text.trim().is_empty() {
            issues.push(RegistryIssue::BlankText { id, field: "line text" });
        }
        if line.meaning.trim().is_empty() {
            issues.push(RegistryIssue::BlankText { id, field: "line meaning" });
        }
    }
}
