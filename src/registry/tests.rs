use super::*;
use crate::BinaryKey;

static BROKEN: [Hexagram; 2] = [
    hexagram! {
        id: 1, key: "111111", name: "The Creative", local: "乾 Qián",
        upper: Qian, lower: Qian,
        judgment: "j", image: "i", explanation: "e", revelation: "r", guidance: "g",
        lines: [("a", "a"), ("b", "b"), ("c", "c"), ("d", "d"), ("e", "e"), ("f", "")],
    },
    hexagram! {
        id: 1, key: "11x111", name: "Broken", local: "",
        upper: Kun, lower: Kun,
        judgment: "j", image: "i", explanation: "e", revelation: "r", guidance: "g",
        lines: [("a", "a"), ("b", "b"), ("c", "c"), ("d", "d"), ("e", "e"), ("f", "f")],
    },
];

#[test]
fn canonical_table_is_complete() {
    let issues = validate(&REGISTRY);
    assert!(issues.is_empty(), "registry issues: {issues:#?}");
    assert_eq!(REGISTRY.len(), 64);
}

#[test]
fn ids_follow_king_wen_order() {
    let ids: Vec<u8> = REGISTRY.entries().iter().map(|h| h.id).collect();
    assert_eq!(ids, (1..=64).collect::<Vec<_>>());
}

#[test]
fn every_key_has_its_own_entry() {
    let mut seen = std::collections::HashSet::new();
    for key in BinaryKey::all() {
        let hexagram = REGISTRY.lookup(key).unwrap();
        assert_eq!(hexagram.binary_key(), Some(key));
        assert!(seen.insert(hexagram.id), "id {} reached twice", hexagram.id);
    }
}

#[test]
fn well_known_keys() {
    let cases: Vec<(&str, u8)> = vec![
        ("111111", 1),
        ("000000", 2),
        ("100010", 3),
        ("111000", 11),
        ("000111", 12),
        ("100000", 24),
        ("010010", 29),
        ("101101", 30),
        ("101010", 63),
        ("010101", 64),
    ];

    for (key, id) in cases {
        let key: BinaryKey = key.parse().unwrap();
        assert_eq!(REGISTRY.by_binary_key(key).id, id, "key {key}");
    }
}

#[test]
fn lookup_by_id() {
    assert_eq!(REGISTRY.by_id(1).unwrap().name, "The Creative");
    assert_eq!(REGISTRY.by_id(64).unwrap().upper, Trigram::Li);
    assert!(REGISTRY.by_id(0).is_none());
    assert!(REGISTRY.by_id(65).is_none());
    assert_eq!(REGISTRY.by_id(17), REGISTRY.by_id(17));
}

#[test]
fn line_text_by_position() {
    let creative = REGISTRY.by_id(1).unwrap();
    assert_eq!(creative.line(1).unwrap().text, "Hidden dragon. Do not act.");
    assert!(creative.line(0).is_none());
    assert!(creative.line(7).is_none());
}

#[test]
fn partial_registry_falls_back_to_first_entry() {
    // Everything but The Creative: the pure-yang key is a gap.
    let partial = Registry::from_entries(&HEXAGRAMS[1..]).unwrap();

    let first = partial.by_binary_key(BinaryKey::PURE_YANG);
    let second = partial.by_binary_key(BinaryKey::PURE_YANG);
    assert_eq!(first.id, 2);
    assert_eq!(first, second);

    let (_, fell_back) = partial.resolve(BinaryKey::PURE_YANG);
    assert!(fell_back);
    let (_, fell_back) = partial.resolve(BinaryKey::PURE_YIN);
    assert!(!fell_back);
}

#[test]
fn strict_lookup_reports_gaps() {
    let partial = Registry::from_entries(&HEXAGRAMS[1..]).unwrap();
    assert_eq!(partial.lookup(BinaryKey::PURE_YANG), Err(Error::MissingEntry { key: "111111".to_string() }));
    assert!(partial.lookup(BinaryKey::PURE_YIN).is_ok());
}

#[test]
fn validation_flags_gaps() {
    let issues = validate_entries(&HEXAGRAMS[1..]);
    assert_eq!(issues, vec![RegistryIssue::Uncovered(BinaryKey::PURE_YANG)]);
}

#[test]
fn validation_flags_broken_entries() {
    let issues = validate_entries(&BROKEN);

    assert!(issues.contains(&RegistryIssue::DuplicateId { first: 0, second: 1 }));
    assert!(issues.contains(&RegistryIssue::MalformedKey { id: 1, key: "11x111" }));
    assert!(issues.contains(&RegistryIssue::BlankText { id: 1, field: "line meaning" }));
    assert!(issues.contains(&RegistryIssue::BlankText { id: 1, field: "local name" }));
    assert_eq!(issues.iter().filter(|i| matches!(i, RegistryIssue::Uncovered(_))).count(), 63);
}

#[test]
fn validation_flags_trigram_mismatch() {
    static MISMATCH: [Hexagram; 1] = [hexagram! {
        id: 11, key: "000111", name: "Peace", local: "泰 Tài",
        upper: Kun, lower: Qian,
        judgment: "j", image: "i", explanation: "e", revelation: "r", guidance: "g",
        lines: [("a", "a"), ("b", "b"), ("c", "c"), ("d", "d"), ("e", "e"), ("f", "f")],
    }];

    let issues = validate_entries(&MISMATCH);
    assert!(issues.contains(&RegistryIssue::TrigramMismatch {
        id: 11,
        key: "000111".parse().unwrap(),
        expected: "111000".parse().unwrap(),
    }));
}

#[test]
fn broken_registry_skips_malformed_keys() {
    let registry = Registry::from_entries(&BROKEN).unwrap();
    assert_eq!(registry.by_binary_key(BinaryKey::PURE_YIN).id, 1);
    assert!(registry.lookup(BinaryKey::PURE_YIN).is_err());
    assert!(Registry::from_entries(&[]).is_none());
}
