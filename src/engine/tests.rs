use super::*;
use crate::registry::{HEXAGRAMS, REGISTRY, Registry};
use crate::{BinaryKey, ChangingLines, LineState, flip};
use chrono::{DateTime, TimeZone, Utc};

fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2013, 2, 12, 4, 30, 0).unwrap()
}

fn run_scripted(heads: &[u8]) -> RunResult {
    let mut coins = ScriptedCoins::from_heads(heads);
    Diviner::new(&REGISTRY).run("Will it rain?", &mut coins, reference_time())
}

#[test]
fn all_stable_yang_is_the_creative() {
    let run = run_scripted(&[1, 1, 1, 1, 1, 1]);
    let reading = &run.reading;

    assert_eq!(run.metrics.primary_key.to_string(), "111111");
    assert_eq!(reading.structure.id, 1);
    assert!(reading.changing_positions.is_empty());
    assert!(reading.successor.is_none());
    assert!(run.metrics.successor_key.is_none());
    assert!(reading.structure.lines.iter().all(|l| l.state == LineState::StableYang));
}

#[test]
fn single_changing_line_produces_successor() {
    let run = run_scripted(&[1, 1, 0, 1, 1, 1]);
    let reading = &run.reading;

    assert_eq!(reading.changing_positions, vec![3]);
    assert_eq!(run.metrics.primary_key.to_string(), "110111");
    assert_eq!(reading.structure.id, 10);

    let successor_key = run.metrics.successor_key.unwrap();
    assert_eq!(successor_key.to_string(), "111111");

    let primary = run.metrics.primary_key.to_string();
    let successor = successor_key.to_string();
    let differing: Vec<usize> =
        primary.chars().zip(successor.chars()).enumerate().filter(|(_, (a, b))| a != b).map(|(i, _)| i + 1).collect();
    assert_eq!(differing, vec![3]);

    let successor = reading.successor.as_ref().unwrap();
    assert_eq!(successor.id, 1);
    assert!(successor.lines.iter().all(|l| !l.state.is_changing()));
}

#[test]
fn all_changing_yang_turns_into_the_receptive() {
    let run = run_scripted(&[3; 6]);
    let reading = &run.reading;

    assert_eq!(reading.structure.id, 1);
    assert_eq!(reading.changing_positions, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(reading.successor.as_ref().unwrap().id, 2);
    assert_eq!(reading.changing_lines().count(), 6);
}

#[test]
fn primary_lines_keep_cast_states_with_authored_text() {
    let run = run_scripted(&[0, 2, 2, 2, 2, 2]);
    let reading = &run.reading;

    // 000000 with a changing bottom line: The Receptive becoming Return.
    assert_eq!(reading.structure.id, 2);
    assert_eq!(reading.structure.lines[0].state, LineState::ChangingYin);
    assert_eq!(reading.structure.lines[0].text, REGISTRY.by_id(2).unwrap().lines[0].text);
    assert_eq!(reading.successor.as_ref().unwrap().id, 24);
}

#[test]
fn timestamp_and_question_are_recorded() {
    let run = run_scripted(&[1; 6]);
    assert_eq!(run.reading.timestamp, "2013-02-12T04:30:00.000Z");
    assert_eq!(run.reading.question, "Will it rain?");
}

#[test]
fn empty_question_is_accepted() {
    let mut coins = ScriptedCoins::from_heads(&[2; 6]);
    let run = Diviner::new(&REGISTRY).run("", &mut coins, reference_time());
    assert_eq!(run.reading.question, "");
    assert_eq!(run.reading.structure.id, 2);
}

#[test]
fn reading_invariants_hold_for_random_casts() {
    let diviner = Diviner::new(&REGISTRY);
    let mut coins = RandomCoins::seeded(0x5eed);

    for _ in 0..2_000 {
        let run = diviner.run("q", &mut coins, reference_time());
        let reading = &run.reading;

        let positions: Vec<u8> = reading.structure.lines.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);

        let mut sorted = reading.changing_positions.clone();
        sorted.dedup();
        assert_eq!(sorted, reading.changing_positions);
        assert!(reading.changing_positions.iter().all(|p| (1..=6).contains(p)));
        assert!(reading.changing_positions.windows(2).all(|w| w[0] < w[1]));

        let changing_from_lines: Vec<u8> = reading.changing_lines().map(|l| l.position).collect();
        assert_eq!(changing_from_lines, reading.changing_positions);

        assert_eq!(reading.successor.is_some(), !reading.changing_positions.is_empty());
        assert_eq!(reading.structure.binary_key(), run.metrics.primary_key);

        if let Some(successor) = &reading.successor {
            let changing: ChangingLines = reading.changing_positions.iter().copied().collect();
            let expected = flip(run.metrics.primary_key, changing);
            assert_eq!(successor.binary_key(), expected);
            assert_eq!(Some(expected), run.metrics.successor_key);
        }

        assert!(run.metrics.fallbacks.is_empty());
    }
}

#[test]
fn line_state_frequencies_converge() {
    let mut coins = RandomCoins::seeded(42);
    let total = 60_000;
    let mut counts = [0usize; 4];

    for position in (1..=6).cycle().take(total) {
        let idx = match cast_line(&mut coins, position).state {
            LineState::ChangingYin => 0,
            LineState::StableYang => 1,
            LineState::StableYin => 2,
            LineState::ChangingYang => 3,
        };
        counts[idx] += 1;
    }

    let freq = |n: usize| n as f64 / total as f64;
    let changing = freq(counts[0] + counts[3]);
    assert!((changing - 0.25).abs() < 0.015, "changing={changing}");
    assert!((freq(counts[1]) - 0.375).abs() < 0.015, "stable yang={}", freq(counts[1]));
    assert!((freq(counts[2]) - 0.375).abs() < 0.015, "stable yin={}", freq(counts[2]));
}

#[test]
fn seeded_runs_are_reproducible() {
    let diviner = Diviner::new(&REGISTRY);
    let a = diviner.run("same", &mut RandomCoins::seeded(99), reference_time());
    let b = diviner.run("same", &mut RandomCoins::seeded(99), reference_time());
    assert_eq!(a.reading, b.reading);
}

#[test]
fn gaps_fall_back_and_are_reported() {
    let partial = Registry::from_entries(&HEXAGRAMS[1..]).unwrap();
    let mut coins = ScriptedCoins::from_heads(&[1, 1, 1, 1, 1, 3]);
    let run = Diviner::new(&partial).run("gap", &mut coins, reference_time());

    // 111111 is missing; the first entry of the partial table stands in.
    assert_eq!(run.reading.structure.id, 2);
    assert_eq!(run.metrics.fallbacks, vec![BinaryKey::PURE_YANG]);
    // Cast states survive the fallback.
    assert!(run.reading.structure.lines.iter().all(|l| l.state.is_yang()));
    // 111110 resolves normally.
    assert_eq!(run.reading.successor.as_ref().unwrap().id, 43);
}

#[test]
fn assembler_drops_successor_without_changes() {
    let structure = crate::Structure::from_hexagram(REGISTRY.by_id(1).unwrap());
    let successor = crate::Structure::from_hexagram(REGISTRY.by_id(2).unwrap());

    let reading = assemble_reading("q", structure, ChangingLines::empty(), Some(successor), reference_time());
    assert!(reading.successor.is_none());
    assert!(!reading.has_changes());
}

#[test]
fn reading_serializes_camel_case() {
    let run = run_scripted(&[1; 6]);
    let value = serde_json::to_value(&run.reading).unwrap();

    assert_eq!(value["changingPositions"], serde_json::json!([]));
    assert!(value.get("successor").is_none());
    assert_eq!(value["structure"]["lines"][0]["state"], "stable-yang");
    assert_eq!(value["timestamp"], "2013-02-12T04:30:00.000Z");

    let run = run_scripted(&[1, 1, 0, 1, 1, 1]);
    let value = serde_json::to_value(&run.reading).unwrap();
    assert_eq!(value["changingPositions"], serde_json::json!([3]));
    assert_eq!(value["successor"]["id"], 1);
}
