//! Reading assembly and the pipeline driver.

use super::assembler::assemble;
use super::caster::CoinSource;
use super::metrics::{RunMetrics, RunResult};
use crate::registry::Registry;
use crate::{ChangingLines, Line, Structure, flip};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::time::Instant;

/// A complete divination result.
///
/// `successor` is present iff `changing_positions` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub structure: Structure,
    /// Ascending, each in 1..=6.
    pub changing_positions: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successor: Option<Structure>,
    pub question: String,
    /// RFC 3339, UTC, millisecond precision.
    pub timestamp: String,
}

impl Reading {
    pub fn has_changes(&self) -> bool {
        !self.changing_positions.is_empty()
    }

    /// Primary lines marked as changing.
    pub fn changing_lines(&self) -> impl Iterator<Item = &Line> {
        self.structure.lines.iter().filter(|l| l.state.is_changing())
    }
}

/// Reading assembler. The successor is dropped when nothing changes.
pub fn assemble_reading(
    question: &str,
    structure: Structure,
    changing: ChangingLines,
    successor: Option<Structure>,
    timestamp: DateTime<Utc>,
) -> Reading {
    let successor = if changing.is_empty() { None } else { successor };

    Reading {
        structure,
        changing_positions: changing.positions(),
        successor,
        question: question.to_string(),
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Drives *Cast* then *Transform* against a registry.
///
/// Usage: `Diviner::new(&REGISTRY).run(question, &mut coins, timestamp)`.
#[derive(Debug, Clone, Copy)]
pub struct Diviner<'r> {
    registry: &'r Registry,
}

impl<'r> Diviner<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Diviner { registry }
    }

    /// Generate one reading. Never fails: keys without an entry resolve to
    /// the registry's fallback and are listed in `metrics.fallbacks`.
    pub fn run<S: CoinSource + ?Sized>(&self, question: &str, coins: &mut S, timestamp: DateTime<Utc>) -> RunResult {
        let started = Instant::now();
        let mut fallbacks = Vec::new();

        let cast = assemble(coins);
        let cast_elapsed = started.elapsed();

        let (primary, fell_back) = self.registry.resolve(cast.key);
        if fell_back {
            fallbacks.push(cast.key);
        }
        let structure = Structure::enrich(primary, cast.lines);

        let successor_key = (!cast.changing.is_empty()).then(|| flip(cast.key, cast.changing));
        let successor = successor_key.map(|key| {
            let (hexagram, fell_back) = self.registry.resolve(key);
            if fell_back {
                fallbacks.push(key);
            }
            Structure::enrich(hexagram, key.stable_lines())
        });

        tracing::debug!(
            primary = structure.id,
            successor = ?successor.as_ref().map(|s| s.id),
            changing = ?cast.changing.positions(),
            "reading assembled"
        );

        let reading = assemble_reading(question, structure, cast.changing, successor, timestamp);

        let metrics = RunMetrics {
            total: started.elapsed(),
            cast: cast_elapsed,
            trace: cast.trace,
            primary_key: cast.key,
            successor_key,
            fallbacks,
        };

        RunResult { reading, metrics }
    }
}
