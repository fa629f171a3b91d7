use crate::engine::{CastTrace, CoinSource, Diviner, RandomCoins, Reading, RunResult};
use crate::registry::{REGISTRY, Trigram, TrigramDescriptor};
use crate::{BinaryKey, Error, Result, Structure};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Reading context.
///
/// This holds the environment a reading is generated in.
#[derive(Debug, Clone)]
pub struct Context {
    /// Instant stamped on the reading.
    pub timestamp: DateTime<Utc>,
    /// Seed for reproducible casts; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            // 2013-02-12T04:30:00Z
            let timestamp = DateTime::from_timestamp(1_360_643_400, 0).unwrap_or_default();
            Self { timestamp, seed: None }
        } else {
            Self { timestamp: Utc::now(), seed: None }
        }
    }
}

/// What to do when a cast key has no registry entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingEntry {
    /// Substitute the first registry entry and log a warning.
    #[default]
    Fallback,
    /// Fail with [`Error::MissingEntry`].
    Reject,
}

/// Options that affect reading generation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub missing_entry: MissingEntry,
}

/// Additional details returned by [`generate_reading_verbose_with`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingDetails {
    /// Per-line cast trace, bottom first.
    pub trace: Vec<CastTrace>,
    pub primary_key: BinaryKey,
    pub successor_key: Option<BinaryKey>,
    /// Keys served by the registry fallback.
    pub fallbacks: Vec<BinaryKey>,
    /// Time spent casting.
    pub cast: Duration,
    pub total: Duration,
}

/// Result from [`generate_reading_verbose_with`].
#[derive(Debug, Clone)]
pub struct ReadingVerbose {
    pub reading: Reading,
    pub elapsed: Duration,
    pub details: ReadingDetails,
}

/// Generate a reading for `question` with a default [`Context`] and [`Options`].
///
/// Never fails, for any question including the empty string.
///
/// # Example
/// ```
/// let reading = hexcast::generate_reading("What should I focus on?");
/// assert_eq!(reading.structure.lines.len(), 6);
/// assert_eq!(reading.successor.is_some(), !reading.changing_positions.is_empty());
/// ```
pub fn generate_reading(question: &str) -> Reading {
    divine(question, &Context::default()).reading
}

/// Generate a reading with an explicit `context` and `options`.
///
/// Only fails when `options.missing_entry` is [`MissingEntry::Reject`] and a
/// cast key has no registry entry.
///
/// # Example
/// ```
/// use hexcast::{Context, Options, generate_reading_with};
///
/// let ctx = Context { seed: Some(7), ..Context::default() };
/// let a = generate_reading_with("q", &ctx, &Options::default()).unwrap();
/// let b = generate_reading_with("q", &ctx, &Options::default()).unwrap();
/// assert_eq!(a.structure.id, b.structure.id);
/// ```
pub fn generate_reading_with(question: &str, context: &Context, options: &Options) -> Result<Reading> {
    let run = divine(question, context);
    check_missing(&run, options)?;
    Ok(run.reading)
}

/// Generate a reading from an injected coin source.
///
/// `context.seed` is ignored; the coins decide every line.
pub fn generate_reading_from<S: CoinSource + ?Sized>(
    question: &str,
    coins: &mut S,
    context: &Context,
    options: &Options,
) -> Result<Reading> {
    let run = Diviner::new(&REGISTRY).run(question, coins, context.timestamp);
    check_missing(&run, options)?;
    Ok(run.reading)
}

/// Generate a reading and return the cast trace alongside it.
pub fn generate_reading_verbose_with(question: &str, context: &Context, options: &Options) -> Result<ReadingVerbose> {
    let run = divine(question, context);
    check_missing(&run, options)?;

    let metrics = run.metrics;
    let details = ReadingDetails {
        trace: metrics.trace,
        primary_key: metrics.primary_key,
        successor_key: metrics.successor_key,
        fallbacks: metrics.fallbacks,
        cast: metrics.cast,
        total: metrics.total,
    };

    Ok(ReadingVerbose { reading: run.reading, elapsed: metrics.total, details })
}

/// Structure for a King Wen number (1..=64), with stable lines.
pub fn get_structure_by_id(id: u8) -> Option<Structure> {
    REGISTRY.by_id(id).map(Structure::from_hexagram)
}

/// Structure for a six-character key such as `"101010"` (bottom line first).
///
/// Strict: a well-formed key without an entry is [`Error::MissingEntry`].
pub fn get_structure_by_key(key: &str) -> Result<Structure> {
    let key: BinaryKey = key.parse()?;
    let hexagram = REGISTRY.lookup(key)?;
    Ok(Structure::enrich(hexagram, key.stable_lines()))
}

/// Trigram descriptor by English name, romanized name, character or symbol.
pub fn trigram(name: &str) -> Option<&'static TrigramDescriptor> {
    name.parse::<Trigram>().ok().map(Trigram::descriptor)
}

fn divine(question: &str, context: &Context) -> RunResult {
    let diviner = Diviner::new(&REGISTRY);
    match context.seed {
        Some(seed) => diviner.run(question, &mut RandomCoins::seeded(seed), context.timestamp),
        None => diviner.run(question, &mut RandomCoins::thread(), context.timestamp),
    }
}

fn check_missing(run: &RunResult, options: &Options) -> Result<()> {
    if options.missing_entry == MissingEntry::Reject {
        if let Some(key) = run.metrics.fallbacks.first() {
            return Err(Error::MissingEntry { key: key.to_string() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedCoins;

    fn seeded(seed: u64) -> Context {
        Context { seed: Some(seed), ..Context::default() }
    }

    #[test]
    fn generate_reading_always_succeeds() {
        for question in ["", "Should I move?", "  ", "❓"] {
            let reading = generate_reading(question);
            assert_eq!(reading.question, question);
            assert_eq!(reading.structure.lines.len(), 6);
            assert_eq!(reading.successor.is_some(), reading.has_changes());
        }
    }

    #[test]
    fn default_context_is_fixed_under_test() {
        let reading = generate_reading("q");
        assert_eq!(reading.timestamp, "2013-02-12T04:30:00.000Z");
    }

    #[test]
    fn seeded_context_is_reproducible() {
        let a = generate_reading_with("q", &seeded(2024), &Options::default()).unwrap();
        let b = generate_reading_with("q", &seeded(2024), &Options::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn strict_options_accept_complete_registry() {
        let options = Options { missing_entry: MissingEntry::Reject };
        for seed in 0..200 {
            assert!(generate_reading_with("q", &seeded(seed), &options).is_ok());
        }
    }

    #[test]
    fn injected_coins_drive_the_reading() {
        let mut coins = ScriptedCoins::from_heads(&[1, 1, 0, 1, 1, 1]);
        let reading = generate_reading_from("q", &mut coins, &Context::default(), &Options::default()).unwrap();

        assert_eq!(reading.structure.id, 10);
        assert_eq!(reading.changing_positions, vec![3]);
        assert_eq!(reading.successor.unwrap().id, 1);
    }

    #[test]
    fn verbose_includes_trace_and_keys() {
        let res = generate_reading_verbose_with("q", &seeded(11), &Options::default()).unwrap();

        assert_eq!(res.details.trace.len(), 6);
        assert_eq!(res.elapsed, res.details.total);
        assert!(res.details.cast <= res.details.total);
        assert_eq!(res.reading.structure.binary_key(), res.details.primary_key);
        assert_eq!(res.details.successor_key.is_some(), res.reading.has_changes());
        assert!(res.details.fallbacks.is_empty());

        let heads: Vec<u8> = res.details.trace.iter().map(|t| t.heads).collect();
        assert!(heads.iter().all(|h| *h <= 3));
    }

    #[test]
    fn reject_policy_surfaces_gaps() {
        use crate::registry::{HEXAGRAMS, Registry};

        let partial = Registry::from_entries(&HEXAGRAMS[1..]).unwrap();
        let mut coins = ScriptedCoins::from_heads(&[1; 6]);
        let run = Diviner::new(&partial).run("q", &mut coins, Context::default().timestamp);

        assert!(check_missing(&run, &Options::default()).is_ok());
        assert_eq!(
            check_missing(&run, &Options { missing_entry: MissingEntry::Reject }),
            Err(Error::MissingEntry { key: "111111".to_string() })
        );
    }

    #[test]
    fn structure_by_id_is_deterministic() {
        let a = get_structure_by_id(30).unwrap();
        let b = get_structure_by_id(30).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.name, "The Clinging");
        assert!(get_structure_by_id(0).is_none());
        assert!(get_structure_by_id(65).is_none());
    }

    #[test]
    fn structure_by_key() {
        let s = get_structure_by_key("100000").unwrap();
        assert_eq!(s.id, 24);
        assert_eq!(s.binary_key().to_string(), "100000");

        assert_eq!(get_structure_by_key("10000"), Err(Error::InvalidKey("10000".to_string())));
    }

    #[test]
    fn trigram_lookup() {
        let fire = trigram("fire").unwrap();
        assert_eq!(fire.symbol, '☲');
        assert_eq!(trigram("Qian").unwrap().name, "Heaven");
        assert!(trigram("sky").is_none());
    }
}
