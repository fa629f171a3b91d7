//! Casting and reading engine.
//!
//! Generating a reading is a two-state pipeline, *Cast* then *Transform*,
//! run synchronously to completion:
//!
//! ```text
//! CoinSource ── cast_line ×6 ──▶ Cast { lines, key, changing }   (caster.rs, assembler.rs)
//!                                   │
//!                                   │  Registry::resolve(key)
//!                                   v
//!                          primary Structure (cast states + authored text)
//!                                   │
//!                 changing empty? ──┼── yes ──▶ no successor
//!                                   │ no
//!                                   v
//!                         flip(key, changing) ──▶ Registry::resolve  (key.rs)
//!                                   │
//!                                   v
//!                       assemble_reading(question, ..., timestamp)   (reading.rs)
//!                                   │
//!                                   v
//!                         RunResult { reading, metrics }             (metrics.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `caster.rs`: the [`CoinSource`] seam and the three-coin line caster.
//! - `assembler.rs`: six casts bottom to top; no registry access.
//! - `reading.rs`: [`Diviner`] drives the pipeline; the reading record and
//!   its assembler live here too.
//! - `metrics.rs`: per-line trace and timing for verbose output.
//!
//! ## Randomness
//!
//! Every stage downstream of the coin source is deterministic. Tests inject a
//! [`ScriptedCoins`] to force exact heads counts; the public API uses
//! [`RandomCoins`] over the thread RNG, or a seeded `StdRng` when the context
//! carries a seed.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=hexcast=debug` to trace each cast line and lookup.

#[path = "engine/assembler.rs"]
mod assembler;
#[path = "engine/caster.rs"]
mod caster;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/reading.rs"]
mod reading;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

#[allow(unused_imports)]
pub use assembler::{Cast, assemble};
#[allow(unused_imports)]
pub use caster::{CoinSource, RandomCoins, ScriptedCoins, cast_line};
#[allow(unused_imports)]
pub use metrics::{CastTrace, RunMetrics, RunResult};
#[allow(unused_imports)]
pub use reading::{Diviner, Reading, assemble_reading};
