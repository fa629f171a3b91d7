//! Run trace and timing.
//!
//! Every run records its metrics; they are cheap (six traces, two keys). The
//! public API only surfaces them through the verbose entry point.

use super::reading::Reading;
use crate::{BinaryKey, Coin, LineState};
use serde::Serialize;
use std::time::Duration;

/// How a single line was cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CastTrace {
    pub position: u8,
    pub tosses: [Coin; 3],
    pub heads: u8,
    pub state: LineState,
}

#[derive(Debug, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`super::Diviner::run`].
    pub total: Duration,
    /// Time spent casting the six lines.
    pub cast: Duration,
    /// One entry per line, bottom first.
    pub trace: Vec<CastTrace>,
    pub primary_key: BinaryKey,
    /// Present iff any line changed.
    pub successor_key: Option<BinaryKey>,
    /// Keys that had no registry entry and were served by the fallback.
    pub fallbacks: Vec<BinaryKey>,
}

/// Reading bundled with its run metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub reading: Reading,
    pub metrics: RunMetrics,
}
