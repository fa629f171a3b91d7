//! Line caster: three fair coin tosses per line.

use super::metrics::CastTrace;
use crate::{Coin, LineState};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

/// Source of coin tosses.
///
/// Implemented by [`RandomCoins`] for real readings and [`ScriptedCoins`] for
/// deterministic ones.
pub trait CoinSource {
    fn toss(&mut self) -> Coin;
}

/// Fair coins backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomCoins<R> {
    rng: R,
}

impl<R: RngCore> RandomCoins<R> {
    pub fn new(rng: R) -> Self {
        RandomCoins { rng }
    }
}

impl RandomCoins<ThreadRng> {
    /// Coins drawn from the thread-local generator.
    pub fn thread() -> Self {
        RandomCoins::new(rand::thread_rng())
    }
}

impl RandomCoins<StdRng> {
    /// Reproducible coins: the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        RandomCoins::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> CoinSource for RandomCoins<R> {
    fn toss(&mut self) -> Coin {
        if self.rng.gen_bool(0.5) { Coin::Heads } else { Coin::Tails }
    }
}

/// Replays a fixed sequence of tosses, cycling when exhausted.
///
/// An empty script always yields tails.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCoins {
    tosses: Vec<Coin>,
    next: usize,
}

impl ScriptedCoins {
    pub fn new(tosses: Vec<Coin>) -> Self {
        ScriptedCoins { tosses, next: 0 }
    }

    /// One entry per line: the number of heads among its three tosses.
    /// Counts above three are treated as three.
    pub fn from_heads(heads_per_line: &[u8]) -> Self {
        let tosses = heads_per_line
            .iter()
            .flat_map(|&heads| (0..3u8).map(move |i| if i < heads { Coin::Heads } else { Coin::Tails }))
            .collect();
        ScriptedCoins::new(tosses)
    }
}

impl CoinSource for ScriptedCoins {
    fn toss(&mut self) -> Coin {
        let Some(&coin) = self.tosses.get(self.next) else {
            return Coin::Tails;
        };
        self.next = (self.next + 1) % self.tosses.len();
        coin
    }
}

/// Cast the line at `position` from three tosses.
pub fn cast_line<S: CoinSource + ?Sized>(coins: &mut S, position: u8) -> CastTrace {
    let tosses = [coins.toss(), coins.toss(), coins.toss()];
    let heads = tosses.iter().filter(|c| **c == Coin::Heads).count() as u8;

    let state = match heads {
        0 => LineState::ChangingYin,
        1 => LineState::StableYang,
        2 => LineState::StableYin,
        _ => LineState::ChangingYang,
    };

    tracing::debug!(position, heads, ?state, "cast line");
    CastTrace { position, tosses, heads, state }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_heads_counts() {
        let mut coins = ScriptedCoins::from_heads(&[0, 1, 2, 3]);
        let states: Vec<LineState> = (1..=4).map(|p| cast_line(&mut coins, p).state).collect();

        assert_eq!(
            states,
            vec![LineState::ChangingYin, LineState::StableYang, LineState::StableYin, LineState::ChangingYang]
        );
    }

    #[test]
    fn scripted_coins_cycle() {
        let mut coins = ScriptedCoins::new(vec![Coin::Heads, Coin::Tails]);
        let seq: Vec<Coin> = (0..5).map(|_| coins.toss()).collect();
        assert_eq!(seq, vec![Coin::Heads, Coin::Tails, Coin::Heads, Coin::Tails, Coin::Heads]);
    }

    #[test]
    fn empty_script_yields_tails() {
        let mut coins = ScriptedCoins::default();
        assert_eq!(cast_line(&mut coins, 1).state, LineState::ChangingYin);
    }

    #[test]
    fn trace_records_tosses() {
        let mut coins = ScriptedCoins::from_heads(&[2]);
        let trace = cast_line(&mut coins, 5);

        assert_eq!(trace.position, 5);
        assert_eq!(trace.tosses, [Coin::Heads, Coin::Heads, Coin::Tails]);
        assert_eq!(trace.heads, 2);
    }

    #[test]
    fn seeded_coins_are_reproducible() {
        let mut a = RandomCoins::seeded(7);
        let mut b = RandomCoins::seeded(7);
        let left: Vec<Coin> = (0..64).map(|_| a.toss()).collect();
        let right: Vec<Coin> = (0..64).map(|_| b.toss()).collect();
        assert_eq!(left, right);
    }
}
