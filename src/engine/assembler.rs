//! Hexagram assembler: six casts, bottom to top.

use super::caster::{CoinSource, cast_line};
use super::metrics::CastTrace;
use crate::key::LINE_COUNT;
use crate::{BinaryKey, ChangingLines, Line};

/// Result of the *Cast* state. Lines carry no authored text yet.
#[derive(Debug, Clone)]
pub struct Cast {
    pub lines: [Line; 6],
    pub key: BinaryKey,
    pub changing: ChangingLines,
    pub trace: Vec<CastTrace>,
}

/// Cast positions 1 through 6 in order.
pub fn assemble<S: CoinSource + ?Sized>(coins: &mut S) -> Cast {
    let trace: Vec<CastTrace> = (1..=LINE_COUNT).map(|position| cast_line(coins, position)).collect();

    let lines: [Line; 6] = std::array::from_fn(|idx| {
        let t = &trace[idx];
        Line::bare(t.position, t.state)
    });

    let key = BinaryKey::from_lines(&lines);
    let changing: ChangingLines = trace.iter().filter(|t| t.state.is_changing()).map(|t| t.position).collect();

    tracing::debug!(%key, changing = ?changing.positions(), "hexagram cast");
    Cast { lines, key, changing, trace }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScriptedCoins;
    use crate::LineState;

    #[test]
    fn key_follows_caster_order() {
        // bottom: stable yang, then stable yin, then changing yang ...
        let mut coins = ScriptedCoins::from_heads(&[1, 2, 3, 0, 1, 2]);
        let cast = assemble(&mut coins);

        assert_eq!(cast.key.to_string(), "101010");
        assert_eq!(cast.changing.positions(), vec![3, 4]);
        assert_eq!(cast.lines[2].state, LineState::ChangingYang);
        assert_eq!(cast.lines[3].state, LineState::ChangingYin);
    }

    #[test]
    fn lines_are_bare_and_ordered() {
        let mut coins = ScriptedCoins::from_heads(&[2; 6]);
        let cast = assemble(&mut coins);

        let positions: Vec<u8> = cast.lines.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
        assert!(cast.lines.iter().all(|l| l.text.is_empty() && l.meaning.is_empty()));
        assert_eq!(cast.key, BinaryKey::PURE_YIN);
        assert!(cast.changing.is_empty());
        assert_eq!(cast.trace.len(), 6);
    }
}
