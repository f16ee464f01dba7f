use common::model::game::Move;

use super::{modal_move, Strategy, StrategyName};
use crate::history::History;

/// Counters the player's favourite move so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct Frequency;

impl Strategy for Frequency {
    fn name(&self) -> StrategyName {
        StrategyName::Frequency
    }

    fn predict(&self, history: &History) -> Option<Move> {
        if history.len() < 2 {
            return None;
        }
        let mut counts = [0u32; 3];
        for m in history.player_moves() {
            counts[m.index()] += 1;
        }
        modal_move(counts).map(Move::counter)
    }
}

/// Assumes the player has read the frequency counter and plays around it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Meta {
    frequency: Frequency,
}

impl Strategy for Meta {
    fn name(&self) -> StrategyName {
        StrategyName::Meta
    }

    fn predict(&self, history: &History) -> Option<Move> {
        // Player expects `x`, so they throw counter(x); we answer counter(counter(x)).
        self.frequency
            .predict(history)
            .map(|x| x.counter().counter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::tests::history_of;

    #[test]
    fn needs_two_rounds() {
        assert_eq!(Frequency.predict(&History::new()), None);
        assert_eq!(Frequency.predict(&history_of(&[(Move::Rock, Move::Rock)])), None);
    }

    #[test]
    fn counters_the_favourite() {
        let history = history_of(&[(Move::Rock, Move::Paper); 6]);
        assert_eq!(Frequency.predict(&history), Some(Move::Paper));

        let history = history_of(&[
            (Move::Scissors, Move::Rock),
            (Move::Paper, Move::Rock),
            (Move::Scissors, Move::Rock),
        ]);
        assert_eq!(Frequency.predict(&history), Some(Move::Rock));
    }

    #[test]
    fn ties_go_to_rock_first() {
        let history = history_of(&[(Move::Scissors, Move::Rock), (Move::Rock, Move::Rock)]);
        assert_eq!(Frequency.predict(&history), Some(Move::Paper));
    }

    #[test]
    fn meta_double_counters() {
        let history = history_of(&[(Move::Rock, Move::Paper); 3]);
        // Frequency says Paper; the player answers with Scissors; we throw Rock.
        assert_eq!(Meta::default().predict(&history), Some(Move::Rock));
        assert_eq!(Meta::default().predict(&History::new()), None);
    }
}
