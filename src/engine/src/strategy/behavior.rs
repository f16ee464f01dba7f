use common::model::game::{Move, Outcome};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Strategy, StrategyName};
use crate::history::History;

/// Winners repeat themselves, losers switch to what would have beaten them.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinStayLoseShift;

impl Strategy for WinStayLoseShift {
    fn name(&self) -> StrategyName {
        StrategyName::WinStayLoseShift
    }

    fn predict(&self, history: &History) -> Option<Move> {
        if history.len() < 2 {
            return None;
        }
        let last = history.last()?;
        match last.outcome {
            Outcome::PlayerWin => Some(last.player_move.counter()),
            Outcome::PlayerLose => Some(last.player_move.counter().counter()),
            Outcome::Draw => None,
        }
    }
}

/// After two identical throws, players rarely go for a third.
#[derive(Debug, Clone, Copy, Default)]
pub struct AntiRepeat;

impl Strategy for AntiRepeat {
    fn name(&self) -> StrategyName {
        StrategyName::AntiRepeat
    }

    fn predict(&self, history: &History) -> Option<Move> {
        let mut recent = history.player_moves().rev();
        let (last, previous) = (recent.next()?, recent.next()?);
        if last != previous {
            return None;
        }
        let alternatives: Vec<Move> = Move::ALL.into_iter().filter(|&m| m != last).collect();
        // Seeded from the history so every caller sees the same guess for the same rounds.
        let mut rng = ChaCha8Rng::seed_from_u64(fingerprint(history));
        let expected = alternatives[rng.gen_range(0..alternatives.len())];
        Some(expected.counter())
    }
}

fn fingerprint(history: &History) -> u64 {
    history
        .player_moves()
        .fold(history.len() as u64, |hash, m| {
            hash.wrapping_mul(31).wrapping_add(m.index() as u64 + 1)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::tests::history_of;

    #[test]
    fn wsls_after_player_win_expects_repeat() {
        let history = history_of(&[(Move::Paper, Move::Paper), (Move::Rock, Move::Scissors)]);
        assert_eq!(WinStayLoseShift.predict(&history), Some(Move::Paper));
    }

    #[test]
    fn wsls_after_player_loss_expects_shift() {
        // Lost with Rock, so the player moves to Paper; we want Scissors.
        let history = history_of(&[(Move::Paper, Move::Paper), (Move::Rock, Move::Paper)]);
        assert_eq!(WinStayLoseShift.predict(&history), Some(Move::Scissors));
    }

    #[test]
    fn wsls_abstains_on_draw_and_short_history() {
        let history = history_of(&[(Move::Paper, Move::Rock), (Move::Rock, Move::Rock)]);
        assert_eq!(WinStayLoseShift.predict(&history), None);
        let history = history_of(&[(Move::Rock, Move::Scissors)]);
        assert_eq!(WinStayLoseShift.predict(&history), None);
    }

    #[test]
    fn anti_repeat_only_after_a_double() {
        let history = history_of(&[(Move::Rock, Move::Paper), (Move::Paper, Move::Paper)]);
        assert_eq!(AntiRepeat.predict(&history), None);
        assert_eq!(AntiRepeat.predict(&history_of(&[(Move::Rock, Move::Rock)])), None);
    }

    #[test]
    fn anti_repeat_never_counters_the_repeat() {
        let history = history_of(&[(Move::Rock, Move::Paper), (Move::Rock, Move::Paper)]);
        let predicted = AntiRepeat.predict(&history).unwrap();
        // Expected throw is Paper or Scissors, so the answer is Scissors or Rock.
        assert!(matches!(predicted, Move::Scissors | Move::Rock));
    }

    #[test]
    fn anti_repeat_is_stable_for_a_history() {
        let history = history_of(&[
            (Move::Scissors, Move::Rock),
            (Move::Paper, Move::Rock),
            (Move::Paper, Move::Scissors),
        ]);
        let first = AntiRepeat.predict(&history);
        for _ in 0..10 {
            assert_eq!(AntiRepeat.predict(&history), first);
        }
    }
}
