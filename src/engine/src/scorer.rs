use common::model::game::{Move, Outcome};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    history::History,
    strategy::{StrategyName, StrategySet},
};

/// Running credit of every strategy for the current session.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    scores: [i32; 6],
}

impl ScoreTable {
    pub fn new() -> Self {
        ScoreTable { scores: [0; 6] }
    }

    pub fn get(&self, name: StrategyName) -> i32 {
        self.scores[name.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (StrategyName, i32)> + '_ {
        StrategyName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }

    pub fn clear(&mut self) {
        self.scores = [0; 6];
    }

    fn adjust(&mut self, name: StrategyName, delta: i32) {
        let score = &mut self.scores[name.index()];
        *score = score.saturating_add(delta);
    }
}

pub struct Scorer {
    step: i32,
}

impl Scorer {
    pub fn new(step: i32) -> Self {
        Scorer { step }
    }

    /// Books one resolved round. `history` must not yet contain that round, so
    /// every strategy is asked the same question the selector asked.
    pub fn update(
        &self,
        table: &mut ScoreTable,
        strategies: &StrategySet,
        history: &History,
        ai_move: Move,
        outcome: Outcome,
    ) {
        let delta = match outcome {
            Outcome::PlayerLose => self.step,
            Outcome::PlayerWin => -self.step,
            Outcome::Draw => return,
        };
        for prediction in strategies.predictions(history) {
            if prediction.counter == ai_move {
                table.adjust(prediction.strategy, delta);
                debug!(
                    "{:?} {} to {}",
                    prediction.strategy,
                    if delta > 0 { "credited" } else { "debited" },
                    table.get(prediction.strategy)
                );
            }
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::tests::history_of;

    fn all_rock() -> History {
        history_of(&[(Move::Rock, Move::Scissors); 4])
    }

    #[test]
    fn credits_matching_strategies_on_player_loss() {
        let mut table = ScoreTable::new();
        // Frequency and Markov both say Paper against an all-Rock player.
        Scorer::default().update(
            &mut table,
            &StrategySet::new(),
            &all_rock(),
            Move::Paper,
            Outcome::PlayerLose,
        );
        assert_eq!(table.get(StrategyName::Frequency), 1);
        assert_eq!(table.get(StrategyName::Markov), 1);
        assert_eq!(table.get(StrategyName::Meta), 0);
    }

    #[test]
    fn debits_on_player_win() {
        let mut table = ScoreTable::new();
        Scorer::default().update(
            &mut table,
            &StrategySet::new(),
            &all_rock(),
            Move::Paper,
            Outcome::PlayerWin,
        );
        assert_eq!(table.get(StrategyName::Frequency), -1);
    }

    #[test]
    fn draws_change_nothing() {
        let mut table = ScoreTable::new();
        Scorer::default().update(
            &mut table,
            &StrategySet::new(),
            &all_rock(),
            Move::Paper,
            Outcome::Draw,
        );
        assert_eq!(table, ScoreTable::new());
    }

    #[test]
    fn moves_at_most_one_step() {
        let strategies = StrategySet::new();
        let history = history_of(&[
            (Move::Rock, Move::Paper),
            (Move::Scissors, Move::Paper),
            (Move::Rock, Move::Rock),
            (Move::Rock, Move::Scissors),
            (Move::Paper, Move::Paper),
            (Move::Rock, Move::Scissors),
            (Move::Scissors, Move::Paper),
        ]);
        for ai_move in Move::ALL {
            for outcome in [Outcome::PlayerWin, Outcome::PlayerLose, Outcome::Draw] {
                let mut table = ScoreTable::new();
                Scorer::default().update(&mut table, &strategies, &history, ai_move, outcome);
                assert!(table.iter().all(|(_, score)| (-1..=1).contains(&score)));
            }
        }
    }

    #[test]
    fn scores_are_unbounded() {
        let mut table = ScoreTable::new();
        let scorer = Scorer::default();
        let strategies = StrategySet::new();
        for _ in 0..20 {
            scorer.update(
                &mut table,
                &strategies,
                &all_rock(),
                Move::Paper,
                Outcome::PlayerWin,
            );
        }
        assert_eq!(table.get(StrategyName::Frequency), -20);
    }

    #[test]
    fn huge_steps_saturate() {
        let mut table = ScoreTable::new();
        let scorer = Scorer::new(i32::MAX);
        let strategies = StrategySet::new();
        for _ in 0..3 {
            scorer.update(
                &mut table,
                &strategies,
                &all_rock(),
                Move::Paper,
                Outcome::PlayerLose,
            );
        }
        assert_eq!(table.get(StrategyName::Frequency), i32::MAX);
        assert_eq!(table.get(StrategyName::Meta), 0);
    }
}
