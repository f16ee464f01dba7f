use std::cmp::Reverse;

use common::model::game::Move;
use itertools::Itertools;
use rand::Rng;
use tracing::debug;

use crate::{
    config::VoteWeights,
    history::History,
    scorer::ScoreTable,
    strategy::{Prediction, StrategySet},
};

/// Vote totals per move, indexed canonically.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Votes([f64; 3]);

impl Votes {
    pub fn get(&self, m: Move) -> f64 {
        self.0[m.index()]
    }

    /// Highest total; the earlier move in canonical order wins ties.
    pub fn winner(&self) -> Move {
        let mut best = Move::Rock;
        for m in Move::ALL {
            if self.get(m) > self.get(best) {
                best = m;
            }
        }
        best
    }
}

pub struct MoveSelector {
    weights: VoteWeights,
}

impl MoveSelector {
    pub fn new(weights: VoteWeights) -> Self {
        MoveSelector { weights }
    }

    pub fn select<R: Rng>(
        &self,
        strategies: &StrategySet,
        history: &History,
        scores: &ScoreTable,
        difficulty: f64,
        rng: &mut R,
    ) -> Move {
        let draw: f64 = rng.gen();
        if draw > difficulty {
            let choice = random_move(rng);
            debug!("Gate draw {:.3} > {:.3}, playing {:?} blind", draw, difficulty, choice);
            return choice;
        }

        let predictions = strategies.predictions(history);
        if predictions.is_empty() {
            let choice = random_move(rng);
            debug!("No strategy has an opinion, playing {:?}", choice);
            return choice;
        }

        let votes = self.tally(&predictions, scores);
        let choice = votes.winner();
        debug!("Votes {:?} from {} predictions, playing {:?}", votes, predictions.len(), choice);
        choice
    }

    /// Best-scoring strategies vote first and count the most.
    pub fn tally(&self, predictions: &[Prediction], scores: &ScoreTable) -> Votes {
        let mut votes = Votes::default();
        let ranked = predictions
            .iter()
            .sorted_by_key(|p| (Reverse(scores.get(p.strategy)), p.strategy));
        for (rank, prediction) in ranked.enumerate() {
            votes.0[prediction.counter.index()] +=
                self.weights.weight(scores.get(prediction.strategy), rank);
        }
        votes
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(VoteWeights::default())
    }
}

pub fn random_move<R: Rng>(rng: &mut R) -> Move {
    Move::ALL[rng.gen_range(0..Move::ALL.len())]
}
