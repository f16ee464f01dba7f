mod behavior;
mod frequency;
mod sequence;

use common::model::game::Move;
use serde::{Deserialize, Serialize};

use crate::history::History;

pub use behavior::{AntiRepeat, WinStayLoseShift};
pub use frequency::{Frequency, Meta};
pub use sequence::{Markov, RecentPattern};

/// Closed set of strategies. Declaration order is the tie-break priority.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrategyName {
    Frequency,
    Markov,
    WinStayLoseShift,
    AntiRepeat,
    RecentPattern,
    Meta,
}

impl StrategyName {
    pub const ALL: [StrategyName; 6] = [
        StrategyName::Frequency,
        StrategyName::Markov,
        StrategyName::WinStayLoseShift,
        StrategyName::AntiRepeat,
        StrategyName::RecentPattern,
        StrategyName::Meta,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

// Returns the move to play against the expected throw, or None to abstain.
pub trait Strategy {
    fn name(&self) -> StrategyName;
    fn predict(&self, history: &History) -> Option<Move>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub strategy: StrategyName,
    pub counter: Move,
}

pub struct StrategySet {
    strategies: [Box<dyn Strategy>; 6],
}

impl StrategySet {
    pub fn new() -> Self {
        StrategySet {
            strategies: [
                Box::new(Frequency),
                Box::new(Markov),
                Box::new(WinStayLoseShift),
                Box::new(AntiRepeat),
                Box::new(RecentPattern),
                Box::new(Meta::default()),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Strategy> {
        self.strategies.iter().map(|strategy| strategy.as_ref())
    }

    /// Every opinion, in priority order.
    pub fn predictions(&self, history: &History) -> Vec<Prediction> {
        self.iter()
            .filter_map(|strategy| {
                strategy.predict(history).map(|counter| Prediction {
                    strategy: strategy.name(),
                    counter,
                })
            })
            .collect()
    }
}

impl Default for StrategySet {
    fn default() -> Self {
        Self::new()
    }
}

/// Most common move in `counts`, lowest canonical index on ties. `None` when all are zero.
fn modal_move(counts: [u32; 3]) -> Option<Move> {
    let mut best: Option<(Move, u32)> = None;
    for m in Move::ALL {
        let count = counts[m.index()];
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((m, count));
        }
    }
    best.map(|(m, _)| m)
}
