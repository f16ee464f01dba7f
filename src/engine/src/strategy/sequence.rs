use common::model::game::Move;

use super::{modal_move, Strategy, StrategyName};
use crate::history::History;

/// First-order transitions: what does the player throw after their latest move?
#[derive(Debug, Clone, Copy, Default)]
pub struct Markov;

impl Strategy for Markov {
    fn name(&self) -> StrategyName {
        StrategyName::Markov
    }

    fn predict(&self, history: &History) -> Option<Move> {
        if history.len() < 3 {
            return None;
        }
        let moves: Vec<Move> = history.player_moves().collect();
        let latest = moves[moves.len() - 1];
        let mut transitions = [0u32; 3];
        for pair in moves.windows(2) {
            if pair[0] == latest {
                transitions[pair[1].index()] += 1;
            }
        }
        modal_move(transitions).map(Move::counter)
    }
}

/// Looks for an earlier occurrence of the player's last three moves and
/// expects whatever followed it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecentPattern;

const PATTERN_LEN: usize = 3;

impl Strategy for RecentPattern {
    fn name(&self) -> StrategyName {
        StrategyName::RecentPattern
    }

    fn predict(&self, history: &History) -> Option<Move> {
        if history.len() < 6 {
            return None;
        }
        let moves: Vec<Move> = history.player_moves().collect();
        let recent = &moves[moves.len() - PATTERN_LEN..];
        // Candidate windows start below len-4.
        (0..moves.len() - PATTERN_LEN - 1)
            .rev()
            .find(|&start| &moves[start..start + PATTERN_LEN] == recent)
            .map(|start| moves[start + PATTERN_LEN].counter())
    }
}
