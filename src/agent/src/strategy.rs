use std::str::FromStr;

use common::model::game::{Move, Outcome, RoundRecord};
use rand::{Rng, RngCore};

/// A scripted player. `history` is the opponent's view of the session so far.
pub trait PlayerStrategy {
    fn make_move(&self, history: &[RoundRecord], rng: &mut dyn RngCore) -> Move;
}

// Trivial strategies
pub struct OnlyRock {}
impl PlayerStrategy for OnlyRock {
    fn make_move(&self, _: &[RoundRecord], _: &mut dyn RngCore) -> Move {
        Move::Rock
    }
}
pub struct OnlyPaper {}
impl PlayerStrategy for OnlyPaper {
    fn make_move(&self, _: &[RoundRecord], _: &mut dyn RngCore) -> Move {
        Move::Paper
    }
}
pub struct OnlyScissors {}
impl PlayerStrategy for OnlyScissors {
    fn make_move(&self, _: &[RoundRecord], _: &mut dyn RngCore) -> Move {
        Move::Scissors
    }
}

// Random
pub struct RandomMove {}
impl PlayerStrategy for RandomMove {
    fn make_move(&self, _: &[RoundRecord], rng: &mut dyn RngCore) -> Move {
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }
}

// Rock, Paper, Scissors, Rock, ...
pub struct Cycle {}
impl PlayerStrategy for Cycle {
    fn make_move(&self, history: &[RoundRecord], _: &mut dyn RngCore) -> Move {
        Move::ALL[history.len() % Move::ALL.len()]
    }
}

// Throws whatever the opponent threw last
pub struct Mirror {}
impl PlayerStrategy for Mirror {
    fn make_move(&self, history: &[RoundRecord], _: &mut dyn RngCore) -> Move {
        history.last().map_or(Move::Rock, |round| round.ai_move)
    }
}

// Keeps a winning move, switches to its counter after a loss
pub struct WinStayLoseShift {}
impl PlayerStrategy for WinStayLoseShift {
    fn make_move(&self, history: &[RoundRecord], rng: &mut dyn RngCore) -> Move {
        match history.last() {
            Some(round) if round.outcome == Outcome::PlayerLose => round.player_move.counter(),
            Some(round) => round.player_move,
            None => RandomMove {}.make_move(history, rng),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Rock,
    Paper,
    Scissors,
    Random,
    Cycle,
    Mirror,
    WinStayLoseShift,
}

impl PlayerKind {
    pub fn build(self) -> Box<dyn PlayerStrategy> {
        match self {
            PlayerKind::Rock => Box::new(OnlyRock {}),
            PlayerKind::Paper => Box::new(OnlyPaper {}),
            PlayerKind::Scissors => Box::new(OnlyScissors {}),
            PlayerKind::Random => Box::new(RandomMove {}),
            PlayerKind::Cycle => Box::new(Cycle {}),
            PlayerKind::Mirror => Box::new(Mirror {}),
            PlayerKind::WinStayLoseShift => Box::new(WinStayLoseShift {}),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rock" => Ok(PlayerKind::Rock),
            "paper" => Ok(PlayerKind::Paper),
            "scissors" => Ok(PlayerKind::Scissors),
            "random" => Ok(PlayerKind::Random),
            "cycle" => Ok(PlayerKind::Cycle),
            "mirror" => Ok(PlayerKind::Mirror),
            "wsls" | "win-stay-lose-shift" => Ok(PlayerKind::WinStayLoseShift),
            other => Err(format!("Unknown player strategy: {other}")),
        }
    }
}
