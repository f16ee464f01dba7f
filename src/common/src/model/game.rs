use serde::{Deserialize, Serialize};

/// Result of a round, always from the player's side of the table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWin,
    PlayerLose,
    Draw,
}
impl Outcome {
    pub fn resolve(player_move: Move, ai_move: Move) -> Self {
        if player_move == ai_move {
            Outcome::Draw
        } else if player_move.beats(&ai_move) {
            Outcome::PlayerWin
        } else {
            Outcome::PlayerLose
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}
impl Move {
    /// Canonical order, also used for every tie-break.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn beats(&self, other: &Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    /// The move that beats this one.
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// The move this one beats.
    pub fn loser(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }
}

/// One completed round. Never mutated after it is appended to a history.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub player_move: Move,
    pub ai_move: Move,
    pub outcome: Outcome,
}
impl RoundRecord {
    pub fn new(player_move: Move, ai_move: Move) -> Self {
        RoundRecord {
            player_move,
            ai_move,
            outcome: Outcome::resolve(player_move, ai_move),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_cyclic() {
        for m in Move::ALL {
            assert_ne!(m.counter(), m);
            assert_ne!(m.counter().counter(), m);
            assert_eq!(m.counter().counter().counter(), m);
            assert!(m.counter().beats(&m));
            assert!(!m.beats(&m));
            assert_eq!(m.loser().counter(), m);
        }
    }

    #[test]
    fn resolve_covers_every_pairing() {
        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;
        for player in Move::ALL {
            for ai in Move::ALL {
                match Outcome::resolve(player, ai) {
                    Outcome::PlayerWin => wins += 1,
                    Outcome::PlayerLose => losses += 1,
                    Outcome::Draw => draws += 1,
                }
            }
        }
        assert_eq!((wins, losses, draws), (3, 3, 3));
        assert_eq!(Outcome::resolve(Move::Rock, Move::Scissors), Outcome::PlayerWin);
        assert_eq!(Outcome::resolve(Move::Rock, Move::Paper), Outcome::PlayerLose);
    }

    #[test]
    fn round_record_derives_outcome() {
        let record = RoundRecord::new(Move::Scissors, Move::Paper);
        assert_eq!(record.outcome, Outcome::PlayerWin);
    }
}
