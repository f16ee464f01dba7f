use common::model::game::{Move, RoundRecord};

/// Append-only log of the rounds played in the current session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    rounds: Vec<RoundRecord>,
}

impl History {
    pub fn new() -> Self {
        History { rounds: Vec::new() }
    }

    pub fn append(&mut self, record: RoundRecord) {
        self.rounds.push(record);
    }

    pub fn all(&self) -> &[RoundRecord] {
        &self.rounds
    }

    pub fn clear(&mut self) {
        self.rounds.clear();
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn last(&self) -> Option<&RoundRecord> {
        self.rounds.last()
    }

    pub fn player_moves(&self) -> impl DoubleEndedIterator<Item = Move> + ExactSizeIterator + '_ {
        self.rounds.iter().map(|round| round.player_move)
    }
}

impl FromIterator<RoundRecord> for History {
    fn from_iter<I: IntoIterator<Item = RoundRecord>>(iter: I) -> Self {
        History {
            rounds: iter.into_iter().collect(),
        }
    }
}
