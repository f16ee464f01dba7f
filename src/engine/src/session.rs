use common::model::{
    game::{Move, Outcome, RoundRecord},
    messages::{RoundReport, SessionId},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use crate::{
    config::EngineConfig,
    error::{EngineError, Result},
    history::History,
    scorer::{ScoreTable, Scorer},
    selector::MoveSelector,
    strategy::StrategySet,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Playing,
    Revealing,
    Result,
    GameOver,
}

/// How the opponent persona is feeling. Cosmetic.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Confident,
    Nervous,
    Angry,
    Shocked,
    Smug,
}

impl Mood {
    pub fn derive(streak: u32, outcome: Option<Outcome>) -> Self {
        match outcome {
            Some(Outcome::PlayerWin) if streak >= 5 => Mood::Shocked,
            Some(Outcome::PlayerWin) if streak >= 3 => Mood::Angry,
            Some(Outcome::PlayerWin) => Mood::Nervous,
            Some(Outcome::PlayerLose) => Mood::Smug,
            _ if streak >= 5 => Mood::Nervous,
            _ => Mood::Confident,
        }
    }

    fn lines(self) -> &'static [&'static str] {
        match self {
            Mood::Confident => &[
                "Read you already.",
                "Your pattern is showing.",
                "You were about to throw that, weren't you?",
                "Luck has nothing to do with it.",
            ],
            Mood::Nervous => &[
                "Hm. Not bad.",
                "You just got lucky.",
                "I'm not even trying yet.",
            ],
            Mood::Angry => &["...what?", "That makes no sense.", "Again."],
            Mood::Shocked => &["Wait.", "That can't be right...", "How?"],
            Mood::Smug => &["Too easy.", "What will you throw next?", "Predictable."],
        }
    }
}

const INTRO_LINES: &[&str] = &[
    "I am the god of rock-paper-scissors.",
    "Let me read your patterns.",
    "How long can your streak last?",
];
const PLAYER_WIN_LINES: &[&str] = &["Argh!", "Lost that one...", "You got lucky this time."];
const PLAYER_LOSE_LINES: &[&str] = &["Victory.", "Got you.", "As expected."];
const DRAW_LINES: &[&str] = &["A draw.", "Sharp eyes.", "No mercy next time."];

fn pick(lines: &[&'static str], round: u32) -> String {
    lines[round as usize % lines.len()].to_owned()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session_id: SessionId,
    pub phase: Phase,
    pub streak: u32,
    pub best_streak: u32,
    pub total_rounds: u32,
    pub fire_count: u32,
    pub is_on_fire: bool,
    pub player_move: Option<Move>,
    pub ai_move: Option<Move>,
    pub round_result: Option<Outcome>,
    pub mood: Mood,
    pub message: String,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            session_id: SessionId::new(),
            phase: Phase::Ready,
            streak: 0,
            best_streak: 0,
            total_rounds: 0,
            fire_count: 0,
            is_on_fire: false,
            player_move: None,
            ai_move: None,
            round_result: None,
            mood: Mood::Confident,
            message: pick(INTRO_LINES, 0),
        }
    }

    /// Streak and fire bookkeeping for one finished round.
    pub fn record(&mut self, outcome: Outcome, fire_interval: u32) {
        match outcome {
            Outcome::PlayerWin => {
                self.streak += 1;
                if self.streak % fire_interval == 0 {
                    self.fire_count += 1;
                }
            }
            Outcome::PlayerLose => self.streak = 0,
            Outcome::Draw => {}
        }
        self.best_streak = self.best_streak.max(self.streak);
        self.is_on_fire = self.streak >= fire_interval;
        self.total_rounds += 1;
        self.round_result = Some(outcome);
        self.mood = Mood::derive(self.streak, Some(outcome));
        let lines = match outcome {
            Outcome::PlayerWin => PLAYER_WIN_LINES,
            Outcome::PlayerLose => PLAYER_LOSE_LINES,
            Outcome::Draw => DRAW_LINES,
        };
        self.message = pick(lines, self.total_rounds);
    }

    fn idle(&mut self) {
        self.player_move = None;
        self.ai_move = None;
        self.round_result = None;
        self.mood = Mood::derive(self.streak, None);
        self.message = pick(self.mood.lines(), self.total_rounds);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Session<R: Rng = StdRng> {
    config: EngineConfig,
    strategies: StrategySet,
    selector: MoveSelector,
    scorer: Scorer,
    history: History,
    scores: ScoreTable,
    state: SessionState,
    pending: Option<RoundRecord>,
    rng: R,
}

impl Session<StdRng> {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Session {
            selector: MoveSelector::new(config.vote),
            scorer: Scorer::new(config.score_step),
            config,
            strategies: StrategySet::new(),
            history: History::new(),
            scores: ScoreTable::new(),
            state: SessionState::new(),
            pending: None,
            rng,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fresh session, straight into `Playing`. Allowed from any phase.
    pub fn start_session(&mut self) -> SessionState {
        self.clear();
        self.state.phase = Phase::Playing;
        self.state.idle();
        let _span = info_span!("session", id = %self.state.session_id).entered();
        info!("Session started");
        self.state.clone()
    }

    /// Back to `Ready`, discarding the whole session.
    pub fn reset(&mut self) -> SessionState {
        self.clear();
        let _span = info_span!("session", id = %self.state.session_id).entered();
        info!("Session reset");
        self.state.clone()
    }

    pub fn submit_move(&mut self, player_move: Move) -> Result<RoundReport> {
        let _span = info_span!("session", id = %self.state.session_id).entered();
        self.expect_phase("submit_move", Phase::Playing)?;

        let difficulty = self.config.difficulty.difficulty(self.state.streak);
        let ai_move = self.selector.select(
            &self.strategies,
            &self.history,
            &self.scores,
            difficulty,
            &mut self.rng,
        );
        let record = RoundRecord::new(player_move, ai_move);
        debug!(
            "Round {}: player {:?}, opponent {:?} at difficulty {:.2} -> {:?}",
            self.state.total_rounds + 1,
            player_move,
            ai_move,
            difficulty,
            record.outcome
        );

        self.pending = Some(record);
        self.state.phase = Phase::Revealing;
        self.state.player_move = Some(player_move);
        self.state.ai_move = Some(ai_move);
        Ok(RoundReport {
            ai_move,
            outcome: record.outcome,
        })
    }

    pub fn resolve_round(&mut self) -> Result<SessionState> {
        let _span = info_span!("session", id = %self.state.session_id).entered();
        self.expect_phase("resolve_round", Phase::Revealing)?;
        let Some(record) = self.pending.take() else {
            warn!("Revealing without a pending round");
            return Err(EngineError::WrongPhase {
                operation: "resolve_round",
                phase: self.state.phase,
            });
        };

        // Score against the history the selector saw, then book the round.
        self.scorer.update(
            &mut self.scores,
            &self.strategies,
            &self.history,
            record.ai_move,
            record.outcome,
        );
        self.history.append(record);
        self.state.record(record.outcome, self.config.fire_interval);

        if record.outcome == Outcome::PlayerLose {
            self.state.phase = Phase::GameOver;
            info!(
                "Game over after {} rounds, best streak {}",
                self.state.total_rounds, self.state.best_streak
            );
        } else {
            self.state.phase = Phase::Result;
        }
        Ok(self.state.clone())
    }

    pub fn continue_session(&mut self) -> Result<SessionState> {
        let _span = info_span!("session", id = %self.state.session_id).entered();
        self.expect_phase("continue_session", Phase::Result)?;
        self.state.phase = Phase::Playing;
        self.state.idle();
        Ok(self.state.clone())
    }

    fn expect_phase(&self, operation: &'static str, expected: Phase) -> Result<()> {
        if self.state.phase == expected {
            return Ok(());
        }
        warn!(
            "Got {} in {:?} phase, expected {:?}",
            operation, self.state.phase, expected
        );
        Err(EngineError::WrongPhase {
            operation,
            phase: self.state.phase,
        })
    }

    fn clear(&mut self) {
        self.history.clear();
        self.scores.clear();
        self.pending = None;
        self.state = SessionState::new();
    }
}
