use common::model::game::Move;
use engine::{EngineError, Phase, Session};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::strategy::PlayerStrategy;

/// How one game went, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub rounds: u32,
    pub best_streak: u32,
    pub fire_count: u32,
    pub lost: bool,
}

/// Drives an engine session with a scripted player.
pub struct Client<R: Rng = StdRng> {
    strategy: Box<dyn PlayerStrategy>,
    session: Session<R>,
    player_rng: StdRng,
}

impl<R: Rng> Client<R> {
    pub fn new(strategy: Box<dyn PlayerStrategy>, session: Session<R>, player_seed: u64) -> Self {
        Client {
            strategy,
            session,
            player_rng: StdRng::seed_from_u64(player_seed),
        }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Plays one fresh game until the player loses or `max_rounds` pass.
    pub fn play_game(&mut self, max_rounds: u32) -> Result<GameSummary, EngineError> {
        self.session.start_session();
        while self.session.state().total_rounds < max_rounds {
            let player_move = self.play();
            let report = self.session.submit_move(player_move)?;
            debug!("Threw {:?} into {:?}: {:?}", player_move, report.ai_move, report.outcome);
            let state = self.session.resolve_round()?;
            if state.phase == Phase::GameOver {
                break;
            }
            self.session.continue_session()?;
        }
        let state = self.session.state();
        Ok(GameSummary {
            rounds: state.total_rounds,
            best_streak: state.best_streak,
            fire_count: state.fire_count,
            lost: state.phase == Phase::GameOver,
        })
    }

    fn play(&mut self) -> Move {
        let rng: &mut dyn RngCore = &mut self.player_rng;
        self.strategy.make_move(self.session.history().all(), rng)
    }
}
