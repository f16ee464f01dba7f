use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    difficulty::DifficultyCurve,
    error::{EngineError, Result},
};

/// Weight of one vote: `(1 + score_weight * score) / (rank_decay * rank + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteWeights {
    pub score_weight: f64,
    pub rank_decay: f64,
}

impl Default for VoteWeights {
    fn default() -> Self {
        VoteWeights {
            score_weight: 0.2,
            rank_decay: 0.5,
        }
    }
}

impl VoteWeights {
    pub fn weight(&self, score: i32, rank: usize) -> f64 {
        (1.0 + self.score_weight * f64::from(score)) / (self.rank_decay * rank as f64 + 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub vote: VoteWeights,
    pub score_step: i32,
    pub difficulty: DifficultyCurve,
    pub fire_interval: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            vote: VoteWeights::default(),
            score_step: 1,
            difficulty: DifficultyCurve::default(),
            fire_interval: 5,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        let curve = &self.difficulty;
        if !(0.0..=1.0).contains(&curve.base) {
            return Err(EngineError::InvalidConfig(format!(
                "difficulty.base must lie in [0, 1], got {}",
                curve.base
            )));
        }
        // The dumb branch has to stay reachable at any streak.
        if !(curve.base..1.0).contains(&curve.cap) {
            return Err(EngineError::InvalidConfig(format!(
                "difficulty.cap must lie in [base, 1), got {}",
                curve.cap
            )));
        }
        if curve.step < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "difficulty.step must not be negative, got {}",
                curve.step
            )));
        }
        if self.fire_interval == 0 {
            return Err(EngineError::InvalidConfig(
                "fire_interval must be positive".to_owned(),
            ));
        }
        if self.score_step <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "score_step must be positive, got {}",
                self.score_step
            )));
        }
        Ok(())
    }
}
