pub mod config;
pub mod difficulty;
pub mod error;
pub mod history;
pub mod scorer;
pub mod selector;
pub mod session;
pub mod strategy;

pub use config::EngineConfig;
pub use error::EngineError;
pub use session::{Mood, Phase, Session, SessionState};
