mod config;
mod scheduler;
mod game_state;
mod controller;

pub use config::{ConfigError, GameConfig};
pub use scheduler::{ScheduledEvent, Scheduler};
pub use game_state::{GameState, TurnPhase};
pub use controller::{GameController, IgnoreReason, InputEvent, SelectOutcome};
