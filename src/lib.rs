// Domain layer - Cards, deck, rating, clock
pub mod domain;

// Application layer - Game controller, timers, configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Card, Deck, FaceState, StarRating, Symbol};
pub use application::{GameConfig, GameController, GameState, InputEvent, SelectOutcome};
pub use rendering::{BoardView, RecordingRenderer, Renderer};
