mod board_view;
mod recording;

pub use board_view::{BoardView, CardView};
pub use recording::{RecordingRenderer, RenderCommand};

use crate::domain::Card;

/// How a card should look on screen
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardFace {
    #[default]
    Hidden,
    Revealed,
    Matched,
    /// Transient highlight on a wrong pair before it turns back over
    Mismatched,
}

/// Presentation side of the game.
///
/// The controller pushes every visible change through these calls; a
/// renderer never changes game state on its own.
pub trait Renderer {
    /// Redraw the whole board face-down from a fresh deck
    fn reset_board(&mut self, cards: &[Card]);

    fn set_card_face(&mut self, index: usize, face: CardFace);

    fn set_moves(&mut self, moves: u32);

    /// Number of filled stars, 1 to 3
    fn set_stars(&mut self, stars: u8);

    fn set_timer_text(&mut self, text: &str);

    fn show_completion_summary(&mut self, text: &str);

    fn hide_completion_summary(&mut self);
}
