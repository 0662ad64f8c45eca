use super::{CardFace, Renderer};
use crate::domain::{Card, Symbol};

/// One renderer call, as recorded
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderCommand {
    ResetBoard(Vec<Symbol>),
    SetCardFace(usize, CardFace),
    SetMoves(u32),
    SetStars(u8),
    SetTimerText(String),
    ShowCompletionSummary(String),
    HideCompletionSummary,
}

/// Renderer that draws nothing and remembers every call in order.
/// Used to drive the controller headless.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Last face set for `index` since the most recent board reset
    pub fn face_of(&self, index: usize) -> Option<CardFace> {
        self.commands
            .iter()
            .rev()
            .take_while(|cmd| !matches!(cmd, RenderCommand::ResetBoard(_)))
            .find_map(|cmd| match cmd {
                RenderCommand::SetCardFace(i, face) if *i == index => Some(*face),
                _ => None,
            })
    }
}

impl Renderer for RecordingRenderer {
    fn reset_board(&mut self, cards: &[Card]) {
        let symbols = cards.iter().map(|card| card.symbol).collect();
        self.commands.push(RenderCommand::ResetBoard(symbols));
    }

    fn set_card_face(&mut self, index: usize, face: CardFace) {
        self.commands.push(RenderCommand::SetCardFace(index, face));
    }

    fn set_moves(&mut self, moves: u32) {
        self.commands.push(RenderCommand::SetMoves(moves));
    }

    fn set_stars(&mut self, stars: u8) {
        self.commands.push(RenderCommand::SetStars(stars));
    }

    fn set_timer_text(&mut self, text: &str) {
        self.commands.push(RenderCommand::SetTimerText(text.to_string()));
    }

    fn show_completion_summary(&mut self, text: &str) {
        self.commands.push(RenderCommand::ShowCompletionSummary(text.to_string()));
    }

    fn hide_completion_summary(&mut self) {
        self.commands.push(RenderCommand::HideCompletionSummary);
    }
}
