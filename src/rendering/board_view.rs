use macroquad::prelude::*;

use super::{CardFace, Renderer};
use crate::domain::{Card, StarRating, Symbol};
use crate::ui::{BoardLayout, Button};

/// What the screen shows for one card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView {
    pub symbol: Symbol,
    pub face: CardFace,
}

/// Retained projection of the game, drawn every frame.
///
/// The controller updates it through [`Renderer`]; the main loop calls
/// [`BoardView::draw`] once per frame.
#[derive(Clone, Debug, Default)]
pub struct BoardView {
    cards: Vec<CardView>,
    moves: u32,
    stars: u8,
    timer_text: String,
    summary: Option<String>,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn timer_text(&self) -> &str {
        &self.timer_text
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn summary_visible(&self) -> bool {
        self.summary.is_some()
    }

    /// Draw header, board, and the completion overlay if shown
    pub fn draw(&self, layout: &BoardLayout, restart: &Button, play_again: &Button, mouse_pos: (f32, f32)) {
        self.draw_header(layout, restart, mouse_pos);

        for (index, card) in self.cards.iter().enumerate() {
            draw_card(layout.card_rect(index), card);
        }

        if let Some(summary) = &self.summary {
            draw_summary(summary, play_again, mouse_pos);
        }
    }

    fn draw_header(&self, layout: &BoardLayout, restart: &Button, mouse_pos: (f32, f32)) {
        let x = layout.origin_x;
        let y = 45.0;

        // Filled stars first, then outlines
        for i in 0..StarRating::MAX {
            let cx = x + 14.0 + f32::from(i) * 30.0;
            let filled = i < self.stars;
            let color = Color::from_rgba(255, 196, 0, 255);
            if filled {
                draw_poly(cx, y - 8.0, 5, 11.0, -90.0, color);
            } else {
                draw_poly_lines(cx, y - 8.0, 5, 11.0, -90.0, 2.0, color);
            }
        }

        draw_text(&format!("{} Moves", self.moves), x + 110.0, y, 26.0, DARKGRAY);
        draw_text(&self.timer_text, x + 240.0, y, 26.0, DARKGRAY);
        restart.draw(mouse_pos);
    }
}

/// Background color for each face
fn face_color(face: CardFace) -> Color {
    match face {
        CardFace::Hidden => Color::from_rgba(46, 61, 73, 255),
        CardFace::Revealed => Color::from_rgba(2, 179, 228, 255),
        CardFace::Matched => Color::from_rgba(2, 204, 186, 255),
        CardFace::Mismatched => Color::from_rgba(229, 57, 53, 255),
    }
}

/// Accent color printed with the symbol name
fn symbol_color(symbol: Symbol) -> Color {
    match symbol {
        Symbol::Diamond => Color::from_rgba(255, 255, 255, 255),
        Symbol::PaperPlane => Color::from_rgba(255, 241, 118, 255),
        Symbol::Anchor => Color::from_rgba(197, 225, 165, 255),
        Symbol::Bolt => Color::from_rgba(255, 204, 128, 255),
        Symbol::Cube => Color::from_rgba(206, 147, 216, 255),
        Symbol::Leaf => Color::from_rgba(165, 214, 167, 255),
        Symbol::Bicycle => Color::from_rgba(144, 202, 249, 255),
        Symbol::Bomb => Color::from_rgba(30, 30, 30, 255),
    }
}

fn draw_card(rect: Rect, card: &CardView) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, face_color(card.face));

    if card.face == CardFace::Hidden {
        return;
    }

    let name = card.symbol.name();
    let size = measure_text(name, None, 22, 1.0);
    draw_text(
        name,
        rect.x + (rect.w - size.width) / 2.0,
        rect.y + (rect.h + size.height) / 2.0,
        22.0,
        symbol_color(card.symbol),
    );
}

fn draw_summary(summary: &str, play_again: &Button, mouse_pos: (f32, f32)) {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::from_rgba(0, 0, 0, 160));

    let title = "Congratulations!";
    let title_size = measure_text(title, None, 40, 1.0);
    let cy = screen_height() / 2.0;
    draw_text(title, (screen_width() - title_size.width) / 2.0, cy - 40.0, 40.0, WHITE);

    let size = measure_text(summary, None, 20, 1.0);
    draw_text(summary, (screen_width() - size.width) / 2.0, cy, 20.0, WHITE);

    play_again.draw(mouse_pos);
}

impl Renderer for BoardView {
    fn reset_board(&mut self, cards: &[Card]) {
        self.cards = cards
            .iter()
            .map(|card| CardView { symbol: card.symbol, face: CardFace::Hidden })
            .collect();
    }

    fn set_card_face(&mut self, index: usize, face: CardFace) {
        if let Some(card) = self.cards.get_mut(index) {
            card.face = face;
        }
    }

    fn set_moves(&mut self, moves: u32) {
        self.moves = moves;
    }

    fn set_stars(&mut self, stars: u8) {
        self.stars = stars;
    }

    fn set_timer_text(&mut self, text: &str) {
        self.timer_text = text.to_string();
    }

    fn show_completion_summary(&mut self, text: &str) {
        self.summary = Some(text.to_string());
    }

    fn hide_completion_summary(&mut self) {
        self.summary = None;
    }
}
