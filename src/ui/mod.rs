mod button;

pub use button::Button;

use macroquad::prelude::{Rect, screen_height, screen_width, vec2};

use crate::domain::DECK_SIZE;

pub const BOARD_COLUMNS: usize = 4;
pub const CARD_SIZE: f32 = 110.0;
pub const CARD_GAP: f32 = 16.0;
pub const HEADER_HEIGHT: f32 = 70.0;
pub const BUTTON_WIDTH: f32 = 120.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Geometry of the card grid for a given window size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
}

impl BoardLayout {
    /// Center the grid horizontally below the header
    pub fn for_screen(width: f32, height: f32) -> Self {
        let rows = DECK_SIZE.div_ceil(BOARD_COLUMNS);
        let grid_h = Self::span(rows);
        let origin_x = ((width - Self::span(BOARD_COLUMNS)) / 2.0).max(0.0);
        let origin_y = HEADER_HEIGHT + ((height - HEADER_HEIGHT - grid_h) / 2.0).max(0.0);
        Self { origin_x, origin_y }
    }

    fn span(cells: usize) -> f32 {
        cells as f32 * CARD_SIZE + cells.saturating_sub(1) as f32 * CARD_GAP
    }

    /// Screen rectangle of the card at `index`
    pub fn card_rect(&self, index: usize) -> Rect {
        let col = index % BOARD_COLUMNS;
        let row = index / BOARD_COLUMNS;
        Rect::new(
            self.origin_x + col as f32 * (CARD_SIZE + CARD_GAP),
            self.origin_y + row as f32 * (CARD_SIZE + CARD_GAP),
            CARD_SIZE,
            CARD_SIZE,
        )
    }

    /// Index of the card under a screen point, gaps excluded
    pub fn card_at(&self, pos: (f32, f32)) -> Option<usize> {
        let point = vec2(pos.0, pos.1);
        (0..DECK_SIZE).find(|&i| self.card_rect(i).contains(point))
    }

    /// Restart button, top right of the header
    pub fn restart_button(&self) -> Button {
        let x = self.origin_x + Self::span(BOARD_COLUMNS) - BUTTON_WIDTH;
        let y = (HEADER_HEIGHT - BUTTON_HEIGHT) / 2.0;
        Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, "Restart")
    }

    /// Play-again button centered on the board, shown with the summary
    pub fn play_again_button(&self) -> Button {
        let center_x = self.origin_x + Self::span(BOARD_COLUMNS) / 2.0;
        let center_y = self.origin_y + Self::span(DECK_SIZE / BOARD_COLUMNS) / 2.0;
        Button::new(
            center_x - BUTTON_WIDTH / 2.0,
            center_y + BUTTON_HEIGHT,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
            "Play again",
        )
    }
}

/// Layout for the current window
pub fn board_layout() -> BoardLayout {
    BoardLayout::for_screen(screen_width(), screen_height())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> BoardLayout {
        BoardLayout { origin_x: 0.0, origin_y: 100.0 }
    }

    #[test]
    fn test_card_at_hits_each_card_center() {
        let layout = layout();
        for i in 0..DECK_SIZE {
            let rect = layout.card_rect(i);
            let center = (rect.x + rect.w / 2.0, rect.y + rect.h / 2.0);
            assert_eq!(layout.card_at(center), Some(i));
        }
    }

    #[test]
    fn test_card_at_misses_gaps_and_header() {
        let layout = layout();
        assert_eq!(layout.card_at((CARD_SIZE + CARD_GAP / 2.0, 150.0)), None);
        assert_eq!(layout.card_at((10.0, 50.0)), None);
    }

    #[test]
    fn test_for_screen_centers_grid() {
        let width = 1000.0;
        let layout = BoardLayout::for_screen(width, 800.0);
        let grid_w = 4.0 * CARD_SIZE + 3.0 * CARD_GAP;
        assert!((layout.origin_x - (width - grid_w) / 2.0).abs() < f32::EPSILON);
        assert!(layout.origin_y >= HEADER_HEIGHT);
    }

    #[test]
    fn test_buttons_do_not_overlap_cards() {
        let layout = BoardLayout::for_screen(1000.0, 800.0);
        let restart = layout.restart_button();
        assert_eq!(restart.text(), "Restart");
        for i in 0..DECK_SIZE {
            let rect = layout.card_rect(i);
            assert!(!restart.is_hovered((rect.x + 1.0, rect.y + 1.0)));
        }
    }
}
