use crate::domain::{format_elapsed, StarRating, PAIR_COUNT};

/// Where the current turn stands
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TurnPhase {
    /// No card is waiting for a partner
    Idle,
    /// One card is face-up, waiting for the second pick
    AwaitingSecondSelection,
    /// A wrong pair is on display and input is locked
    ResolvingMismatch,
    /// Every pair has been found
    GameOver,
}

/// GameState holds the counters and flags of one game.
/// Only the controller writes it; everything else reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub move_count: u32,
    pub matched_pair_count: usize,
    pub pending_card: Option<usize>,
    pub is_resolving_mismatch: bool,
    /// Pair currently highlighted as a mismatch, if any
    pub mismatched: Option<(usize, usize)>,
    pub elapsed_seconds: u64,
    pub timer_running: bool,
    pub star_rating: StarRating,
}

impl GameState {
    /// State at the start of every game
    pub fn new() -> Self {
        Self {
            move_count: 0,
            matched_pair_count: 0,
            pending_card: None,
            is_resolving_mismatch: false,
            mismatched: None,
            elapsed_seconds: 0,
            timer_running: false,
            star_rating: StarRating::FULL,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pair_count == PAIR_COUNT
    }

    /// The next selection should start the clock
    pub fn is_fresh(&self) -> bool {
        !self.timer_running && self.move_count == 0 && self.pending_card.is_none()
    }

    pub fn phase(&self) -> TurnPhase {
        if self.is_complete() {
            TurnPhase::GameOver
        } else if self.is_resolving_mismatch {
            TurnPhase::ResolvingMismatch
        } else if self.pending_card.is_some() {
            TurnPhase::AwaitingSecondSelection
        } else {
            TurnPhase::Idle
        }
    }

    /// Count one pair comparison and update the rating
    pub fn record_move(&mut self) {
        self.move_count += 1;
        self.star_rating = self.star_rating.after_moves(self.move_count);
    }

    pub fn timer_text(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }

    /// End-of-game message shown in the completion overlay
    pub fn summary(&self) -> String {
        format!(
            "You made {} moves and earned {} out of {} stars in a time of {}!",
            self.move_count,
            self.star_rating.stars(),
            StarRating::MAX,
            self.timer_text()
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
