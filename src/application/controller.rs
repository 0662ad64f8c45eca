use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use super::{GameConfig, GameState, ScheduledEvent, Scheduler};
use crate::domain::{Deck, FaceState};
use crate::rendering::{CardFace, Renderer};

/// Input events the controller accepts from the environment
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    SelectCard(usize),
    Restart,
    PlayAgain,
}

/// Why a selection was dropped
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IgnoreReason {
    OutOfRange,
    AlreadyRevealed,
    AlreadyMatched,
    ResolvingMismatch,
}

/// What a call to [`GameController::select_card`] did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Ignored(IgnoreReason),
    /// First card of a turn turned face-up
    FirstRevealed,
    /// Second card completed a pair
    Matched,
    /// Second card completed the final pair; carries the summary text
    Completed(String),
    /// Second card did not match; input is locked until resolution
    Mismatched,
}

/// GameController owns the deck, the game state, and the timers,
/// and is the only writer of any of them. Every change is pushed
/// to the renderer as it happens.
pub struct GameController<R: Renderer> {
    config: GameConfig,
    rng: StdRng,
    deck: Deck,
    state: GameState,
    scheduler: Scheduler,
    renderer: R,
}

impl<R: Renderer> GameController<R> {
    /// Create a controller and deal the first game
    pub fn new(config: GameConfig, seed: u64, renderer: R) -> Self {
        let seed = config.seed.unwrap_or(seed);
        info!(seed, "creating game controller");
        let mut controller = Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            deck: Deck::new(),
            state: GameState::new(),
            scheduler: Scheduler::new(),
            renderer,
        };
        controller.start_new_game();
        controller
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn timer_text(&self) -> String {
        self.state.timer_text()
    }

    /// Dispatch one input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::SelectCard(index) => {
                self.select_card(index);
            }
            InputEvent::Restart => self.start_new_game(),
            InputEvent::PlayAgain => {
                self.renderer.hide_completion_summary();
                self.start_new_game();
            }
        }
    }

    /// Shuffle and reset everything. Safe to call at any point.
    pub fn start_new_game(&mut self) {
        self.scheduler.reset();
        self.deck.shuffle(&mut self.rng);
        self.state = GameState::new();
        info!("new game dealt");

        self.renderer.reset_board(self.deck.cards());
        self.renderer.set_moves(0);
        self.renderer.set_timer_text(&self.state.timer_text());
        self.renderer.set_stars(self.state.star_rating.stars());
        self.renderer.hide_completion_summary();
    }

    /// Turn a card face-up, completing a turn if another card is waiting
    pub fn select_card(&mut self, index: usize) -> SelectOutcome {
        if let Some(reason) = self.rejection(index) {
            debug!(index, ?reason, "selection ignored");
            return SelectOutcome::Ignored(reason);
        }

        if self.state.is_fresh() {
            self.state.timer_running = true;
            self.scheduler.schedule_ticker(self.config.tick_interval);
            debug!("timer started");
        }

        self.deck.set_face(index, FaceState::Revealed);
        self.renderer.set_card_face(index, CardFace::Revealed);

        let Some(first) = self.state.pending_card else {
            self.state.pending_card = Some(index);
            debug!(index, "first card revealed");
            return SelectOutcome::FirstRevealed;
        };

        self.state.record_move();
        self.renderer.set_moves(self.state.move_count);
        self.renderer.set_stars(self.state.star_rating.stars());

        if self.is_pair(first, index) {
            self.resolve_match(first, index)
        } else {
            self.begin_mismatch(first, index)
        }
    }

    /// Advance time by `dt`, running every timer that falls due
    pub fn advance(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(event) = self.scheduler.next_due(until) {
            match event {
                ScheduledEvent::Tick => self.tick(),
                ScheduledEvent::ResolveMismatch => self.resolve_mismatch(),
            }
        }
    }

    fn rejection(&self, index: usize) -> Option<IgnoreReason> {
        let Some(card) = self.deck.get(index) else {
            return Some(IgnoreReason::OutOfRange);
        };
        match card.face {
            FaceState::Matched => Some(IgnoreReason::AlreadyMatched),
            FaceState::Revealed => Some(IgnoreReason::AlreadyRevealed),
            FaceState::Hidden if self.state.is_resolving_mismatch => {
                Some(IgnoreReason::ResolvingMismatch)
            }
            FaceState::Hidden => None,
        }
    }

    fn is_pair(&self, a: usize, b: usize) -> bool {
        match (self.deck.get(a), self.deck.get(b)) {
            (Some(first), Some(second)) => first.pairs_with(second),
            _ => false,
        }
    }

    fn resolve_match(&mut self, first: usize, second: usize) -> SelectOutcome {
        for index in [first, second] {
            self.deck.set_face(index, FaceState::Matched);
            self.renderer.set_card_face(index, CardFace::Matched);
        }
        self.state.pending_card = None;
        self.state.matched_pair_count += 1;
        debug!(first, second, pairs = self.state.matched_pair_count, "pair matched");

        if !self.state.is_complete() {
            return SelectOutcome::Matched;
        }

        self.scheduler.cancel_ticker();
        self.state.timer_running = false;
        let summary = self.state.summary();
        info!(
            moves = self.state.move_count,
            stars = self.state.star_rating.stars(),
            seconds = self.state.elapsed_seconds,
            "game complete"
        );
        self.renderer.show_completion_summary(&summary);
        SelectOutcome::Completed(summary)
    }

    fn begin_mismatch(&mut self, first: usize, second: usize) -> SelectOutcome {
        self.state.is_resolving_mismatch = true;
        self.state.mismatched = Some((first, second));
        self.renderer.set_card_face(first, CardFace::Mismatched);
        self.renderer.set_card_face(second, CardFace::Mismatched);
        self.scheduler.schedule_mismatch(self.config.mismatch_delay);
        debug!(first, second, "mismatch");
        SelectOutcome::Mismatched
    }

    fn resolve_mismatch(&mut self) {
        let Some((first, second)) = self.state.mismatched.take() else {
            return;
        };
        for index in [first, second] {
            self.deck.set_face(index, FaceState::Hidden);
            self.renderer.set_card_face(index, CardFace::Hidden);
        }
        self.state.pending_card = None;
        self.state.is_resolving_mismatch = false;
        debug!(first, second, "mismatch resolved");
    }

    fn tick(&mut self) {
        if !self.state.timer_running {
            return;
        }
        self.state.elapsed_seconds += 1;
        let text = self.state.timer_text();
        trace!(%text, "tick");
        self.renderer.set_timer_text(&text);
    }
}
