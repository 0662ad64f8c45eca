//! Deferred and periodic events owned by the controller.
//!
//! The game needs exactly two kinds of timed re-entry: the once-per-second
//! clock tick and the one-shot that turns a mismatched pair back over. Both
//! are held here as plain data with an explicit deadline, and the main loop
//! drives them by feeding elapsed frame time into [`Scheduler::next_due`].
//! Nothing fires unless the owner asks, so tests can step time exactly.

use std::time::Duration;

/// Event produced when a deadline is reached
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScheduledEvent {
    Tick,
    ResolveMismatch,
}

#[derive(Clone, Copy, Debug)]
struct Ticker {
    period: Duration,
    next_due: Duration,
}

/// At most one ticker and one pending mismatch at any time.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    ticker: Option<Ticker>,
    mismatch_due: Option<Duration>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Start the periodic ticker, replacing any existing one
    pub fn schedule_ticker(&mut self, period: Duration) {
        self.ticker = Some(Ticker {
            period,
            next_due: self.now + period,
        });
    }

    pub fn cancel_ticker(&mut self) {
        self.ticker = None;
    }

    pub fn ticker_active(&self) -> bool {
        self.ticker.is_some()
    }

    /// Arm the one-shot mismatch resolution, replacing any pending one
    pub fn schedule_mismatch(&mut self, delay: Duration) {
        self.mismatch_due = Some(self.now + delay);
    }

    pub fn cancel_mismatch(&mut self) {
        self.mismatch_due = None;
    }

    pub fn mismatch_pending(&self) -> bool {
        self.mismatch_due.is_some()
    }

    /// Cancel everything and rewind the clock
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Pop the earliest event due at or before `until`.
    ///
    /// Advances `now` to the deadline of the returned event. When nothing is
    /// due, `now` is moved to `until` and `None` is returned. A ticker re-arms
    /// one period after its own deadline so long frames produce every tick.
    /// On a tie the mismatch fires first.
    pub fn next_due(&mut self, until: Duration) -> Option<ScheduledEvent> {
        let tick_due = self.ticker.map(|t| t.next_due).filter(|&due| due <= until);
        let mismatch_due = self.mismatch_due.filter(|&due| due <= until);

        match (tick_due, mismatch_due) {
            (Some(tick), Some(mismatch)) if tick < mismatch => self.fire_tick(tick),
            (_, Some(mismatch)) => {
                self.now = self.now.max(mismatch);
                self.mismatch_due = None;
                Some(ScheduledEvent::ResolveMismatch)
            }
            (Some(tick), None) => self.fire_tick(tick),
            (None, None) => {
                self.now = self.now.max(until);
                None
            }
        }
    }

    fn fire_tick(&mut self, due: Duration) -> Option<ScheduledEvent> {
        self.now = self.now.max(due);
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.next_due = due + ticker.period;
        }
        Some(ScheduledEvent::Tick)
    }
}
