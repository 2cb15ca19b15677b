//! # Draw Context
//!
//! All mutable state of the drawing core in one value: the command history,
//! the text ring and the replay state. Every primitive is a method on
//! [`DrawContext`] taking the pixel surface as an argument, so the context
//! never owns or locks the display.
//!
//! A kernel that wants a single global context wraps it the usual way:
//!
//! ```ignore
//! pub static DRAW: Mutex<DrawContext> = Mutex::new(DrawContext::new());
//! ```

use crate::config::Config;
use crate::history::replay::ReplayState;
use crate::history::{HistoryBuffer, TextSlotStore};
use crate::timer::{TickSource, TIMER_TICKS};

pub struct DrawContext {
    pub(crate) config: Config,
    pub(crate) history: HistoryBuffer,
    pub(crate) text_slots: TextSlotStore,
    pub(crate) replay: ReplayState,
    clock: Option<&'static (dyn TickSource + Sync)>,
}

impl DrawContext {
    /// Context for the 320×240 VGA display.
    pub const fn new() -> Self {
        Self::with_config(Config::VGA)
    }

    pub const fn with_config(config: Config) -> Self {
        Self {
            config,
            history: HistoryBuffer::new(),
            text_slots: TextSlotStore::new(),
            replay: ReplayState::Idle,
            clock: None,
        }
    }

    /// Use `clock` instead of the global [`TIMER_TICKS`] for `wait`.
    pub fn with_clock(mut self, clock: &'static (dyn TickSource + Sync)) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn text_slots(&self) -> &TextSlotStore {
        &self.text_slots
    }

    pub fn replay_state(&self) -> ReplayState {
        self.replay
    }

    pub fn is_replaying(&self) -> bool {
        self.replay == ReplayState::Replaying
    }

    pub(crate) fn clock(&self) -> &'static dyn TickSource {
        match self.clock {
            Some(clock) => clock,
            None => &TIMER_TICKS,
        }
    }
}

impl Default for DrawContext {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for DrawContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DrawContext")
            .field("config", &self.config)
            .field("history", &self.history)
            .field("replay", &self.replay)
            .finish()
    }
}
