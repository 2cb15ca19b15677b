//! # Timer
//!
//! Millisecond time base for the `wait` operation.
//!
//! The platform's 1 kHz timer interrupt calls [`on_timer_interrupt`], which
//! only bumps [`TIMER_TICKS`]. Everything else reads the counter through the
//! [`TickSource`] trait, so hosts and tests can supply their own clock.
//!
//! ## Implementation Notes
//!
//! `busy_wait` spins on the counter. There is nothing else to run while the
//! drawing core waits, so yielding would buy nothing.

use core::sync::atomic::{AtomicU64, Ordering};

pub trait TickSource {
    /// Milliseconds since some fixed start.
    fn now_ms(&self) -> u64;
}

pub struct TickCounter(AtomicU64);

impl TickCounter {
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn tick(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for TickCounter {
    fn now_ms(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

pub static TIMER_TICKS: TickCounter = TickCounter::new();

/// Call from the 1 ms timer interrupt.
pub fn on_timer_interrupt() {
    TIMER_TICKS.tick();
}

/// Spin until `ms` milliseconds have passed on `clock`.
pub fn busy_wait(clock: &dyn TickSource, ms: u64) {
    let target = clock.now_ms().saturating_add(ms);
    while clock.now_ms() < target {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Advances one millisecond per read.
    struct Stepping(AtomicU64);

    impl TickSource for Stepping {
        fn now_ms(&self) -> u64 {
            self.0.fetch_add(1, Ordering::Relaxed)
        }
    }

    #[test]
    fn counter_counts_interrupts() {
        let counter = TickCounter::new();
        for _ in 0..5 {
            counter.tick();
        }
        assert_eq!(counter.now_ms(), 5);
    }

    #[test]
    fn busy_wait_returns_once_the_target_passes() {
        let clock = Stepping(AtomicU64::new(100));
        busy_wait(&clock, 10);
        assert!(clock.now_ms() >= 110);
    }
}
