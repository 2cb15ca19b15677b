//! Replay of recorded commands.
//!
//! While a replay runs the context is in [`ReplayState::Replaying`] and the
//! primitives it re-invokes skip recording, so history is read-only for the
//! duration. The state lives in a guard that restores `Idle` when dropped,
//! whichever way the replay ends.

use core::ops::{Deref, DerefMut};

use embedded_graphics_core::draw_target::DrawTarget;

use crate::context::DrawContext;
use crate::draw::validate;
use crate::error::Diagnostics;
use crate::framebuffer::Rgb332;
use crate::serial_println;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    Idle,
    Replaying,
}

/// Exclusive access to a context for the length of one replay.
pub struct ReplaySession<'a> {
    ctx: &'a mut DrawContext,
}

impl<'a> ReplaySession<'a> {
    pub fn begin(ctx: &'a mut DrawContext) -> Self {
        ctx.replay = ReplayState::Replaying;
        Self { ctx }
    }
}

impl Deref for ReplaySession<'_> {
    type Target = DrawContext;

    fn deref(&self) -> &DrawContext {
        self.ctx
    }
}

impl DerefMut for ReplaySession<'_> {
    fn deref_mut(&mut self) -> &mut DrawContext {
        self.ctx
    }
}

impl Drop for ReplaySession<'_> {
    fn drop(&mut self) {
        self.ctx.replay = ReplayState::Idle;
    }
}

impl DrawContext {
    /// Re-run the `count` most recent records, oldest first, `times` times.
    ///
    /// `count` is clamped to the records present. A record whose primitive
    /// rejects it is logged and skipped; the replay itself still succeeds.
    pub fn replay<D>(&mut self, target: &mut D, count: i32, times: i32) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        validate::repeat(&self.config, count, times).into_result()?;
        if self.is_replaying() {
            return Ok(());
        }

        let available = self.history.len();
        let selected = (count as usize).min(available);
        let first = available - selected;
        serial_println!("replay: {} of {} records x{}", selected, available, times);

        let mut session = ReplaySession::begin(self);
        for _ in 0..times {
            for index in first..available {
                let Some(command) = session.history.command(index) else {
                    serial_println!("replay: record {} does not decode", index);
                    continue;
                };
                if let Err(diagnostics) = session.execute(target, command) {
                    serial_println!("replay: {} rejected", command.kind().name());
                    for (channel, error) in diagnostics.errors() {
                        serial_println!("  channel {}: {}", channel, error);
                    }
                }
            }
        }
        drop(session);

        serial_println!("replay: done");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    #[test]
    fn session_resets_state_on_drop() {
        let mut ctx = DrawContext::new();
        {
            let session = ReplaySession::begin(&mut ctx);
            assert!(session.is_replaying());
        }
        assert_eq!(ctx.replay_state(), ReplayState::Idle);
    }

    #[test]
    fn out_of_range_arguments_are_rejected_before_replaying() {
        let mut fb = FrameBuffer::vga();
        let mut ctx = DrawContext::new();
        ctx.circle(&mut fb, 50, 50, 10, "red").unwrap();
        fb.reset_writes();

        let diag = ctx.replay(&mut fb, 21, 0).unwrap_err();
        assert_eq!(diag.errors().count(), 2);
        assert_eq!(fb.writes(), 0);
        assert!(!ctx.is_replaying());
    }

    #[test]
    fn replay_of_empty_history_does_nothing() {
        let mut fb = FrameBuffer::vga();
        let mut ctx = DrawContext::new();
        assert!(ctx.replay(&mut fb, 5, 5).is_ok());
        assert_eq!(fb.writes(), 0);
    }
}
