//! # vgadraw
//!
//! Drawing core for a 320×240 RGB332 VGA display: validated shape, text and
//! sprite primitives, a bounded history of what was drawn, and replay of that
//! history.
//!
//! ```ignore
//! let mut ctx = DrawContext::new();
//! ctx.rectangle(&mut display, 10, 10, 50, 20, "red", 1)?;
//! ctx.text(&mut display, 12, 14, "white", "hi", "acorn", 1, "bold")?;
//! ctx.replay(&mut display, 2, 3)?;
//! ```
//!
//! ## Modules
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | `draw`         | primitives on [`DrawContext`], validator, rasterizer |
//! | `history`      | command codec, history buffer, text ring, replay     |
//! | `framebuffer`  | color codec and an in-memory `DrawTarget`            |
//! | `assets`       | 8×8 fonts and built-in sprites                       |
//! | `cmd_executor` | comma-separated command console                      |
//! | `error`        | [`DrawError`] and per-argument [`Diagnostics`]       |
//! | `logging`      | `serial_println!` and its sinks                      |
//! | `timer`        | millisecond tick source for `wait`                   |

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod logging;

pub mod assets;
pub mod cmd_executor;
pub mod config;
pub mod context;
pub mod draw;
pub mod error;
pub mod framebuffer;
pub mod history;
pub mod timer;

pub use cmd_executor::{CommandExecutor, CommandResult};
pub use config::Config;
pub use context::DrawContext;
pub use error::{Diagnostics, DrawError};
pub use framebuffer::{ColorId, FrameBuffer};
pub use history::{Command, OpKind, ReplayState};
