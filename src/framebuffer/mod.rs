//! # Framebuffer
//!
//! Pixel-level output for the drawing core.
//!
//! Any `embedded_graphics_core::draw_target::DrawTarget<Color = Rgb332>` can act
//! as the pixel surface: a one-pixel draw is the driver's set-pixel, and
//! `DrawTarget::clear` is its fill-screen.
//!
//! - `color`: palette names ↔ VGA color ids
//! - `framebuffer`: heap-backed surface for hosts and tests

pub mod color;
#[allow(clippy::module_inception)]
pub mod framebuffer;

pub use color::{ColorId, Rgb332};
pub use framebuffer::FrameBuffer;
