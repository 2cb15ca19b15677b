//! # Drawing Primitives
//!
//! Every primitive follows the same four steps:
//!
//! 1. resolve color names to ids
//! 2. validate; on any failing channel return the [`Diagnostics`] untouched
//! 3. append the resolved command to history, unless a replay is running
//! 4. rasterize onto the caller's surface
//!
//! Rejection is atomic: a call that returns `Err` has neither drawn nor
//! recorded anything.
//!
//! | Primitive   | Recorded as          |
//! |-------------|----------------------|
//! | `line`      | `Command::Line`      |
//! | `rectangle` | `Command::Rectangle` |
//! | `polygon`   | `Command::Polygon`   |
//! | `circle`    | `Command::Circle`    |
//! | `tower`     | `Command::Tower`     |
//! | `text`      | `Command::Text`      |
//! | `bitmap`    | `Command::Bitmap`    |
//! | `clear`     | `Command::Clear`     |
//! | `set_pixel` | `Command::SetPixel`  |
//! | `wait`      | `Command::Wait`      |

pub mod raster;
pub mod text;
pub mod validate;

use embedded_graphics_core::draw_target::DrawTarget;

use crate::assets::FontFace;
use crate::context::DrawContext;
use crate::error::Diagnostics;
use crate::framebuffer::{color, Rgb332};
use crate::history::{Command, TextSlot};
use crate::serial_println;
use crate::timer;

use text::{Layout, TextStyle};

impl DrawContext {
    fn record(&mut self, command: Command) {
        if self.is_replaying() {
            return;
        }
        match command.encode() {
            Some(encoded) => self.history.append(encoded.kind, encoded.params()),
            None => serial_println!("history: {} arguments do not fit a slot", command.kind().name()),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn line<D>(
        &mut self,
        target: &mut D,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: &str,
        thickness: i32,
    ) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        let color = color::encode(color);
        validate::line(&self.config, x1, y1, x2, y2, color, thickness).into_result()?;
        self.record(Command::Line { x1, y1, x2, y2, color, thickness });
        raster::line(target, x1, y1, x2, y2, color.to_rgb332(), thickness);
        Ok(())
    }

    /// `filled` is 1 for a solid rectangle and 0 for an outline.
    #[allow(clippy::too_many_arguments)]
    pub fn rectangle<D>(
        &mut self,
        target: &mut D,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: &str,
        filled: i32,
    ) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        let color = color::encode(color);
        validate::rectangle(&self.config, x, y, width, height, color, filled).into_result()?;
        self.record(Command::Rectangle { x, y, width, height, color, filled });
        raster::rectangle(target, x, y, width, height, color.to_rgb332(), filled == 1);
        Ok(())
    }

    /// Closed outline through five points.
    pub fn polygon<D>(
        &mut self,
        target: &mut D,
        points: [(i32, i32); 5],
        color: &str,
    ) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        let color = color::encode(color);
        validate::polygon(&self.config, &points, color).into_result()?;
        self.record(Command::Polygon { points, color });
        raster::polygon(target, &points, color.to_rgb332());
        Ok(())
    }

    pub fn circle<D>(
        &mut self,
        target: &mut D,
        x: i32,
        y: i32,
        radius: i32,
        color: &str,
    ) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        let color = color::encode(color);
        validate::circle(&self.config, x, y, radius, color).into_result()?;
        self.record(Command::Circle { x, y, radius, color });
        raster::circle(target, x, y, radius, color.to_rgb332());
        Ok(())
    }

    /// Six stacked rings in `color1` with a mast and flag in `color2`.
    ///
    /// The tower is recorded as a single command; its rings, struts, mast and
    /// flag are never validated or recorded on their own.
    pub fn tower<D>(
        &mut self,
        target: &mut D,
        x: i32,
        y: i32,
        size: i32,
        color1: &str,
        color2: &str,
    ) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        let color1 = color::encode(color1);
        let color2 = color::encode(color2);
        validate::tower(&self.config, x, y, size, color1, color2).into_result()?;
        self.record(Command::Tower { x, y, size, color1, color2 });
        raster::tower(target, x, y, size, color1.to_rgb332(), color2.to_rgb332());
        Ok(())
    }

    /// Draw `content` with its first glyph's top-left corner at `(x, y)`.
    ///
    /// Outside a replay the string is copied into the text ring and the
    /// history record keeps only the slot index.
    #[allow(clippy::too_many_arguments)]
    pub fn text<D>(
        &mut self,
        target: &mut D,
        x: i32,
        y: i32,
        color: &str,
        content: &str,
        font: &str,
        scale: i32,
        style: &str,
    ) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        let color = color::encode(color);
        let face = FontFace::from_name(font);
        let style = TextStyle::from_name(style);
        validate::text(&self.config, x, y, color, content, face, scale, style).into_result()?;

        let face = face.unwrap_or(FontFace::Pearl);
        let style = style.unwrap_or(TextStyle::Normal);
        if !self.is_replaying() {
            let slot = self.text_slots.reserve(content);
            self.record(Command::Text { x, y, color, slot, font: face, scale, style });
        }

        let layout = Layout::new(content, x, y, scale, style, self.config.width);
        text::draw(target, layout, color.to_rgb332(), face);
        Ok(())
    }

    /// Blit built-in sprite `symbol` with its top-left corner at `(x, y)`.
    pub fn bitmap<D>(&mut self, target: &mut D, symbol: i32, x: i32, y: i32) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        let sprite = validate::placed_sprite(&self.config, symbol, x, y)?;
        self.record(Command::Bitmap { symbol, x, y });
        raster::bitmap(target, sprite, x, y);
        Ok(())
    }

    /// Fill the whole surface.
    pub fn clear<D>(&mut self, target: &mut D, color: &str) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        let color = color::encode(color);
        validate::clear(color).into_result()?;
        self.record(Command::Clear { color });
        target.clear(color.to_rgb332()).ok();
        Ok(())
    }

    pub fn set_pixel<D>(&mut self, target: &mut D, x: i32, y: i32, color: &str) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        let color = color::encode(color);
        validate::set_pixel(&self.config, x, y, color).into_result()?;
        self.record(Command::SetPixel { x, y, color });
        raster::pixel(target, x, y, color.to_rgb332());
        Ok(())
    }

    /// Busy-wait for `ms` milliseconds on the context's clock.
    pub fn wait(&mut self, ms: i32) -> Result<(), Diagnostics> {
        validate::wait(ms).into_result()?;
        self.record(Command::Wait { ms });
        timer::busy_wait(self.clock(), ms as u64);
        Ok(())
    }

    /// Run one decoded history command through its primitive.
    pub(crate) fn execute<D>(&mut self, target: &mut D, command: Command) -> Result<(), Diagnostics>
    where
        D: DrawTarget<Color = Rgb332>,
    {
        let name = color::decode;
        match command {
            Command::Line { x1, y1, x2, y2, color, thickness } => {
                self.line(target, x1, y1, x2, y2, name(color), thickness)
            }
            Command::Rectangle { x, y, width, height, color, filled } => {
                self.rectangle(target, x, y, width, height, name(color), filled)
            }
            Command::Polygon { points, color } => self.polygon(target, points, name(color)),
            Command::Circle { x, y, radius, color } => self.circle(target, x, y, radius, name(color)),
            Command::Tower { x, y, size, color1, color2 } => {
                self.tower(target, x, y, size, name(color1), name(color2))
            }
            Command::Text { x, y, color, slot, font, scale, style } => {
                let stored = self.text_slots.get(slot).copied().unwrap_or(TextSlot::EMPTY);
                self.text(target, x, y, name(color), stored.as_str(), font.name(), scale, style.name())
            }
            Command::Bitmap { symbol, x, y } => self.bitmap(target, symbol, x, y),
            Command::Clear { color } => self.clear(target, name(color)),
            Command::Wait { ms } => self.wait(ms),
            Command::SetPixel { x, y, color } => self.set_pixel(target, x, y, name(color)),
        }
    }
}
