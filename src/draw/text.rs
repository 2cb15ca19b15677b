//! Glyph layout and rasterization for scaled 8×8 text.
//!
//! Each set glyph bit becomes a `scale`×`scale` block. Bold draws every glyph
//! a second time one pixel to the right; italic shears the glyph, shifting
//! row `r` right by `(7 - r) * scale / 2`. A glyph that would cross the right
//! edge wraps to x = 0 one text line (8 × scale) further down.

use embedded_graphics_core::draw_target::DrawTarget;

use crate::assets::{glyph, FontFace, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::framebuffer::Rgb332;

use super::raster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Normal,
    Bold,
    Italic,
}

impl TextStyle {
    /// English or Dutch style name.
    pub fn from_name(name: &str) -> Option<TextStyle> {
        match name {
            "normal" | "normaal" => Some(TextStyle::Normal),
            "bold" | "vet" => Some(TextStyle::Bold),
            "italic" | "cursief" => Some(TextStyle::Italic),
            _ => None,
        }
    }

    pub const fn id(self) -> i32 {
        match self {
            TextStyle::Normal => 0,
            TextStyle::Bold => 1,
            TextStyle::Italic => 2,
        }
    }

    pub const fn from_id(id: i32) -> TextStyle {
        match id {
            1 => TextStyle::Bold,
            2 => TextStyle::Italic,
            _ => TextStyle::Normal,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TextStyle::Normal => "normal",
            TextStyle::Bold => "bold",
            TextStyle::Italic => "italic",
        }
    }

    /// Pixels the style adds to the right of a glyph.
    const fn extra_width(self, scale: i32) -> i32 {
        match self {
            TextStyle::Normal => 0,
            TextStyle::Bold => 1,
            TextStyle::Italic => (GLYPH_HEIGHT - 1) * scale / 2,
        }
    }
}

/// Width of one rendered glyph.
pub const fn glyph_width(scale: i32, style: TextStyle) -> i32 {
    GLYPH_WIDTH * scale + style.extra_width(scale)
}

/// Horizontal distance between consecutive glyph origins.
pub const fn advance(scale: i32, style: TextStyle) -> i32 {
    glyph_width(scale, style) + scale
}

pub const fn line_height(scale: i32) -> i32 {
    GLYPH_HEIGHT * scale
}

/// Glyph origins of `text` drawn from `(x, y)` on a surface `width` wide.
pub struct Layout<'a> {
    chars: core::str::Chars<'a>,
    x: i32,
    y: i32,
    scale: i32,
    style: TextStyle,
    width: i32,
}

impl<'a> Layout<'a> {
    pub fn new(text: &'a str, x: i32, y: i32, scale: i32, style: TextStyle, width: i32) -> Self {
        Self {
            chars: text.chars(),
            x,
            y,
            scale,
            style,
            width,
        }
    }

    /// Bottom edge (exclusive) of the last glyph line, or `None` for empty text.
    pub fn bottom(self) -> Option<i32> {
        let height = line_height(self.scale);
        self.last().map(|(_, _, y)| y + height)
    }
}

impl Iterator for Layout<'_> {
    type Item = (char, i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.chars.next()?;
        if self.x + glyph_width(self.scale, self.style) > self.width {
            self.x = 0;
            self.y += line_height(self.scale);
        }
        let origin = (ch, self.x, self.y);
        self.x += advance(self.scale, self.style);
        Some(origin)
    }
}

/// Draw every glyph `layout` places.
pub fn draw<D>(target: &mut D, layout: Layout<'_>, color: Rgb332, face: FontFace)
where
    D: DrawTarget<Color = Rgb332>,
{
    let (scale, style) = (layout.scale, layout.style);
    for (ch, gx, gy) in layout {
        draw_glyph(target, gx, gy, glyph(face, ch), color, scale, style);
    }
}

fn draw_glyph<D>(
    target: &mut D,
    x: i32,
    y: i32,
    rows: [u8; 8],
    color: Rgb332,
    scale: i32,
    style: TextStyle,
) where
    D: DrawTarget<Color = Rgb332>,
{
    for (row, bits) in (0i32..).zip(rows) {
        let shear = match style {
            TextStyle::Italic => (GLYPH_HEIGHT - 1 - row) * scale / 2,
            _ => 0,
        };
        let py = y + row * scale;
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << col) == 0 {
                continue;
            }
            let px = x + col * scale + shear;
            raster::block(target, px, py, scale, scale, color);
            if style == TextStyle::Bold {
                raster::block(target, px + 1, py, scale, scale, color);
            }
        }
    }
}
