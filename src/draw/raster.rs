//! Pixel-level shape rasterization.
//!
//! Nothing here validates or records. Callers have already checked that the
//! shape fits the display; the surface still drops any pixel outside it.

use embedded_graphics::{
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::assets::Sprite;
use crate::framebuffer::{ColorId, Rgb332};

/// Number of rings a tower is built from.
pub const TOWER_LAYERS: i32 = 6;

pub fn pixel<D>(target: &mut D, x: i32, y: i32, color: Rgb332)
where
    D: DrawTarget<Color = Rgb332>,
{
    Pixel(Point::new(x, y), color).draw(target).ok();
}

/// Solid `width`×`height` block with its top-left corner at `(x, y)`.
pub fn block<D>(target: &mut D, x: i32, y: i32, width: i32, height: i32, color: Rgb332)
where
    D: DrawTarget<Color = Rgb332>,
{
    if width < 1 || height < 1 {
        return;
    }
    Rectangle::new(Point::new(x, y), Size::new(width as u32, height as u32))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
        .ok();
}

/// Offsets of a `thickness`-wide stroke around its center line.
pub const fn stroke_span(thickness: i32) -> (i32, i32) {
    let near = thickness / 2;
    (near, thickness - 1 - near)
}

pub fn line<D>(target: &mut D, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb332, thickness: i32)
where
    D: DrawTarget<Color = Rgb332>,
{
    let (near, _) = stroke_span(thickness);

    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);

    loop {
        if thickness > 1 {
            block(target, x - near, y - near, thickness, thickness, color);
        } else {
            pixel(target, x, y, color);
        }

        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

pub fn rectangle<D>(target: &mut D, x: i32, y: i32, width: i32, height: i32, color: Rgb332, filled: bool)
where
    D: DrawTarget<Color = Rgb332>,
{
    if filled {
        block(target, x, y, width, height, color);
        return;
    }

    let right = x + width - 1;
    let bottom = y + height - 1;
    block(target, x, y, width, 1, color);
    if height > 1 {
        block(target, x, bottom, width, 1, color);
    }
    // side runs between the top and bottom rows
    block(target, x, y + 1, 1, height - 2, color);
    if width > 1 {
        block(target, right, y + 1, 1, height - 2, color);
    }
}

/// Midpoint circle outline, eight octants per step.
pub fn circle<D>(target: &mut D, cx: i32, cy: i32, radius: i32, color: Rgb332)
where
    D: DrawTarget<Color = Rgb332>,
{
    let mut x = radius;
    let mut y = 0;
    let mut err = 0;

    while x >= y {
        for (px, py) in [
            (cx + x, cy + y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx - x, cy + y),
            (cx - x, cy - y),
            (cx - y, cy - x),
            (cx + y, cy - x),
            (cx + x, cy - y),
        ] {
            pixel(target, px, py, color);
        }

        y += 1;
        if err <= 0 {
            err += 2 * y + 1;
        }
        if err > 0 {
            x -= 1;
            err -= 2 * x + 1;
        }
    }
}

/// Closed outline through all `points`, one pixel wide.
pub fn polygon<D>(target: &mut D, points: &[(i32, i32)], color: Rgb332)
where
    D: DrawTarget<Color = Rgb332>,
{
    for (i, &(x1, y1)) in points.iter().enumerate() {
        let (x2, y2) = points[(i + 1) % points.len()];
        line(target, x1, y1, x2, y2, color, 1);
    }
}

// =============================================================================
// Tower
// =============================================================================

/// Derived measurements of a tower whose base ring is centered on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TowerGeometry {
    pub x: i32,
    pub y: i32,
    pub base_radius: i32,
    pub top_radius: i32,
    pub layer_height: i32,
    pub mast_height: i32,
    /// Topmost mast pixel; also where the flag hangs from.
    pub mast_top: i32,
}

impl TowerGeometry {
    pub const fn new(x: i32, y: i32, size: i32) -> Self {
        let layer_height = size / 2;
        let top_radius = size / 3;
        let mast_height = size / 4;
        let top_center = y - (TOWER_LAYERS - 1) * layer_height;
        Self {
            x,
            y,
            base_radius: size,
            top_radius,
            layer_height,
            mast_height,
            mast_top: top_center - top_radius - mast_height,
        }
    }

    pub const fn layer_radius(&self, layer: i32) -> i32 {
        if layer < TOWER_LAYERS - 1 {
            self.base_radius - layer * (self.base_radius - self.top_radius) / (TOWER_LAYERS - 1)
        } else {
            self.top_radius
        }
    }

    pub const fn layer_center(&self, layer: i32) -> i32 {
        self.y - layer * self.layer_height
    }

    pub const fn flag(&self) -> [(i32, i32); 5] {
        let (x, top) = (self.x, self.mast_top);
        [(x, top), (x + 5, top - 2), (x + 5, top - 7), (x, top - 5), (x, top)]
    }

    /// Inclusive `(left, top, right, bottom)` of everything the tower draws.
    pub const fn bounds(&self) -> (i32, i32, i32, i32) {
        let right = if self.base_radius > 5 { self.base_radius } else { 5 };
        (
            self.x - self.base_radius,
            self.mast_top - 7,
            self.x + right,
            self.y + self.base_radius,
        )
    }
}

pub fn tower<D>(target: &mut D, x: i32, y: i32, size: i32, body: Rgb332, mast: Rgb332)
where
    D: DrawTarget<Color = Rgb332>,
{
    let geometry = TowerGeometry::new(x, y, size);

    for layer in 0..TOWER_LAYERS {
        let r = geometry.layer_radius(layer);
        let cy = geometry.layer_center(layer);
        circle(target, x, cy, r, body);
        if r > 1 {
            circle(target, x, cy, r - 1, body);
        }

        if layer > 0 {
            let below = geometry.layer_center(layer - 1);
            line(target, x - (r - 1), below, x - (r - 1), cy, body, 1);
            line(target, x + (r - 1), below, x + (r - 1), cy, body, 1);
        }
    }

    rectangle(target, x, geometry.mast_top, 1, geometry.mast_height, mast, true);
    polygon(target, &geometry.flag(), mast);
}

pub fn bitmap<D>(target: &mut D, sprite: &Sprite, x: i32, y: i32)
where
    D: DrawTarget<Color = Rgb332>,
{
    let pixels = (0..sprite.height)
        .flat_map(|sy| (0..sprite.width).map(move |sx| (sx, sy)))
        .filter_map(|(sx, sy)| {
            let sample = sprite.sample(sx, sy)?;
            if sprite.transparent && sample == sprite.key {
                return None;
            }
            let color = ColorId::from_raw(u16::from(sample)).to_rgb332();
            Some(Pixel(Point::new(x + sx, y + sy), color))
        });
    target.draw_iter(pixels).ok();
}
