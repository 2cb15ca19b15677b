//! Argument validation for every operation kind.
//!
//! Each function checks the arguments of one kind against a [`Config`] and
//! returns its [`Diagnostics`]. Validation is pure: it reads no state besides
//! its inputs and never draws or records, so identical arguments always give
//! identical results.

use crate::assets::{self, FontFace, Sprite};
use crate::config::Config;
use crate::error::{Diagnostics, DrawError};
use crate::framebuffer::ColorId;
use crate::history::OpKind;

use super::raster::{stroke_span, TowerGeometry};
use super::text::{Layout, TextStyle};

use crate::error::DrawError::*;

fn x_error(config: &Config, x: i32) -> Option<DrawError> {
    (x < 0 || x >= config.width).then_some(CoordinateOutOfRange)
}

fn y_error(config: &Config, y: i32) -> Option<DrawError> {
    (y < 0 || y >= config.height).then_some(CoordinateOutOfRange)
}

fn color_error(color: ColorId) -> Option<DrawError> {
    (!color.is_valid()).then_some(InvalidColor)
}

fn flag_error(flag: i32) -> Option<DrawError> {
    (flag != 0 && flag != 1).then_some(InvalidFlag)
}

/// `InvalidExtent` unless `len >= 1` and, once `start` itself is known to be on
/// the display, `start + len` does not pass `limit`.
fn span_error(start_ok: bool, start: i32, len: i32, limit: i32) -> Option<DrawError> {
    (len < 1 || (start_ok && len > limit - start)).then_some(InvalidExtent)
}

/// True when the inclusive box lies on the display.
fn box_on_display(config: &Config, left: i32, top: i32, right: i32, bottom: i32) -> bool {
    config.contains(left, top) && config.contains(right, bottom)
}

pub fn line(config: &Config, x1: i32, y1: i32, x2: i32, y2: i32, color: ColorId, thickness: i32) -> Diagnostics {
    let mut diag = Diagnostics::new(OpKind::Line);
    diag.set(0, x_error(config, x1));
    diag.set(1, y_error(config, y1));
    diag.set(2, x_error(config, x2));
    diag.set(3, y_error(config, y2));
    diag.set(4, color_error(color));

    if thickness < 1 {
        diag.set(5, Some(InvalidExtent));
    } else if diag.is_ok() {
        let (near, far) = stroke_span(thickness);
        let on_display = box_on_display(
            config,
            x1.min(x2) - near,
            y1.min(y2) - near,
            x1.max(x2) + far,
            y1.max(y2) + far,
        );
        if !on_display {
            diag.set(5, Some(CoordinateOutOfRange));
        }
    }
    diag
}

pub fn rectangle(
    config: &Config,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: ColorId,
    filled: i32,
) -> Diagnostics {
    let mut diag = Diagnostics::new(OpKind::Rectangle);
    let (x_err, y_err) = (x_error(config, x), y_error(config, y));
    diag.set(0, x_err);
    diag.set(1, y_err);
    diag.set(2, span_error(x_err.is_none(), x, width, config.width));
    diag.set(3, span_error(y_err.is_none(), y, height, config.height));
    diag.set(4, color_error(color));
    diag.set(5, flag_error(filled));
    diag
}

pub fn polygon(config: &Config, points: &[(i32, i32); 5], color: ColorId) -> Diagnostics {
    let mut diag = Diagnostics::new(OpKind::Polygon);
    for (i, &(x, y)) in points.iter().enumerate() {
        diag.set(2 * i, x_error(config, x));
        diag.set(2 * i + 1, y_error(config, y));
    }
    diag.set(10, color_error(color));
    diag
}

pub fn circle(config: &Config, x: i32, y: i32, radius: i32, color: ColorId) -> Diagnostics {
    let mut diag = Diagnostics::new(OpKind::Circle);
    let (x_err, y_err) = (x_error(config, x), y_error(config, y));
    diag.set(0, x_err);
    diag.set(1, y_err);
    let fits = match (x_err, y_err) {
        (None, None) => {
            radius >= 1
                && radius <= x.min(y)
                && radius < config.width - x
                && radius < config.height - y
        }
        _ => radius >= 1,
    };
    diag.set(2, (!fits).then_some(InvalidExtent));
    diag.set(3, color_error(color));
    diag
}

pub fn tower(config: &Config, x: i32, y: i32, size: i32, color1: ColorId, color2: ColorId) -> Diagnostics {
    let mut diag = Diagnostics::new(OpKind::Tower);
    let (x_err, y_err) = (x_error(config, x), y_error(config, y));
    diag.set(0, x_err);
    diag.set(1, y_err);

    // a size above the display height can never fit and would overflow the geometry
    let fits = match (x_err, y_err) {
        _ if !(config.tower_min_size..=config.height).contains(&size) => false,
        (None, None) => {
            let (left, top, right, bottom) = TowerGeometry::new(x, y, size).bounds();
            box_on_display(config, left, top, right, bottom)
        }
        _ => true,
    };
    diag.set(2, (!fits).then_some(InvalidExtent));
    diag.set(3, color_error(color1));
    diag.set(4, color_error(color2));
    diag
}

/// `font` and `style` are `None` when the caller named no known face or style.
#[allow(clippy::too_many_arguments)]
pub fn text(
    config: &Config,
    x: i32,
    y: i32,
    color: ColorId,
    text: &str,
    font: Option<FontFace>,
    scale: i32,
    style: Option<TextStyle>,
) -> Diagnostics {
    let mut diag = Diagnostics::new(OpKind::Text);
    diag.set(0, x_error(config, x));
    diag.set(1, y_error(config, y));
    diag.set(2, color_error(color));
    diag.set(4, font.is_none().then_some(InvalidStyle));
    let scale_ok = (1..=config.text_scale_max).contains(&scale);
    diag.set(5, (!scale_ok).then_some(InvalidExtent));
    diag.set(6, style.is_none().then_some(InvalidStyle));

    if text.is_empty() {
        diag.set(3, Some(EmptyText));
    } else if let (true, Some(style)) = (diag.is_ok(), style) {
        let bottom = Layout::new(text, x, y, scale, style, config.width).bottom();
        if bottom.map_or(true, |bottom| bottom > config.height) {
            diag.set(3, Some(InvalidExtent));
        }
    }
    diag
}

pub fn bitmap(config: &Config, symbol: i32, x: i32, y: i32) -> Diagnostics {
    check_bitmap(config, symbol, x, y).0
}

/// Like [`bitmap`], handing back the named sprite once every channel passes.
pub fn placed_sprite(config: &Config, symbol: i32, x: i32, y: i32) -> Result<&'static Sprite, Diagnostics> {
    match check_bitmap(config, symbol, x, y) {
        (diag, Some(sprite)) if diag.is_ok() => Ok(sprite),
        (diag, _) => Err(diag),
    }
}

fn check_bitmap(config: &Config, symbol: i32, x: i32, y: i32) -> (Diagnostics, Option<&'static Sprite>) {
    let mut diag = Diagnostics::new(OpKind::Bitmap);
    let sprite = assets::sprite(symbol);
    diag.set(0, sprite.is_none().then_some(UnknownSymbol));

    diag.set(1, x_error(config, x));
    diag.set(2, y_error(config, y));
    if let Some(sprite) = sprite {
        if diag.get(1).is_none() && sprite.width > config.width - x {
            diag.set(1, Some(InvalidExtent));
        }
        if diag.get(2).is_none() && sprite.height > config.height - y {
            diag.set(2, Some(InvalidExtent));
        }
    }
    (diag, sprite)
}

pub fn clear(color: ColorId) -> Diagnostics {
    let mut diag = Diagnostics::new(OpKind::Clear);
    diag.set(0, color_error(color));
    diag
}

pub fn set_pixel(config: &Config, x: i32, y: i32, color: ColorId) -> Diagnostics {
    let mut diag = Diagnostics::new(OpKind::SetPixel);
    diag.set(0, x_error(config, x));
    diag.set(1, y_error(config, y));
    diag.set(2, color_error(color));
    diag
}

pub fn wait(ms: i32) -> Diagnostics {
    let mut diag = Diagnostics::new(OpKind::Wait);
    diag.set(0, (ms < 1 || ms > i32::from(u16::MAX)).then_some(InvalidExtent));
    diag
}

pub fn repeat(config: &Config, count: i32, times: i32) -> Diagnostics {
    let mut diag = Diagnostics::new(OpKind::Repeat);
    diag.set(0, (!(1..=config.replay_count_max).contains(&count)).then_some(RangeError));
    diag.set(1, (!(1..=config.replay_times_max).contains(&times)).then_some(RangeError));
    diag
}
