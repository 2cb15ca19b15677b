//! In-memory pixel surface implementing embedded-graphics' `DrawTarget`
use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    Pixel,
};

use crate::framebuffer::color::{ColorId, Rgb332};

/// A linear RGB332 framebuffer held in memory.
///
/// Stands in for the VGA driver on hosts and in tests; it also counts every
/// pixel write so callers can observe how much a draw touched.
pub struct FrameBuffer {
    pixels: Vec<u8>,
    pub width: usize,
    pub height: usize,
    writes: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
            writes: 0,
        }
    }

    pub fn vga() -> Self {
        Self::new(320, 240)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<ColorId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(ColorId::from_raw(u16::from(self.pixels[y * self.width + x])))
    }

    /// Pixel writes since creation or the last [`reset_writes`](Self::reset_writes).
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn reset_writes(&mut self) {
        self.writes = 0;
    }

    /// Number of pixels currently holding `color`.
    pub fn count(&self, color: ColorId) -> usize {
        self.pixels
            .iter()
            .filter(|&&p| u16::from(p) == color.raw())
            .count()
    }

    /// Leftmost column in row `y` holding `color`.
    pub fn first_in_row(&self, y: usize, color: ColorId) -> Option<usize> {
        if y >= self.height {
            return None;
        }
        let row = &self.pixels[y * self.width..(y + 1) * self.width];
        row.iter().position(|&p| u16::from(p) == color.raw())
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb332;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
                continue;
            }
            self.pixels[y as usize * self.width + x as usize] = color.into_storage();
            self.writes += 1;
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}
