//! Color codec: palette names ↔ VGA color ids.
//!
//! A [`ColorId`] is the 8-bit RGB332 value the VGA output stage consumes
//! (3 bits red, 3 bits green, 2 bits blue), widened to `u16` so that the
//! "invalid" sentinel sits outside the byte range and can never collide with
//! a real color.
use embedded_graphics_core::pixelcolor::{raw::RawU8, PixelColor, Rgb888};

/// Pack 3/3/2-bit components into one VGA byte.
pub const fn vga_rgb(r: u8, g: u8, b: u8) -> u8 {
    ((r & 0x07) << 5) | ((g & 0x07) << 2) | (b & 0x03)
}

/// 3-3-2 surface color, stored as the byte the VGA DAC reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb332(u8);

impl Rgb332 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(vga_rgb(r, g, b))
    }

    pub const fn into_storage(self) -> u8 {
        self.0
    }

    pub const fn r(self) -> u8 {
        self.0 >> 5
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 2) & 0x07
    }

    pub const fn b(self) -> u8 {
        self.0 & 0x03
    }

    /// Expand each channel to eight bits for 24-bit surfaces.
    pub const fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(widen(self.r(), 7), widen(self.g(), 7), widen(self.b(), 3))
    }
}

const fn widen(value: u8, max: u16) -> u8 {
    (value as u16 * 255 / max) as u8
}

impl PixelColor for Rgb332 {
    type Raw = RawU8;
}

impl From<Rgb332> for Rgb888 {
    fn from(color: Rgb332) -> Self {
        color.to_rgb888()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorId(u16);

impl ColorId {
    pub const INVALID: ColorId = ColorId(0x100);
    pub const BLACK: ColorId = ColorId(vga_rgb(0, 0, 0) as u16);
    pub const WHITE: ColorId = ColorId(vga_rgb(7, 7, 3) as u16);
    pub const RED: ColorId = ColorId(vga_rgb(7, 0, 0) as u16);

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// True for ids that belong to the palette.
    pub fn is_valid(self) -> bool {
        PALETTE.iter().any(|entry| entry.id == self)
    }

    /// Surface color for this id. Only meaningful once [`is_valid`](Self::is_valid) holds.
    pub fn to_rgb332(self) -> Rgb332 {
        Rgb332(self.0 as u8)
    }
}

struct PaletteEntry {
    name: &'static str,
    alias: &'static str,
    id: ColorId,
}

const fn entry(name: &'static str, alias: &'static str, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry {
        name,
        alias,
        id: ColorId(vga_rgb(r, g, b) as u16),
    }
}

const PALETTE: [PaletteEntry; 17] = [
    entry("black", "zwart", 0, 0, 0),
    entry("blue", "blauw", 0, 0, 3),
    entry("lightblue", "lichtblauw", 0, 1, 3),
    entry("green", "groen", 0, 7, 0),
    entry("lightgreen", "lichtgroen", 0, 7, 2),
    entry("cyan", "cyaan", 0, 7, 3),
    entry("lightcyan", "lichtcyaan", 3, 7, 3),
    entry("red", "rood", 7, 0, 0),
    entry("lightred", "lichtrood", 7, 0, 1),
    entry("magenta", "magenta", 7, 0, 3),
    entry("lightmagenta", "lichtmagenta", 7, 0, 2),
    entry("brown", "bruin", 5, 3, 0),
    entry("yellow", "geel", 7, 7, 0),
    entry("grey", "grijs", 4, 4, 2),
    entry("white", "wit", 7, 7, 3),
    entry("pink", "roze", 7, 3, 3),
    entry("purple", "paars", 5, 0, 3),
];

/// Canonical palette names, in palette order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PALETTE.iter().map(|entry| entry.name)
}

/// Resolve a color name (canonical or alias) to its id.
///
/// Unknown names map to [`ColorId::INVALID`], which the validator rejects.
pub fn encode(name: &str) -> ColorId {
    PALETTE
        .iter()
        .find(|entry| entry.name == name || entry.alias == name || (name == "gray" && entry.name == "grey"))
        .map(|entry| entry.id)
        .unwrap_or(ColorId::INVALID)
}

/// Canonical name of `id`, `"black"` for ids outside the palette.
pub fn decode(id: ColorId) -> &'static str {
    PALETTE
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.name)
        .unwrap_or("black")
}
