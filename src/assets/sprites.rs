//! Built-in 16×16 sprites, expanded from row masks at compile time.

use crate::framebuffer::color::vga_rgb;

pub const SIDE: usize = 16;
pub const AREA: usize = SIDE * SIDE;

/// Sample value the transparent sprites use for "no pixel".
pub const KEY: u8 = vga_rgb(0, 0, 0);

const ARROW_FG: u8 = vga_rgb(7, 7, 3);
const FACE: u8 = vga_rgb(7, 7, 0);
const FEATURE: u8 = vga_rgb(0, 0, 0);
const BACKDROP: u8 = vga_rgb(0, 0, 3);

// Bit 15 is the leftmost column.
#[rustfmt::skip]
const ARROW_UP_ROWS: [u16; SIDE] = [
    0x0180, 0x03C0, 0x07E0, 0x0FF0, 0x1FF8, 0x3FFC, 0x7FFE, 0x07E0,
    0x07E0, 0x07E0, 0x07E0, 0x07E0, 0x07E0, 0x07E0, 0x07E0, 0x0000,
];

const fn flip_vertical(rows: [u16; SIDE]) -> [u16; SIDE] {
    let mut out = [0u16; SIDE];
    let mut y = 0;
    while y < SIDE {
        out[y] = rows[SIDE - 1 - y];
        y += 1;
    }
    out
}

const fn flip_horizontal(rows: [u16; SIDE]) -> [u16; SIDE] {
    let mut out = [0u16; SIDE];
    let mut y = 0;
    while y < SIDE {
        out[y] = rows[y].reverse_bits();
        y += 1;
    }
    out
}

/// Swap rows and columns: row y of the result is column y of the input.
const fn transpose(rows: [u16; SIDE]) -> [u16; SIDE] {
    let mut out = [0u16; SIDE];
    let mut y = 0;
    while y < SIDE {
        let mut x = 0;
        while x < SIDE {
            if rows[x] & (0x8000 >> y) != 0 {
                out[y] |= 0x8000 >> x;
            }
            x += 1;
        }
        y += 1;
    }
    out
}

const fn expand(rows: [u16; SIDE], fg: u8, bg: u8) -> [u8; AREA] {
    let mut out = [bg; AREA];
    let mut y = 0;
    while y < SIDE {
        let mut x = 0;
        while x < SIDE {
            if rows[y] & (0x8000 >> x) != 0 {
                out[y * SIDE + x] = fg;
            }
            x += 1;
        }
        y += 1;
    }
    out
}

const fn smiley(happy: bool) -> [u8; AREA] {
    let mut out = [BACKDROP; AREA];
    let mut y = 0;
    while y < SIDE {
        let mut x = 0;
        while x < SIDE {
            let dx = 2 * x as i32 - 15;
            let dy = 2 * y as i32 - 15;
            if dx * dx + dy * dy <= 225 {
                out[y * SIDE + x] = FACE;
            }
            x += 1;
        }
        y += 1;
    }

    // eyes
    out[5 * SIDE + 5] = FEATURE;
    out[6 * SIDE + 5] = FEATURE;
    out[5 * SIDE + 10] = FEATURE;
    out[6 * SIDE + 10] = FEATURE;

    let mut x = 5;
    while x <= 10 {
        out[11 * SIDE + x] = FEATURE;
        x += 1;
    }
    if happy {
        out[10 * SIDE + 4] = FEATURE;
        out[10 * SIDE + 11] = FEATURE;
    } else {
        out[12 * SIDE + 4] = FEATURE;
        out[12 * SIDE + 11] = FEATURE;
        // brows
        out[3 * SIDE + 4] = FEATURE;
        out[4 * SIDE + 5] = FEATURE;
        out[3 * SIDE + 11] = FEATURE;
        out[4 * SIDE + 10] = FEATURE;
    }
    out
}

pub static ARROW_UP: [u8; AREA] = expand(ARROW_UP_ROWS, ARROW_FG, KEY);
pub static ARROW_DOWN: [u8; AREA] = expand(flip_vertical(ARROW_UP_ROWS), ARROW_FG, KEY);
pub static ARROW_LEFT: [u8; AREA] = expand(transpose(ARROW_UP_ROWS), ARROW_FG, KEY);
pub static ARROW_RIGHT: [u8; AREA] = expand(flip_horizontal(transpose(ARROW_UP_ROWS)), ARROW_FG, KEY);
pub static SMILEY_HAPPY: [u8; AREA] = smiley(true);
pub static SMILEY_ANGRY: [u8; AREA] = smiley(false);
