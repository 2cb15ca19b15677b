//! # Assets
//!
//! Read-only font and sprite tables.
//!
//! ## Fonts
//!
//! Two 8×8 faces are addressable by name, `pearl` (id 0) and `acorn` (id 1).
//! The built-in table carries one glyph set for printable ASCII that both
//! faces resolve to; characters outside it render as `?`.
//!
//! ## Sprites
//!
//! | Id | Sprite       | Transparent |
//! |----|--------------|-------------|
//! | 1  | arrow up     | yes         |
//! | 2  | arrow down   | yes         |
//! | 3  | arrow left   | yes         |
//! | 4  | arrow right  | yes         |
//! | 5  | happy smiley | no          |
//! | 6  | angry smiley | no          |

pub mod font8x8;
pub mod sprites;

pub const GLYPH_WIDTH: i32 = 8;
pub const GLYPH_HEIGHT: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Pearl,
    Acorn,
}

impl FontFace {
    pub fn from_name(name: &str) -> Option<FontFace> {
        match name {
            "pearl" => Some(FontFace::Pearl),
            "acorn" => Some(FontFace::Acorn),
            _ => None,
        }
    }

    pub const fn id(self) -> i32 {
        match self {
            FontFace::Pearl => 0,
            FontFace::Acorn => 1,
        }
    }

    /// Any id other than acorn's falls back to pearl.
    pub const fn from_id(id: i32) -> FontFace {
        match id {
            1 => FontFace::Acorn,
            _ => FontFace::Pearl,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FontFace::Pearl => "pearl",
            FontFace::Acorn => "acorn",
        }
    }
}

/// Row pattern of `ch` in `face`.
///
/// Both faces read the same 8×8 ASCII table; the face only survives as the
/// id stored in history.
pub fn glyph(_face: FontFace, ch: char) -> [u8; 8] {
    let code = match u8::try_from(ch) {
        Ok(c) if (font8x8::FIRST..=font8x8::LAST).contains(&c) => c,
        _ => b'?',
    };
    font8x8::GLYPHS[usize::from(code - font8x8::FIRST)]
}

/// A fixed-size image stored as one VGA sample per pixel, row-major.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub width: i32,
    pub height: i32,
    pub data: &'static [u8],
    /// When set, samples equal to `key` are not written.
    pub transparent: bool,
    pub key: u8,
}

impl Sprite {
    const fn square(data: &'static [u8], transparent: bool) -> Sprite {
        Sprite {
            width: sprites::SIDE as i32,
            height: sprites::SIDE as i32,
            data,
            transparent,
            key: sprites::KEY,
        }
    }

    pub fn sample(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.data.get((y * self.width + x) as usize).copied()
    }
}

static SPRITES: [Sprite; 6] = [
    Sprite::square(&sprites::ARROW_UP, true),
    Sprite::square(&sprites::ARROW_DOWN, true),
    Sprite::square(&sprites::ARROW_LEFT, true),
    Sprite::square(&sprites::ARROW_RIGHT, true),
    Sprite::square(&sprites::SMILEY_HAPPY, false),
    Sprite::square(&sprites::SMILEY_ANGRY, false),
];

/// Sprite for a 1-based symbol id.
pub fn sprite(symbol: i32) -> Option<&'static Sprite> {
    if symbol < 1 {
        return None;
    }
    SPRITES.get((symbol - 1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_lookup_covers_printable_ascii() {
        assert_eq!(glyph(FontFace::Pearl, ' '), [0; 8]);
        assert_ne!(glyph(FontFace::Pearl, 'A'), [0; 8]);
        assert_eq!(glyph(FontFace::Acorn, 'é'), glyph(FontFace::Acorn, '?'));
    }

    #[test]
    fn faces_share_one_table() {
        for ch in [' ', 'A', 'g', '~'] {
            assert_eq!(glyph(FontFace::Acorn, ch), glyph(FontFace::Pearl, ch));
        }
    }

    #[test]
    fn symbol_ids_are_one_based() {
        assert!(sprite(0).is_none());
        assert!(sprite(1).is_some());
        assert!(sprite(6).is_some());
        assert!(sprite(7).is_none());
    }

    #[test]
    fn arrows_point_where_their_name_says() {
        let up = sprite(1).unwrap();
        let right = sprite(4).unwrap();
        // tip row/column is the narrow end
        assert_ne!(up.sample(7, 0), Some(up.key));
        assert_eq!(up.sample(0, 0), Some(up.key));
        assert_ne!(right.sample(15, 7), Some(right.key));
        assert_eq!(right.sample(15, 0), Some(right.key));
    }

    #[test]
    fn font_ids_fall_back_to_pearl() {
        assert_eq!(FontFace::from_id(1), FontFace::Acorn);
        assert_eq!(FontFace::from_id(9), FontFace::Pearl);
        assert_eq!(FontFace::from_name("comic"), None);
    }
}
