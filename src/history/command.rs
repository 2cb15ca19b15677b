//! Operation kinds, the slot size table and the fixed-width command codec.
//!
//! An encoded command is a kind tag followed by a fixed number of `u16`
//! parameters. Variable-length text never enters the buffer: a Text record
//! carries an index into the text ring instead, which keeps every record of a
//! kind the same width and makes eviction a single subtraction.

use crate::assets::FontFace;
use crate::draw::text::TextStyle;
use crate::framebuffer::color::ColorId;

/// Largest parameter count of any recordable kind (the polygon).
pub const MAX_PARAMS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum OpKind {
    Unknown = 0,
    Line = 1,
    Rectangle = 2,
    Text = 3,
    Bitmap = 4,
    Clear = 5,
    Wait = 6,
    Repeat = 7,
    Circle = 8,
    Polygon = 9,
    Tower = 10,
    SetPixel = 11,
}

impl OpKind {
    pub const fn tag(self) -> u16 {
        self as u16
    }

    pub const fn from_tag(tag: u16) -> OpKind {
        match tag {
            1 => OpKind::Line,
            2 => OpKind::Rectangle,
            3 => OpKind::Text,
            4 => OpKind::Bitmap,
            5 => OpKind::Clear,
            6 => OpKind::Wait,
            7 => OpKind::Repeat,
            8 => OpKind::Circle,
            9 => OpKind::Polygon,
            10 => OpKind::Tower,
            11 => OpKind::SetPixel,
            _ => OpKind::Unknown,
        }
    }

    /// Encoded slots, tag included. Zero for kinds that are never recorded.
    pub const fn size_of(self) -> usize {
        match self {
            OpKind::Clear => 2,
            OpKind::Wait => 2,
            OpKind::SetPixel => 4,
            OpKind::Line => 7,
            OpKind::Rectangle => 7,
            OpKind::Circle => 5,
            OpKind::Tower => 6,
            OpKind::Polygon => 12,
            OpKind::Text => 8,
            OpKind::Bitmap => 4,
            // Repeat stays out of history so a replay can never replay itself.
            OpKind::Repeat | OpKind::Unknown => 0,
        }
    }

    /// Validated sub-parameters, i.e. the width of its `Diagnostics`.
    pub const fn channel_count(self) -> usize {
        match self {
            OpKind::Line => 6,
            OpKind::Rectangle => 6,
            OpKind::Polygon => 11,
            OpKind::Circle => 4,
            OpKind::Tower => 5,
            OpKind::Text => 7,
            OpKind::Bitmap => 3,
            OpKind::Clear => 1,
            OpKind::SetPixel => 3,
            OpKind::Wait => 1,
            OpKind::Repeat => 2,
            OpKind::Unknown => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            OpKind::Unknown => "unknown",
            OpKind::Line => "line",
            OpKind::Rectangle => "rectangle",
            OpKind::Text => "text",
            OpKind::Bitmap => "bitmap",
            OpKind::Clear => "clear",
            OpKind::Wait => "wait",
            OpKind::Repeat => "repeat",
            OpKind::Circle => "circle",
            OpKind::Polygon => "polygon",
            OpKind::Tower => "tower",
            OpKind::SetPixel => "setpixel",
        }
    }
}

/// A fully resolved draw invocation, as stored in and replayed from history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Line { x1: i32, y1: i32, x2: i32, y2: i32, color: ColorId, thickness: i32 },
    Rectangle { x: i32, y: i32, width: i32, height: i32, color: ColorId, filled: i32 },
    Polygon { points: [(i32, i32); 5], color: ColorId },
    Circle { x: i32, y: i32, radius: i32, color: ColorId },
    Tower { x: i32, y: i32, size: i32, color1: ColorId, color2: ColorId },
    Text { x: i32, y: i32, color: ColorId, slot: usize, font: FontFace, scale: i32, style: TextStyle },
    Bitmap { symbol: i32, x: i32, y: i32 },
    Clear { color: ColorId },
    Wait { ms: i32 },
    SetPixel { x: i32, y: i32, color: ColorId },
}

/// Parameter slots of one encoded command, tag excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    pub kind: OpKind,
    params: [u16; MAX_PARAMS],
    len: usize,
}

impl Encoded {
    /// `None` when a value is negative or wider than a slot.
    fn new(kind: OpKind, values: &[i32]) -> Option<Self> {
        let mut params = [0u16; MAX_PARAMS];
        for (slot, value) in params.iter_mut().zip(values) {
            *slot = u16::try_from(*value).ok()?;
        }
        Some(Self { kind, params, len: values.len() })
    }

    pub fn params(&self) -> &[u16] {
        &self.params[..self.len]
    }
}

fn id(color: ColorId) -> i32 {
    i32::from(color.raw())
}

impl Command {
    pub fn kind(&self) -> OpKind {
        match self {
            Command::Line { .. } => OpKind::Line,
            Command::Rectangle { .. } => OpKind::Rectangle,
            Command::Polygon { .. } => OpKind::Polygon,
            Command::Circle { .. } => OpKind::Circle,
            Command::Tower { .. } => OpKind::Tower,
            Command::Text { .. } => OpKind::Text,
            Command::Bitmap { .. } => OpKind::Bitmap,
            Command::Clear { .. } => OpKind::Clear,
            Command::Wait { .. } => OpKind::Wait,
            Command::SetPixel { .. } => OpKind::SetPixel,
        }
    }

    /// Pack the arguments into slots. Arguments accepted by the validator
    /// under any [`Config`](crate::Config) always fit.
    pub fn encode(&self) -> Option<Encoded> {
        let kind = self.kind();
        match *self {
            Command::Line { x1, y1, x2, y2, color, thickness } => {
                Encoded::new(kind, &[x1, y1, x2, y2, id(color), thickness])
            }
            Command::Rectangle { x, y, width, height, color, filled } => {
                Encoded::new(kind, &[x, y, width, height, id(color), filled])
            }
            Command::Polygon { points, color } => {
                let mut values = [0i32; MAX_PARAMS];
                for (i, (px, py)) in points.iter().enumerate() {
                    values[2 * i] = *px;
                    values[2 * i + 1] = *py;
                }
                values[10] = id(color);
                Encoded::new(kind, &values)
            }
            Command::Circle { x, y, radius, color } => {
                Encoded::new(kind, &[x, y, radius, id(color)])
            }
            Command::Tower { x, y, size, color1, color2 } => {
                Encoded::new(kind, &[x, y, size, id(color1), id(color2)])
            }
            Command::Text { x, y, color, slot, font, scale, style } => Encoded::new(
                kind,
                &[x, y, id(color), slot as i32, font.id(), scale, style.id()],
            ),
            Command::Bitmap { symbol, x, y } => Encoded::new(kind, &[symbol, x, y]),
            Command::Clear { color } => Encoded::new(kind, &[id(color)]),
            Command::Wait { ms } => Encoded::new(kind, &[ms]),
            Command::SetPixel { x, y, color } => Encoded::new(kind, &[x, y, id(color)]),
        }
    }

    /// Rebuild a command from its tag and parameter slots.
    ///
    /// Returns `None` for kinds that are never recorded or when the slot count
    /// does not match the size table.
    pub fn decode(kind: OpKind, params: &[u16]) -> Option<Command> {
        let size = kind.size_of();
        if size == 0 || params.len() + 1 != size {
            return None;
        }
        let p = |i: usize| i32::from(params[i]);
        let color = |i: usize| ColorId::from_raw(params[i]);

        let command = match kind {
            OpKind::Line => Command::Line {
                x1: p(0),
                y1: p(1),
                x2: p(2),
                y2: p(3),
                color: color(4),
                thickness: p(5),
            },
            OpKind::Rectangle => Command::Rectangle {
                x: p(0),
                y: p(1),
                width: p(2),
                height: p(3),
                color: color(4),
                filled: p(5),
            },
            OpKind::Polygon => {
                let mut points = [(0, 0); 5];
                for (i, point) in points.iter_mut().enumerate() {
                    *point = (p(2 * i), p(2 * i + 1));
                }
                Command::Polygon { points, color: color(10) }
            }
            OpKind::Circle => Command::Circle { x: p(0), y: p(1), radius: p(2), color: color(3) },
            OpKind::Tower => Command::Tower {
                x: p(0),
                y: p(1),
                size: p(2),
                color1: color(3),
                color2: color(4),
            },
            OpKind::Text => Command::Text {
                x: p(0),
                y: p(1),
                color: color(2),
                slot: usize::from(params[3]),
                font: FontFace::from_id(p(4)),
                scale: p(5),
                style: TextStyle::from_id(p(6)),
            },
            OpKind::Bitmap => Command::Bitmap { symbol: p(0), x: p(1), y: p(2) },
            OpKind::Clear => Command::Clear { color: color(0) },
            OpKind::Wait => Command::Wait { ms: p(0) },
            OpKind::SetPixel => Command::SetPixel { x: p(0), y: p(1), color: color(2) },
            OpKind::Repeat | OpKind::Unknown => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::color::encode;

    #[test]
    fn tags_round_trip_and_unknown_tags_collapse() {
        for tag in 0..=11 {
            assert_eq!(OpKind::from_tag(tag).tag(), tag);
        }
        assert_eq!(OpKind::from_tag(99), OpKind::Unknown);
    }

    #[test]
    fn size_table_counts_tag_plus_params() {
        assert_eq!(OpKind::Line.size_of(), 7);
        assert_eq!(OpKind::Polygon.size_of(), 12);
        assert_eq!(OpKind::Text.size_of(), 8);
        assert_eq!(OpKind::Repeat.size_of(), 0);
        assert_eq!(OpKind::Unknown.size_of(), 0);
    }

    #[test]
    fn encoded_width_matches_size_table() {
        let red = encode("red");
        let commands = [
            Command::Line { x1: 1, y1: 2, x2: 3, y2: 4, color: red, thickness: 1 },
            Command::Polygon { points: [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10)], color: red },
            Command::Text {
                x: 0,
                y: 0,
                color: red,
                slot: 3,
                font: FontFace::Acorn,
                scale: 2,
                style: TextStyle::Italic,
            },
            Command::Wait { ms: 250 },
        ];
        for command in commands {
            let encoded = command.encode().unwrap();
            assert_eq!(encoded.params().len() + 1, command.kind().size_of());
            assert_eq!(Command::decode(encoded.kind, encoded.params()), Some(command));
        }
    }

    #[test]
    fn values_outside_a_slot_do_not_encode() {
        let red = encode("red");
        assert_eq!(Command::SetPixel { x: 65_536, y: 0, color: red }.encode(), None);
        assert_eq!(Command::Circle { x: -1, y: 5, radius: 2, color: red }.encode(), None);
        let edge = Command::SetPixel { x: 65_535, y: 0, color: red };
        let encoded = edge.encode().unwrap();
        assert_eq!(Command::decode(encoded.kind, encoded.params()), Some(edge));
    }

    #[test]
    fn decode_rejects_wrong_width_and_unrecorded_kinds() {
        assert_eq!(Command::decode(OpKind::Circle, &[1, 2, 3]), None);
        assert_eq!(Command::decode(OpKind::Repeat, &[1, 1]), None);
        assert_eq!(Command::decode(OpKind::Unknown, &[]), None);
    }
}
