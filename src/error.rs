//! # Diagnostics
//!
//! Every drawing operation is validated before it touches the surface or the
//! history. The outcome is a [`Diagnostics`] value with one independent
//! channel per validated sub-parameter of the calling operation.
//!
//! | Code | Error                  | Raised for                              |
//! |------|------------------------|-----------------------------------------|
//! | 1    | `CoordinateOutOfRange` | x/y off the display                     |
//! | 2    | `InvalidColor`         | unknown color name / id                 |
//! | 3    | `InvalidExtent`        | size, radius, scale or duration invalid |
//! | 4    | `InvalidFlag`          | boolean outside {0, 1}                  |
//! | 5    | `InvalidStyle`         | unknown font face or font style         |
//! | 6    | `EmptyText`            | text argument is empty                  |
//! | 7    | `RangeError`           | replay count / times out of range       |
//! | 8    | `UnknownSymbol`        | bitmap id not in the asset table        |

use core::fmt;

use crate::history::OpKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    CoordinateOutOfRange,
    InvalidColor,
    InvalidExtent,
    InvalidFlag,
    InvalidStyle,
    EmptyText,
    RangeError,
    UnknownSymbol,
}

impl DrawError {
    pub const fn code(self) -> u8 {
        match self {
            DrawError::CoordinateOutOfRange => 1,
            DrawError::InvalidColor => 2,
            DrawError::InvalidExtent => 3,
            DrawError::InvalidFlag => 4,
            DrawError::InvalidStyle => 5,
            DrawError::EmptyText => 6,
            DrawError::RangeError => 7,
            DrawError::UnknownSymbol => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DrawError::CoordinateOutOfRange => "COORDINATE_OUT_OF_RANGE",
            DrawError::InvalidColor => "INVALID_COLOR",
            DrawError::InvalidExtent => "INVALID_EXTENT",
            DrawError::InvalidFlag => "INVALID_FLAG",
            DrawError::InvalidStyle => "INVALID_STYLE",
            DrawError::EmptyText => "EMPTY_TEXT",
            DrawError::RangeError => "RANGE_ERROR",
            DrawError::UnknownSymbol => "UNKNOWN_SYMBOL",
        }
    }
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Widest channel set of any operation (the polygon: ten coordinates and a color).
pub const MAX_CHANNELS: usize = 11;

/// Per-parameter validation outcome of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostics {
    kind: OpKind,
    channels: [Option<DrawError>; MAX_CHANNELS],
    len: usize,
}

impl Diagnostics {
    pub fn new(kind: OpKind) -> Self {
        Self {
            kind,
            channels: [None; MAX_CHANNELS],
            len: kind.channel_count(),
        }
    }

    pub fn kind(&self) -> OpKind {
        self.kind
    }

    /// Number of channels for this operation kind.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_ok(&self) -> bool {
        self.channels[..self.len].iter().all(Option::is_none)
    }

    pub fn get(&self, channel: usize) -> Option<DrawError> {
        self.channels[..self.len].get(channel).copied().flatten()
    }

    /// Record `error` on `channel`, leaving the channel clear if `error` is `None`.
    pub fn set(&mut self, channel: usize, error: Option<DrawError>) {
        if channel < self.len {
            self.channels[channel] = error;
        }
    }

    /// `(channel, error)` for every failing channel, in channel order.
    pub fn errors(&self) -> impl Iterator<Item = (usize, DrawError)> + '_ {
        self.channels[..self.len]
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|e| (i, e)))
    }

    pub fn into_result(self) -> Result<(), Diagnostics> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// One `Found error:` line per failing channel, the console's report format.
impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, error) in self.errors() {
            if !first {
                f.write_str("\n")?;
            }
            write!(f, "Found error: {}", error)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn channels_are_sized_per_kind() {
        assert_eq!(Diagnostics::new(OpKind::Line).len(), 6);
        assert_eq!(Diagnostics::new(OpKind::Polygon).len(), 11);
        assert_eq!(Diagnostics::new(OpKind::Repeat).len(), 2);
        assert_eq!(Diagnostics::new(OpKind::Clear).len(), 1);
    }

    #[test]
    fn set_outside_the_channel_set_is_ignored() {
        let mut diag = Diagnostics::new(OpKind::Circle);
        diag.set(7, Some(DrawError::InvalidColor));
        assert!(diag.is_ok());
        assert_eq!(diag.get(7), None);
    }

    #[test]
    fn report_has_one_line_per_failing_channel() {
        let mut diag = Diagnostics::new(OpKind::Rectangle);
        diag.set(0, Some(DrawError::CoordinateOutOfRange));
        diag.set(5, Some(DrawError::InvalidFlag));
        assert_eq!(
            diag.to_string(),
            "Found error: COORDINATE_OUT_OF_RANGE\nFound error: INVALID_FLAG"
        );
        assert_eq!(diag.into_result(), Err(diag));
    }

    #[test]
    fn codes_are_nonzero_and_distinct() {
        let all = [
            DrawError::CoordinateOutOfRange,
            DrawError::InvalidColor,
            DrawError::InvalidExtent,
            DrawError::InvalidFlag,
            DrawError::InvalidStyle,
            DrawError::EmptyText,
            DrawError::RangeError,
            DrawError::UnknownSymbol,
        ];
        for (i, a) in all.iter().enumerate() {
            assert_ne!(a.code(), 0);
            for b in &all[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
