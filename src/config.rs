//! # Configuration
//!
//! Display geometry and validation limits.
//!
//! The storage capacities of the recorder are compile-time constants because
//! the history and text ring are fixed-size arrays. Everything the validator
//! checks against lives in [`Config`], which is `const`-constructible so a
//! context can be built in a `static`.
//!
//! | Setting              | VGA default |
//! |----------------------|-------------|
//! | width × height       | 320 × 240   |
//! | replay count         | 1..=20      |
//! | replay times         | 1..=40      |
//! | text scale           | 1..=8       |
//! | tower minimum size   | 4           |

/// Encoded slots in the history buffer.
pub const HISTORY_SLOTS: usize = 245;
/// Records the history offset index can hold.
pub const HISTORY_RECORDS: usize = 25;
/// Entries in the text ring.
pub const TEXT_SLOTS: usize = 4;
/// Bytes per text ring entry, one reserved as in a C string.
pub const TEXT_SLOT_LEN: usize = 64;
/// Largest display side; history stores coordinates as `u16`.
pub const MAX_DIMENSION: i32 = u16::MAX as i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub width: i32,
    pub height: i32,
    pub replay_count_max: i32,
    pub replay_times_max: i32,
    pub text_scale_max: i32,
    pub tower_min_size: i32,
}

impl Config {
    pub const VGA: Config = Config {
        width: 320,
        height: 240,
        replay_count_max: 20,
        replay_times_max: 40,
        text_scale_max: 8,
        tower_min_size: 4,
    };

    /// Display of `width` × `height` pixels with the VGA limits.
    ///
    /// `None` when either side is outside `1..=MAX_DIMENSION`: every
    /// coordinate and extent the validator accepts must fit a history slot.
    pub const fn new(width: i32, height: i32) -> Option<Self> {
        if width < 1 || height < 1 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return None;
        }
        Some(Self {
            width,
            height,
            ..Self::VGA
        })
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::VGA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_must_fit_a_history_slot() {
        assert_eq!(Config::new(320, 240), Some(Config::VGA));
        assert_eq!(Config::new(MAX_DIMENSION, 1).map(|c| c.width), Some(65_535));
        assert_eq!(Config::new(MAX_DIMENSION + 1, 240), None);
        assert_eq!(Config::new(320, 0), None);
        assert_eq!(Config::new(-320, 240), None);
    }

    #[test]
    fn contains_is_half_open() {
        assert!(Config::VGA.contains(0, 0));
        assert!(Config::VGA.contains(319, 239));
        assert!(!Config::VGA.contains(320, 0));
        assert!(!Config::VGA.contains(0, -1));
    }
}
