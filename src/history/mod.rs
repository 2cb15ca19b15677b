//! # History
//!
//! Bounded recording of executed commands and their replay.
//!
//! ## Layout
//!
//! ```text
//! slots:   [tag p p p p p p][tag p p p p][tag p p p p p p p] ...   245 × u16
//! offsets: [0,               7,           12, ...]                   25 × u8
//! text:    4 × 64-byte ring, referenced by index from Text records
//! ```
//!
//! - `command`: operation kinds, size table, fixed-width codec
//! - `buffer`: the slot array with eviction
//! - `text_slots`: the text ring
//! - `replay`: replay engine and its guard

pub mod buffer;
pub mod command;
pub mod replay;
pub mod text_slots;

pub use buffer::{HistoryBuffer, Record};
pub use command::{Command, Encoded, OpKind};
pub use replay::{ReplaySession, ReplayState};
pub use text_slots::{TextSlot, TextSlotStore};
