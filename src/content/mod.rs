//! Static site content.
//!
//! All display text lives here, keyed by closed enums. Nothing in this module
//! is mutated after startup; components only read from it.

pub mod labels;
pub mod moods;
pub mod rooms;

// Re-export content types
pub use labels::Label;
pub use moods::{Mood, MoodContent};
pub use rooms::{Room, RoomContent};
