//! Static game assets: map images and ASCII art.

pub mod ascii;
pub mod map;

pub use map::{MapItem, MapKind};
