//! Core Module - Effects & Interactive State
//!
//! Pure effect math (tilt, parallax, reveal) and the two stateful widgets
//! of the page: the gallery filter and the contact form.

pub mod contact;
pub mod gallery;
pub mod parallax;
pub mod reveal;
pub mod tilt;

pub use contact::*;
pub use gallery::*;
pub use parallax::*;
pub use reveal::*;
pub use tilt::*;
