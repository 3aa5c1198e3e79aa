//! Utils Module - Constants, Content & Shared Utilities

pub mod constants;
pub mod content;
pub mod telemetry;

pub use constants::*;
pub use telemetry::*;
