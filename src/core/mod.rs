// LiveLog - core/mod.rs
//
// Core layer: pure data and the append-only buffer. No I/O, no UI.

pub mod buffer;
pub mod model;
