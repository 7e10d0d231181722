// LiveLog - ui/mod.rs
//
// UI layer: panels and theme.

pub mod panels;
pub mod theme;
