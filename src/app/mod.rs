// LiveLog - app/mod.rs
//
// Application layer: viewer state and the background line feed.

pub mod feed;
pub mod state;
