// LiveLog - platform/mod.rs
//
// Platform integration: config paths and config.toml loading.

pub mod config;
