// LiveLog - ui/panels/mod.rs

pub mod log_view;
