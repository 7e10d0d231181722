// LiveLog - ui/theme.rs
//
// Colour scheme and layout constants. No dependencies on app state.

use egui::Color32;

/// Foreground colour for line text.
pub fn line_text_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(229, 231, 235) // Gray 200
    } else {
        Color32::from_rgb(17, 24, 39) // Gray 900
    }
}

/// Dim colour for the arrival-time prefix.
pub fn timestamp_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(107, 114, 128) // Gray 500
    } else {
        Color32::from_rgb(156, 163, 175) // Gray 400
    }
}

/// Colour of the LIVE badge in the status bar.
pub const LIVE_BADGE: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Colour for startup warnings in the status bar.
pub const WARNING_TEXT: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Layout constants.
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 500.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 250.0;
