// LiveLog - ui/panels/log_view.rs
//
// The live log view: one monospace row per buffered line, in arrival
// order, inside a vertical scroll area pinned to the bottom.
//
// Every buffered line gets a laid-out row (no virtualization): the row
// count always equals the buffer length and row order always equals
// insertion order. Rows are identified by their position; egui's
// structural widget identity makes that implicit.
//
// Bottom pinning is belt and braces: `stick_to_bottom` keeps the view
// glued while the user stays at the bottom, and the explicit
// scroll-to-bottom request raised by the state on every append re-pins
// the view even if the user had scrolled away.

use crate::app::state::ViewerState;
use crate::ui::theme;
use egui::text::{LayoutJob, TextFormat};

/// Render the log view (central area).
pub fn render(ui: &mut egui::Ui, state: &mut ViewerState) {
    if state.buffer.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No log lines yet.\nPipe a command into livelog, or run with --demo.");
        });
        // Nothing rendered, nothing to pin; drop any stale request.
        state.take_scroll_request();
        return;
    }

    let font = egui::FontId::monospace(state.font_size);
    let text_colour = theme::line_text_colour(state.dark_mode);
    let ts_colour = theme::timestamp_colour(state.dark_mode);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in state.buffer.iter() {
                let mut row = LayoutJob::default();
                if state.show_timestamps {
                    row.append(
                        &format!("{} ", line.received_at.format("%H:%M:%S")),
                        0.0,
                        TextFormat {
                            font_id: font.clone(),
                            color: ts_colour,
                            ..Default::default()
                        },
                    );
                }
                row.append(
                    &line.text,
                    0.0,
                    TextFormat {
                        font_id: font.clone(),
                        color: text_colour,
                        ..Default::default()
                    },
                );
                ui.label(row);
            }

            // Post-mutation hook: a line was appended since the last frame,
            // so set the scroll offset to its maximum.
            if state.take_scroll_request() {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}
