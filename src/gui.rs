// LiveLog - gui.rs
//
// Top-level eframe::App implementation.
// Drains the line feed each frame and wires the status bar and log view.
//
// Update-cycle contract: feed messages are applied one at a time, in
// arrival order, and each `Line` is fully applied (append, then scroll
// request) before the next message is handled. Bursts are processed in
// full -- nothing is coalesced or dropped.

use crate::app::feed::FeedManager;
use crate::app::state::ViewerState;
use crate::core::model::FeedProgress;
use crate::ui;
use crate::util::constants::FEED_REPAINT_INTERVAL_MS;

/// The LiveLog application.
pub struct LiveLogApp {
    pub state: ViewerState,
    pub feed: FeedManager,
}

impl LiveLogApp {
    /// Create a new application instance with the given state and feed.
    pub fn new(state: ViewerState, feed: FeedManager) -> Self {
        Self { state, feed }
    }
}

impl eframe::App for LiveLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll the feed. Each message is applied fully before the next.
        let messages = self.feed.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                FeedProgress::Started { source } => {
                    self.state.feed_active = true;
                    self.state.status_message = format!("Reading from {}.", source.label());
                }
                FeedProgress::Line { text } => {
                    self.state.push_line(&text);
                }
                FeedProgress::Eof => {
                    self.state.feed_active = false;
                    self.state.status_message = format!(
                        "End of input — {} line(s) received.",
                        self.state.buffer.len()
                    );
                }
                FeedProgress::Failed { message } => {
                    self.state.feed_active = false;
                    self.state.status_message = format!("Feed failed: {message}");
                    tracing::warn!(error = %message, "Feed reported failure");
                }
            }
        }
        // Keep repainting while the feed is live so new lines appear promptly.
        if had_messages || self.state.feed_active {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                FEED_REPAINT_INTERVAL_MS,
            ));
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // LIVE badge -- shown while the feed is active.
                if self.state.feed_active {
                    ui.label(
                        egui::RichText::new(" \u{25cf} LIVE ")
                            .strong()
                            .color(ui::theme::LIVE_BADGE)
                            .background_color(egui::Color32::from_rgba_premultiplied(
                                34, 197, 94, 30,
                            )),
                    );
                    ui.separator();
                }
                ui.label(&self.state.status_message);
                if let Some(warning) = self.state.warnings.first() {
                    ui.separator();
                    ui.label(egui::RichText::new(warning).color(ui::theme::WARNING_TEXT))
                        .on_hover_text(self.state.warnings.join("\n"));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.buffer.len();
                    if total > 0 {
                        ui.label(format!("{total} line(s)"));
                    }
                });
            });
        });

        // Central panel (log view)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::log_view::render(ui, &mut self.state);
        });
    }

    /// Called by eframe when the application window is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.feed.stop();
    }
}
