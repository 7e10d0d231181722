// LiveLog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Configuration loading and validation
// 4. Feed selection (stdin or demo) and eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use livelog::app;
pub use livelog::core;
pub use livelog::platform;
pub use livelog::ui;
pub use livelog::util;

use clap::Parser;

/// LiveLog - live log line viewer.
///
/// Pipe a command into livelog to watch its output accumulate in an
/// auto-scrolling monospace view pinned to the newest line.
#[derive(Parser, Debug)]
#[command(name = "LiveLog", version, about)]
struct Cli {
    /// Generate synthetic demo lines instead of reading stdin.
    #[arg(long = "demo")]
    demo: bool,

    /// Hide the dim arrival-time prefix on each row.
    #[arg(long = "no-timestamps")]
    no_timestamps: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and read the config level before logging
    // starts, so `[logging] level` can take effect.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        demo = cli.demo,
        "LiveLog starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Create viewer state from the validated config; CLI flags override.
    let mut state = app::state::ViewerState::new(&config);
    state.warnings = config_warnings;
    if cli.no_timestamps {
        state.show_timestamps = false;
    }

    // Start the line feed before the GUI so early lines queue on the
    // channel and are drained on the first frame.
    let mut feed = app::feed::FeedManager::new();
    if cli.demo {
        feed.start_demo();
    } else {
        feed.start_stdin();
    }

    let dark_mode = state.dark_mode;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([ui::theme::WINDOW_WIDTH, ui::theme::WINDOW_HEIGHT])
            .with_min_inner_size([ui::theme::MIN_WINDOW_WIDTH, ui::theme::MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(gui::LiveLogApp::new(state, feed)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LiveLog GUI: {e}");
        std::process::exit(1);
    }
}
