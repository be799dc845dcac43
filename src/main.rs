//! Menu Manager - a small restaurant menu editor.
//!
//! This application allows you to:
//! - Browse the menu with dish count and average price per course
//! - Add and remove dishes from the chef admin panel
//! - Filter the menu by course
//!
//! The menu lives in memory only and is gone when the app closes.

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod ui;

use app::App;
use config::ConfigManager;
use eframe::NativeOptions;
use env_logger::{Builder, Env};

const ENV_LOG: &str = "MENU_LOG";
const ENV_LOG_STYLE: &str = "MENU_LOG_STYLE";

fn main() -> eframe::Result<()> {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    let config_manager = ConfigManager::new();
    log::debug!("Config path: {}", config_manager.get_config_file_path().display());
    let config = config_manager.load();

    // Configure native window options
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(config.restaurant_name.as_str())
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Menu Manager",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, config)))),
    )
}
