//! Application state and eframe integration.
//!
//! Main application structure implementing eframe::App trait.

use crate::config::Config;
use crate::core::catalog::MenuCatalog;
use crate::core::seed;
use crate::ui::main_window::MainWindow;
use eframe::egui;

/// Main application state.
pub struct App {
    main_window: MainWindow,
}

impl App {
    /// Create a new application instance.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let catalog = initial_catalog(&config);
        Self {
            main_window: MainWindow::new(config, catalog),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.main_window.render(ctx);
    }
}

/// Dishes the session starts with.
///
/// A configured seed file wins. If it can't be loaded the sample menu is
/// used instead, unless that is switched off too.
pub fn initial_catalog(config: &Config) -> MenuCatalog {
    if let Some(path) = config.seed_menu_path() {
        match seed::load_seed_file(path) {
            Ok(dishes) => {
                log::info!("Loaded {} dishes from {}", dishes.len(), path.display());
                return MenuCatalog::with_dishes(dishes);
            }
            Err(e) => log::warn!("{:#}", e),
        }
    }

    if config.load_sample_menu {
        MenuCatalog::with_dishes(seed::sample_menu())
    } else {
        MenuCatalog::new()
    }
}
