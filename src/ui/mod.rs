//! egui rendering: the main window and its theme.

pub mod main_window;
pub mod theme;
