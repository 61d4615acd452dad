// src/ui/mod.rs
pub mod main_window;

pub use main_window::{show_canvas, CanvasWindow, WINDOW_TITLE};
