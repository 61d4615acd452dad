//! # Main Window Module
//!
//! The "Canvas" window: a white panel with every block drawn as a filled
//! rectangle. The layout is computed up front, so each frame only repaints.
//! There is no interaction and the drawing does not follow window resizes.

use crate::error::Result;
use crate::render::{CanvasLayout, RenderConfig};
use eframe::egui;
use egui::{CentralPanel, Color32, Frame, Pos2, Rect};
use log::info;

pub const WINDOW_TITLE: &str = "Canvas";

/// CanvasWindow holds the finished scene.
pub struct CanvasWindow {
    layout: CanvasLayout,
    fill: Color32,
    background: Color32,
}

impl CanvasWindow {
    pub fn new(layout: CanvasLayout, config: &RenderConfig) -> Self {
        let [r, g, b] = config.fill;
        let [br, bg, bb] = config.background;
        CanvasWindow {
            layout,
            fill: Color32::from_rgb(r, g, b),
            background: Color32::from_rgb(br, bg, bb),
        }
    }

    /// Initial window size in points.
    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.layout.width as f32, self.layout.height as f32)
    }

    /// Draws the background and all blocks.
    pub fn update(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(Frame::none().fill(self.background))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let painter = ui.painter();
                for rect in &self.layout.rects {
                    let min = Pos2::new(origin.x + rect.x0 as f32, origin.y + rect.y0 as f32);
                    let max = Pos2::new(origin.x + rect.x1 as f32, origin.y + rect.y1 as f32);
                    painter.rect_filled(Rect::from_min_max(min, max), 0.0, self.fill);
                }
            });
    }
}

/// A wrapper to integrate CanvasWindow into an eframe App.
struct CanvasApp {
    window: CanvasWindow,
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.window.update(ctx);
    }
}

/// Opens the "Canvas" window and blocks until it is closed.
pub fn show_canvas(layout: CanvasLayout, config: &RenderConfig) -> Result<()> {
    let window = CanvasWindow::new(layout, config);
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(window.size()),
        resizable: false,
        ..Default::default()
    };
    info!("Opening {} window ({} blocks)", WINDOW_TITLE, window.layout.rects.len());
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Box::new(CanvasApp { window })),
    );
    info!("{} window closed", WINDOW_TITLE);
    Ok(())
}
