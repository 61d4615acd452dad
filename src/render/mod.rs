//! # Render Module
//!
//! Turns a block list into a drawable scene. `layout` does the pure geometry
//! (extents, scale ratio, scaled rectangles); `raster` paints a layout into an
//! image buffer. The window surface lives in `crate::ui`.

pub mod layout;
pub mod raster;

pub use layout::{CanvasLayout, RenderConfig, ScaledRect};
pub use raster::{export_image, rasterize};

use crate::document::load_blocks;
use crate::error::Result;
use std::path::Path;

/// Extents above this are scaled down before drawing.
pub const DISPLAY_THRESHOLD: f64 = 1000.0;
/// Larger extent of the canvas after scaling down.
pub const TARGET_EXTENT: f64 = 1500.0;
/// Canvas side used when there is nothing to draw.
pub const EMPTY_CANVAS_SIZE: u32 = 400;
/// Canvases with a longer side are refused rather than allocated.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Reads a block file in full and lays it out for drawing.
pub fn load_layout(path: &Path, config: &RenderConfig) -> Result<CanvasLayout> {
    config.validate()?;
    let blocks = load_blocks(path)?;
    CanvasLayout::build(&blocks, config)
}
