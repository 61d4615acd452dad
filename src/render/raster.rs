// src/render/raster.rs

use crate::error::Result;
use crate::render::{CanvasLayout, RenderConfig, ScaledRect};
use image::{Rgb, RgbImage};
use log::info;
use std::path::Path;

/// Paints the layout into a fresh image the size of the canvas.
pub fn rasterize(layout: &CanvasLayout, config: &RenderConfig) -> RgbImage {
    let mut image = RgbImage::from_pixel(layout.width, layout.height, Rgb(config.background));
    let fill = Rgb(config.fill);
    for rect in &layout.rects {
        fill_rect(&mut image, rect, fill);
    }
    image
}

/// Rasterises the layout and saves it; the format follows the file extension.
pub fn export_image(layout: &CanvasLayout, config: &RenderConfig, path: &Path) -> Result<()> {
    layout.ensure_fits(config)?;
    let image = rasterize(layout, config);
    image.save(path)?;
    info!(
        "Exported {}x{} canvas with {} blocks to {}",
        layout.width,
        layout.height,
        layout.rects.len(),
        path.display()
    );
    Ok(())
}

fn fill_rect(image: &mut RgbImage, rect: &ScaledRect, color: Rgb<u8>) {
    let (x0, x1) = pixel_span(rect.x0, rect.x1, image.width());
    let (y0, y1) = pixel_span(rect.y0, rect.y1, image.height());
    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(x, y, color);
        }
    }
}

/// Half-open pixel range covering `[lo, hi]`, at least one pixel wide and
/// clipped to `limit`.
fn pixel_span(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
    let start = lo.floor().max(0.0) as u32;
    let end = (hi.ceil().max(0.0) as u32).max(start + 1);
    (start.min(limit), end.min(limit))
}
