// src/render/layout.rs

use crate::error::{BlockError, Result};
use crate::map::Block;
use crate::render::{DISPLAY_THRESHOLD, EMPTY_CANVAS_SIZE, MAX_CANVAS_SIDE, TARGET_EXTENT};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub display_threshold: f64,
    pub target_extent: f64,
    /// Width and height of the canvas for an empty block list.
    pub empty_canvas_size: [u32; 2],
    pub fill: [u8; 3],
    pub background: [u8; 3],
    /// Largest canvas side that will be drawn.
    pub max_canvas_side: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            display_threshold: DISPLAY_THRESHOLD,
            target_extent: TARGET_EXTENT,
            empty_canvas_size: [EMPTY_CANVAS_SIZE, EMPTY_CANVAS_SIZE],
            fill: [0, 0, 255],
            background: [255, 255, 255],
            max_canvas_side: MAX_CANVAS_SIDE,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.target_extent.is_finite() || self.target_extent <= 0.0 {
            return Err(BlockError::Config(format!(
                "target_extent must be a positive number, got {}",
                self.target_extent
            )));
        }
        if !self.display_threshold.is_finite() || self.display_threshold < 0.0 {
            return Err(BlockError::Config(format!(
                "display_threshold must be a non-negative number, got {}",
                self.display_threshold
            )));
        }
        let [width, height] = self.empty_canvas_size;
        if width == 0 || height == 0 {
            return Err(BlockError::Config(
                "empty_canvas_size must not have a zero side".into(),
            ));
        }
        if self.max_canvas_side == 0 {
            return Err(BlockError::Config("max_canvas_side must be greater than 0".into()));
        }
        Ok(())
    }
}

/// A block in canvas coordinates, after scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Everything a surface needs to draw a block list: the canvas size, the
/// uniform scale ratio and the rectangles already divided by it.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasLayout {
    pub max_x: u64,
    pub max_y: u64,
    pub ratio: f64,
    pub width: u32,
    pub height: u32,
    pub rects: Vec<ScaledRect>,
}

impl CanvasLayout {
    /// Validates `config`, lays the blocks out and rejects canvases larger
    /// than `config.max_canvas_side`.
    pub fn build(blocks: &[Block], config: &RenderConfig) -> Result<Self> {
        config.validate()?;
        let layout = Self::compute(blocks, config);
        layout.ensure_fits(config)?;
        Ok(layout)
    }

    pub fn ensure_fits(&self, config: &RenderConfig) -> Result<()> {
        let limit = config.max_canvas_side;
        if self.width > limit || self.height > limit {
            return Err(BlockError::Config(format!(
                "canvas {}x{} exceeds the {}px limit; lower display_threshold or target_extent",
                self.width, self.height, limit
            )));
        }
        Ok(())
    }

    pub fn compute(blocks: &[Block], config: &RenderConfig) -> Self {
        if blocks.is_empty() {
            let [width, height] = config.empty_canvas_size;
            info!("No blocks to draw; using an empty {}x{} canvas", width, height);
            return CanvasLayout {
                max_x: 0,
                max_y: 0,
                ratio: 1.0,
                width,
                height,
                rects: Vec::new(),
            };
        }

        let max_x = blocks.iter().map(Block::right).max().unwrap_or(0);
        let max_y = blocks.iter().map(Block::bottom).max().unwrap_or(0);
        let ratio = scale_ratio(max_x, max_y, config);

        let rects = blocks
            .iter()
            .map(|b| {
                debug!("{} {} {} {}", b.left(), b.top(), b.right(), b.bottom());
                ScaledRect {
                    x0: b.left() as f64 / ratio,
                    y0: b.top() as f64 / ratio,
                    x1: b.right() as f64 / ratio,
                    y1: b.bottom() as f64 / ratio,
                }
            })
            .collect();

        let width = scaled_extent(max_x, ratio);
        let height = scaled_extent(max_y, ratio);
        info!(
            "Canvas {}x{} for extent {}x{} (ratio {:.3})",
            width, height, max_x, max_y, ratio
        );

        CanvasLayout {
            max_x,
            max_y,
            ratio,
            width,
            height,
            rects,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Uniform divisor for a bounding extent. Only the larger extent matters, and
/// the result never drops below 1.
pub fn scale_ratio(max_x: u64, max_y: u64, config: &RenderConfig) -> f64 {
    let larger = max_x.max(max_y) as f64;
    if larger > config.display_threshold {
        (larger / config.target_extent).max(1.0)
    } else {
        1.0
    }
}

fn scaled_extent(extent: u64, ratio: f64) -> u32 {
    // Division by the ratio can leave a hair above a whole number.
    let scaled = (extent as f64 / ratio - 1e-9).ceil();
    (scaled as u32).max(1)
}
