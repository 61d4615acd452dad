//! # blockmap Main Entry Point
//!
//! Command-line front end for the block placement tools:
//!
//! - `generate` places non-overlapping blocks and writes them to a text file.
//! - `render` reads a block file and shows it in a "Canvas" window and/or
//!   exports it as an image.
//! - `verify` audits a block file for overlapping pairs.
//!
//! Flags override values from an optional JSON config file, which overrides
//! the built-in defaults. Logging goes through `env_logger`; set `RUST_LOG`
//! to change the level.
//!
//! ## License
//! Licensed under the MIT License.

use blockmap::config::AppConfig;
use blockmap::document::load_blocks;
use blockmap::generator::{generate_to_file, GeneratorConfig};
use blockmap::render::{export_image, load_layout, CanvasLayout, RenderConfig};
use blockmap::verify::{find_overlaps, has_overlap};
use blockmap::{BlockError, OverlapPolicy};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blockmap", version, about = "Random non-overlapping block maps")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place blocks by rejection sampling and write them to a file.
    Generate(GenerateArgs),
    /// Draw a block file in a window or export it as an image.
    Render(RenderArgs),
    /// Report overlapping block pairs in a file.
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of blocks to place.
    #[arg(long)]
    count: Option<usize>,
    /// Side length of the square map.
    #[arg(long)]
    map_size: Option<u32>,
    /// Output file.
    #[arg(long)]
    path: Option<PathBuf>,
    /// Widths and heights stay below map_size / size_divisor.
    #[arg(long)]
    size_divisor: Option<u32>,
    #[arg(long, value_enum)]
    overlap: Option<OverlapPolicy>,
    /// Candidates allowed per block before reporting saturation.
    #[arg(long, conflicts_with = "unbounded")]
    max_attempts: Option<u64>,
    /// Keep sampling forever instead of reporting saturation.
    #[arg(long)]
    unbounded: bool,
    #[arg(long)]
    seed: Option<u64>,
}

impl GenerateArgs {
    fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(count) = self.count {
            config.amount = count;
        }
        if let Some(map_size) = self.map_size {
            config.map_size = map_size;
        }
        if let Some(path) = &self.path {
            config.output_path = path.clone();
        }
        if let Some(divisor) = self.size_divisor {
            config.size_divisor = divisor;
        }
        if let Some(overlap) = self.overlap {
            config.overlap = overlap;
        }
        if let Some(max) = self.max_attempts {
            config.max_attempts = Some(max);
        }
        if self.unbounded {
            config.max_attempts = None;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Block file to draw. Defaults to the generator's output path.
    #[arg(long)]
    path: Option<PathBuf>,
    /// Also write the canvas to this image file (format from the extension).
    #[arg(long)]
    export: Option<PathBuf>,
    /// Skip the window.
    #[arg(long)]
    no_window: bool,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Block file to check.
    #[arg(long, default_value = "sample.txt")]
    path: PathBuf,
    #[arg(long, value_enum, default_value_t = OverlapPolicy::Symmetric)]
    overlap: OverlapPolicy,
}

fn run_generate(args: &GenerateArgs) -> Result<(), BlockError> {
    let mut config = AppConfig::load_or_default(args.config.as_deref())?.generator;
    args.apply(&mut config);
    let stats = generate_to_file(&config)?;
    info!(
        "Generation finished: {}",
        serde_json::to_string(&stats).unwrap_or_else(|_| format!("{:?}", stats))
    );
    Ok(())
}

fn run_render(args: &RenderArgs) -> Result<(), BlockError> {
    let app_config = AppConfig::load_or_default(args.config.as_deref())?;
    app_config.render.validate()?;
    let path = args
        .path
        .clone()
        .unwrap_or_else(|| app_config.generator.output_path.clone());
    info!("Visualizing {}", path.display());
    let layout = load_layout(&path, &app_config.render)?;

    if let Some(export) = &args.export {
        export_image(&layout, &app_config.render, export)?;
    }
    if !args.no_window {
        open_window(layout, &app_config.render)?;
    }
    info!("Visualization finished");
    Ok(())
}

#[cfg(feature = "gui")]
fn open_window(layout: CanvasLayout, config: &RenderConfig) -> Result<(), BlockError> {
    blockmap::ui::show_canvas(layout, config)
}

#[cfg(not(feature = "gui"))]
fn open_window(_layout: CanvasLayout, _config: &RenderConfig) -> Result<(), BlockError> {
    Err(BlockError::Window(
        "built without the `gui` feature; use --export with --no-window".into(),
    ))
}

fn run_verify(args: &VerifyArgs) -> Result<(), BlockError> {
    let blocks = load_blocks(&args.path)?;
    // Clean sets stop at the first pass; only a dirty one is enumerated.
    if has_overlap(&blocks, args.overlap) {
        let pairs = find_overlaps(&blocks, args.overlap);
        for &(i, j) in &pairs {
            error!(
                "Blocks #{} ({}) and #{} ({}) overlap",
                i, blocks[i], j, blocks[j]
            );
        }
        return Err(BlockError::Overlapping { count: pairs.len() });
    }
    info!(
        "{} blocks in {} have no overlaps ({} test)",
        blocks.len(),
        args.path.display(),
        args.overlap.name()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Generate(args) => run_generate(args)?,
        Command::Render(args) => run_render(args)?,
        Command::Verify(args) => run_verify(args)?,
    }
    Ok(())
}
