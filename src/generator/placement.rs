// src/generator/placement.rs

use crate::document::save_blocks;
use crate::error::{BlockError, Result};
use crate::generator::{
    DEFAULT_AMOUNT, DEFAULT_MAP_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_SIZE_DIVISOR,
    SLOW_PLACEMENT_ATTEMPTS,
};
use crate::map::{Block, OverlapPolicy};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub amount: usize,
    pub map_size: u32,
    pub output_path: PathBuf,
    pub size_divisor: u32,
    pub overlap: OverlapPolicy,
    /// Candidates allowed per block before giving up. `None` never gives up.
    pub max_attempts: Option<u64>,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            amount: DEFAULT_AMOUNT,
            map_size: DEFAULT_MAP_SIZE,
            output_path: PathBuf::from("sample.txt"),
            size_divisor: DEFAULT_SIZE_DIVISOR,
            overlap: OverlapPolicy::default(),
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.map_size == 0 {
            return Err(BlockError::Config("map_size must be greater than 0".into()));
        }
        if self.size_divisor == 0 {
            return Err(BlockError::Config("size_divisor must be greater than 0".into()));
        }
        if self.max_attempts == Some(0) {
            return Err(BlockError::Config(
                "max_attempts must be greater than 0 (omit it for no limit)".into(),
            ));
        }
        Ok(())
    }

    /// Exclusive upper bound for sampled widths and heights.
    pub fn max_dimension(&self) -> f64 {
        self.map_size as f64 / self.size_divisor as f64
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct GenerationStats {
    pub placed: usize,
    pub candidates: u64,
    pub rejections: u64,
    pub worst_attempts: u64,
    pub generation_time: f64,
}

/// Rejection-sampling placement of non-overlapping blocks.
///
/// The accepted set lives in the generator for the length of one run and is
/// handed back by [`PlacementGenerator::generate`].
pub struct PlacementGenerator<R: Rng> {
    config: GeneratorConfig,
    rng: R,
    blocks: Vec<Block>,
    stats: GenerationStats,
}

impl PlacementGenerator<StdRng> {
    /// Builds a generator seeded from `config.seed`, or from the thread RNG
    /// when no seed is set. The seed in use is logged so a run can be replayed.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!("Placement seed: {}", seed);
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PlacementGenerator<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(PlacementGenerator {
            blocks: Vec::with_capacity(config.amount),
            config,
            rng,
            stats: GenerationStats::default(),
        })
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Places `amount` blocks and returns them in acceptance order.
    pub fn generate(&mut self) -> Result<Vec<Block>> {
        let start = Instant::now();
        self.blocks.clear();
        self.stats = GenerationStats::default();

        info!(
            "Placing {} blocks on a {}x{} map ({} overlap test)",
            self.config.amount,
            self.config.map_size,
            self.config.map_size,
            self.config.overlap.name()
        );

        for _ in 0..self.config.amount {
            let block = self.place_one()?;
            self.blocks.push(block);
        }

        self.stats.placed = self.blocks.len();
        self.stats.generation_time = start.elapsed().as_secs_f64();
        info!(
            "Placed {} blocks from {} candidates ({} rejected) in {:.3}s",
            self.stats.placed,
            self.stats.candidates,
            self.stats.rejections,
            self.stats.generation_time
        );
        Ok(std::mem::take(&mut self.blocks))
    }

    fn place_one(&mut self) -> Result<Block> {
        let mut attempts = 0u64;
        loop {
            attempts += 1;
            self.stats.candidates += 1;
            let candidate = self.sample();

            if !self.collides(&candidate) {
                self.stats.worst_attempts = self.stats.worst_attempts.max(attempts);
                if attempts > SLOW_PLACEMENT_ATTEMPTS {
                    warn!(
                        "Block #{} needed {} candidates; the map is close to saturation",
                        self.blocks.len(),
                        attempts
                    );
                }
                debug!("Accepted block #{}: {}", self.blocks.len(), candidate);
                return Ok(candidate);
            }

            self.stats.rejections += 1;
            if let Some(max) = self.config.max_attempts {
                if attempts >= max {
                    return Err(BlockError::Saturation {
                        placed: self.blocks.len(),
                        attempts,
                    });
                }
            }
        }
    }

    fn collides(&self, candidate: &Block) -> bool {
        let policy = self.config.overlap;
        self.blocks
            .iter()
            .any(|accepted| policy.rejects(candidate, accepted))
    }

    fn sample(&mut self) -> Block {
        let map_size = self.config.map_size;
        let x = self.rng.random_range(0..map_size);
        let y = self.rng.random_range(0..map_size);
        let w = self.sample_dimension();
        let h = self.sample_dimension();
        Block::new(x, y, w, h)
    }

    /// Uniform real in `[0, max_dimension)`, truncated.
    fn sample_dimension(&mut self) -> u32 {
        let max_dim = self.config.max_dimension();
        // Rounding in the product can land exactly on the bound.
        let ceiling = (max_dim.ceil() as u32).saturating_sub(1);
        let value = (self.rng.random::<f64>() * max_dim) as u32;
        value.min(ceiling)
    }
}

/// Runs one placement pass with a generator built from `config`.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<Block>> {
    PlacementGenerator::new(config.clone())?.generate()
}

/// Places blocks and writes them to `config.output_path`, replacing any
/// existing file.
pub fn generate_to_file(config: &GeneratorConfig) -> Result<GenerationStats> {
    let mut generator = PlacementGenerator::new(config.clone())?;
    let blocks = generator.generate()?;
    save_blocks(&config.output_path, &blocks)?;
    info!(
        "Wrote {} blocks to {}",
        blocks.len(),
        config.output_path.display()
    );
    Ok(generator.stats().clone())
}
