// src/generator/mod.rs
pub mod placement;

pub use placement::{generate, generate_to_file, GenerationStats, GeneratorConfig, PlacementGenerator};

/// Dimensions are sampled below `map_size / DEFAULT_SIZE_DIVISOR`.
pub const DEFAULT_SIZE_DIVISOR: u32 = 50;
pub const DEFAULT_AMOUNT: usize = 800;
pub const DEFAULT_MAP_SIZE: u32 = 1000;
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;
/// A single block needing more candidates than this gets a warning.
pub const SLOW_PLACEMENT_ATTEMPTS: u64 = 10_000;
