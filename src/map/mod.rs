// src/map/mod.rs
pub mod block;
pub mod overlap;

pub use block::Block;
pub use overlap::OverlapPolicy;
