// src/lib.rs

pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod map;
pub mod render;
#[cfg(feature = "gui")]
pub mod ui;
pub mod verify;

pub use error::{BlockError, Result};
pub use map::{Block, OverlapPolicy};
