// src/document/mod.rs
mod document;

pub use self::document::{load_blocks, parse_blocks, save_blocks, write_blocks};
