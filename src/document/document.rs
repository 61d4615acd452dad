// src/document/document.rs
//
// Flat text persistence for block sets: one `x y w h` record per line,
// newline terminated, no header.

use crate::error::{BlockError, Result};
use crate::map::Block;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Writes one record per block.
pub fn write_blocks<W: Write>(writer: &mut W, blocks: &[Block]) -> io::Result<()> {
    for block in blocks {
        writeln!(writer, "{}", block)?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes every block to it.
pub fn save_blocks(path: &Path, blocks: &[Block]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_blocks(&mut writer, blocks)?;
    writer.flush()?;
    Ok(())
}

/// Reads block records. Empty lines are skipped, so a final newline is
/// harmless; any other line must hold exactly four integers.
pub fn parse_blocks<R: BufRead>(reader: R) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();
    // Raw lines, so a bad byte becomes a numbered parse error rather than an
    // anonymous I/O error.
    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line = String::from_utf8(raw).map_err(|e| {
            BlockError::parse(
                index + 1,
                &String::from_utf8_lossy(e.as_bytes()),
                e.utf8_error().to_string(),
            )
        })?;
        let record = line.strip_suffix('\r').unwrap_or(&line);
        if record.is_empty() {
            continue;
        }
        let block = Block::parse_record(record)
            .map_err(|reason| BlockError::parse(index + 1, record, reason))?;
        blocks.push(block);
    }
    Ok(blocks)
}

/// Loads a block file. A missing file surfaces as `BlockError::Io` with
/// `ErrorKind::NotFound`.
pub fn load_blocks(path: &Path) -> Result<Vec<Block>> {
    let file = File::open(path)?;
    let blocks = parse_blocks(BufReader::new(file))?;
    debug!("Loaded {} blocks from {}", blocks.len(), path.display());
    Ok(blocks)
}
