// src/map/block.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle on the map, anchored at its top-left corner.
///
/// Coordinates grow rightwards and downwards, matching canvas space, so
/// `bottom()` is `y + h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Block {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Block { x, y, w, h }
    }

    pub fn left(&self) -> u64 {
        self.x as u64
    }

    pub fn right(&self) -> u64 {
        self.x as u64 + self.w as u64
    }

    pub fn top(&self) -> u64 {
        self.y as u64
    }

    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.h as u64
    }

    /// The four corners, clockwise from the anchor.
    pub fn corners(&self) -> [(u64, u64); 4] {
        [
            (self.left(), self.top()),
            (self.right(), self.top()),
            (self.right(), self.bottom()),
            (self.left(), self.bottom()),
        ]
    }

    /// Returns true if the point lies strictly inside the open interior.
    /// Points on an edge are outside.
    pub fn contains_strict(&self, px: u64, py: u64) -> bool {
        self.left() < px && px < self.right() && self.top() < py && py < self.bottom()
    }

    /// Directional corner-containment test: true if any of `self`'s corners
    /// lies strictly inside `other`. `other`'s corners are never checked.
    pub fn crosses(&self, other: &Block) -> bool {
        self.corners()
            .iter()
            .any(|&(px, py)| other.contains_strict(px, py))
    }

    /// Symmetric open-interior intersection. Edge contact is not an intersection.
    pub fn intersects(&self, other: &Block) -> bool {
        open_overlap(self.left(), self.right(), other.left(), other.right())
            && open_overlap(self.top(), self.bottom(), other.top(), other.bottom())
    }

    /// Parses a `x y w h` record. Tokens are separated by single spaces, so a
    /// doubled space yields an empty token and is rejected.
    pub fn parse_record(record: &str) -> Result<Self, String> {
        let tokens: Vec<&str> = record.split(' ').collect();
        if tokens.len() != 4 {
            return Err(format!("expected 4 fields, found {}", tokens.len()));
        }
        let mut fields = [0u32; 4];
        for (slot, token) in fields.iter_mut().zip(&tokens) {
            *slot = token
                .parse::<u32>()
                .map_err(|e| format!("field {:?}: {}", token, e))?;
        }
        let [x, y, w, h] = fields;
        Ok(Block { x, y, w, h })
    }
}

fn open_overlap(lo0: u64, hi0: u64, lo1: u64, hi1: u64) -> bool {
    lo0 < hi1 && lo1 < hi0
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_strict_excludes_edges() {
        let b = Block::new(10, 10, 10, 10);
        assert!(b.contains_strict(15, 15));
        assert!(!b.contains_strict(10, 15));
        assert!(!b.contains_strict(20, 15));
        assert!(!b.contains_strict(15, 20));
    }

    #[test]
    fn test_edge_touching_is_not_a_cross() {
        let a = Block::new(0, 0, 10, 10);
        let b = Block::new(10, 0, 10, 10);
        assert!(!a.crosses(&b));
        assert!(!b.crosses(&a));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contained_block_crosses_container() {
        let outer = Block::new(0, 0, 100, 100);
        let inner = Block::new(40, 40, 5, 5);
        assert!(inner.crosses(&outer));
        // The reverse direction is blind to containment.
        assert!(!outer.crosses(&inner));
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_plus_shaped_overlap_is_missed_by_corner_test() {
        let wide = Block::new(0, 10, 30, 5);
        let tall = Block::new(10, 0, 5, 30);
        assert!(!wide.crosses(&tall));
        assert!(!tall.crosses(&wide));
        assert!(wide.intersects(&tall));
    }

    #[test]
    fn test_degenerate_blocks() {
        let line = Block::new(5, 5, 0, 4);
        let host = Block::new(0, 0, 10, 10);
        assert!(line.crosses(&host));
        assert!(line.intersects(&host));
        assert!(!Block::new(5, 5, 0, 0).intersects(&Block::new(5, 5, 0, 0)));
    }

    #[test]
    fn test_parse_record() {
        assert_eq!(Block::parse_record("10 20 5 5"), Ok(Block::new(10, 20, 5, 5)));
        assert!(Block::parse_record("10 20 5").is_err());
        assert!(Block::parse_record("10 20 5 5 1").is_err());
        assert!(Block::parse_record("10  20 5 5").is_err());
        assert!(Block::parse_record("10 20 a 5").is_err());
        assert!(Block::parse_record("10 -20 5 5").is_err());
    }

    #[test]
    fn test_display_matches_record_format() {
        assert_eq!(Block::new(1, 2, 3, 4).to_string(), "1 2 3 4");
    }
}
