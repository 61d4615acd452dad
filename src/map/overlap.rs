// src/map/overlap.rs
use crate::map::Block;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which test decides whether a candidate collides with an accepted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Only the candidate's corners are tested against the accepted block.
    /// A later block can still swallow an earlier one.
    Corner,
    /// Open-interior rectangle intersection, checked on both axes.
    #[default]
    Symmetric,
}

impl OverlapPolicy {
    /// Tests `candidate` against an already accepted block.
    pub fn rejects(&self, candidate: &Block, accepted: &Block) -> bool {
        match self {
            OverlapPolicy::Corner => candidate.crosses(accepted),
            OverlapPolicy::Symmetric => candidate.intersects(accepted),
        }
    }

    /// Order-independent form used when auditing a finished set.
    pub fn overlaps(&self, a: &Block, b: &Block) -> bool {
        match self {
            OverlapPolicy::Corner => a.crosses(b) || b.crosses(a),
            OverlapPolicy::Symmetric => a.intersects(b),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OverlapPolicy::Corner => "corner",
            OverlapPolicy::Symmetric => "symmetric",
        }
    }
}
