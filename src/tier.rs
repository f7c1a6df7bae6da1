//! Context-window size tiers.

use serde::{Deserialize, Serialize};

/// Coarse bucket of a model's context-window size.
///
/// Ordering follows context size, so `SizeTier` sorts smallest to largest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Tiny,
    Small,
    Medium,
    Large,
    Massive,
}

// Inclusive upper bounds per tier, in tokens. 8192 is still Tiny and
// 131072 (128K) is still Medium.
const TINY_MAX: u64 = 8_192;
const SMALL_MAX: u64 = 32_768;
const MEDIUM_MAX: u64 = 131_072;
const LARGE_MAX: u64 = 1_048_576;

impl SizeTier {
    /// Classify a context length. Total and monotonic over all of `u64`.
    pub fn classify(context_length: u64) -> Self {
        if context_length <= TINY_MAX {
            SizeTier::Tiny
        } else if context_length <= SMALL_MAX {
            SizeTier::Small
        } else if context_length <= MEDIUM_MAX {
            SizeTier::Medium
        } else if context_length <= LARGE_MAX {
            SizeTier::Large
        } else {
            SizeTier::Massive
        }
    }

    /// All tiers, smallest first. Handy for building per-tier views.
    pub fn all() -> [SizeTier; 5] {
        [
            SizeTier::Tiny,
            SizeTier::Small,
            SizeTier::Medium,
            SizeTier::Large,
            SizeTier::Massive,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeTier::Tiny => "tiny",
            SizeTier::Small => "small",
            SizeTier::Medium => "medium",
            SizeTier::Large => "large",
            SizeTier::Massive => "massive",
        }
    }
}

impl std::fmt::Display for SizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
