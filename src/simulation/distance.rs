//! Edge distance generation
//!
//! Distances are drawn through a [`DistanceSampler`] so that graphs can be
//! built reproducibly. Any `FnMut(NodeId, NodeId) -> u32` closure is a sampler.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::ops::Range;

use super::types::{NodeId, DEFAULT_DISTANCE_RANGE};

/// Supplies the distance of the edge from `from` to `to` at construction time
pub trait DistanceSampler {
    fn sample(&mut self, from: NodeId, to: NodeId) -> u32;
}

impl<F> DistanceSampler for F
where
    F: FnMut(NodeId, NodeId) -> u32,
{
    fn sample(&mut self, from: NodeId, to: NodeId) -> u32 {
        self(from, to)
    }
}

/// Uniform draw from an integer range (end exclusive)
#[derive(Debug, Clone)]
pub struct UniformDistance {
    range: Range<u32>,
    /// Optional seeded RNG; the thread RNG is used when absent
    rng: Option<StdRng>,
}

impl Default for UniformDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformDistance {
    /// Unseeded sampler over the default `[1, 10)` range
    pub fn new() -> Self {
        Self {
            range: DEFAULT_DISTANCE_RANGE,
            rng: None,
        }
    }

    /// Seeded sampler over the default `[1, 10)` range
    pub fn with_seed(seed: u64) -> Self {
        Self {
            range: DEFAULT_DISTANCE_RANGE,
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Use a different range; an empty range falls back to its start
    pub fn with_range(mut self, range: Range<u32>) -> Self {
        self.range = range;
        self
    }
}

impl DistanceSampler for UniformDistance {
    fn sample(&mut self, _from: NodeId, _to: NodeId) -> u32 {
        if self.range.is_empty() {
            return self.range.start;
        }
        let range = self.range.clone();
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }
}

/// Every edge gets the same distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDistance(pub u32);

impl DistanceSampler for FixedDistance {
    fn sample(&mut self, _from: NodeId, _to: NodeId) -> u32 {
        self.0
    }
}
