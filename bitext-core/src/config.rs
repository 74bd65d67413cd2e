//! Alignment options

use crate::error::{AlignError, Result};
use crate::partition::generator::{DEFAULT_GENERATOR_CAP, DEFAULT_SEED};
use crate::scorer::ScoringWeights;
use serde::{Deserialize, Serialize};

/// Default number of partitions scored per policy
pub const DEFAULT_MAX_PARTITIONS: usize = 10_000;

/// Default partition count from which scoring goes parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 32;

/// Options for one alignment call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignOptions {
    /// Upper bound on partitions scored per policy; larger sets are
    /// subsampled by a fixed stride
    pub max_partitions: usize,
    /// Upper bound on partitions the generator produces per policy
    pub generator_cap: usize,
    /// Seed for partition sampling
    pub seed: u64,
    /// Log attempt summaries at info level instead of debug
    pub verbose: bool,
    /// Partition count at or above which scoring runs in parallel
    pub parallel_threshold: usize,
    /// Scoring weights
    pub weights: ScoringWeights,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            max_partitions: DEFAULT_MAX_PARTITIONS,
            generator_cap: DEFAULT_GENERATOR_CAP,
            seed: DEFAULT_SEED,
            verbose: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            weights: ScoringWeights::default(),
        }
    }
}

impl AlignOptions {
    /// Create a builder
    pub fn builder() -> AlignOptionsBuilder {
        AlignOptionsBuilder::default()
    }

    /// Check every option against its accepted range
    pub fn validate(&self) -> Result<()> {
        if self.max_partitions == 0 {
            return Err(AlignError::invalid("max_partitions", "must be at least 1"));
        }
        if self.generator_cap == 0 {
            return Err(AlignError::invalid("generator_cap", "must be at least 1"));
        }
        self.weights.validate()
    }
}

/// Builder for [`AlignOptions`]
#[derive(Debug, Default)]
pub struct AlignOptionsBuilder {
    options: AlignOptions,
}

impl AlignOptionsBuilder {
    /// Set the per-policy scoring bound
    pub fn max_partitions(mut self, max_partitions: usize) -> Self {
        self.options.max_partitions = max_partitions;
        self
    }

    /// Set the generator cap
    pub fn generator_cap(mut self, cap: usize) -> Self {
        self.options.generator_cap = cap;
        self
    }

    /// Set the sampling seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = seed;
        self
    }

    /// Enable verbose attempt logging
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.options.verbose = verbose;
        self
    }

    /// Set the parallel scoring threshold
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.options.parallel_threshold = threshold;
        self
    }

    /// Replace the scoring weights
    pub fn weights(mut self, weights: ScoringWeights) -> Self {
        self.options.weights = weights;
        self
    }

    /// Validate and build the options
    pub fn build(self) -> Result<AlignOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}
