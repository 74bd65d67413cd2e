//! Partition scoring
//!
//! Each partition gets a lower-is-better cost built from three signals:
//! how many Chinese sentences end up without English text (and where),
//! how many English sentences were merged into one group, and how uniform
//! the English-words-per-Han-character ratio is across the paragraph.
//! Scores are not normalised and only compare partitions of the same
//! sentence lists.

use crate::error::{AlignError, Result};
use crate::partition::Partition;
use crate::text::{count_chinese_han_chars, count_english_words};
use serde::{Deserialize, Serialize};

/// Weights of the scoring terms.
///
/// Only the relative ordering matters: a missing Chinese position outweighs
/// an empty mapping near the start, which outweighs one in the middle, which
/// outweighs ratio inconsistency and merges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Per Chinese sentence the partition does not reach
    pub unmapped_chinese: f64,
    /// Per step of distance from the end of the leading window
    pub leading_empty: f64,
    /// Number of leading positions where empty mappings are escalated
    pub leading_window: usize,
    /// Empty mapping between the leading window and the trailing run
    pub middle_empty: f64,
    /// Empty mapping inside the trailing run of empty groups
    pub trailing_empty: f64,
    /// Per extra English sentence in a merged group
    pub merge: f64,
    /// Multiplier on the population variance of the ratios
    pub variance: f64,
    /// Subtracted when every Chinese sentence is mapped
    pub completeness_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            unmapped_chinese: 10_000.0,
            leading_empty: 15_000.0,
            leading_window: 3,
            middle_empty: 8_000.0,
            trailing_empty: 1_000.0,
            merge: 50.0,
            variance: 100.0,
            completeness_bonus: 500.0,
        }
    }
}

impl ScoringWeights {
    /// Check that weights are finite, non-negative and keep the empty-mapping
    /// penalties ordered leading >= middle >= trailing.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("weights.unmapped_chinese", self.unmapped_chinese),
            ("weights.leading_empty", self.leading_empty),
            ("weights.middle_empty", self.middle_empty),
            ("weights.trailing_empty", self.trailing_empty),
            ("weights.merge", self.merge),
            ("weights.variance", self.variance),
            ("weights.completeness_bonus", self.completeness_bonus),
        ];
        for (field, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(AlignError::invalid(
                    field,
                    format!("must be a finite non-negative number, got {value}"),
                ));
            }
        }
        if self.leading_empty < self.middle_empty {
            return Err(AlignError::invalid(
                "weights.leading_empty",
                "must not be lower than weights.middle_empty",
            ));
        }
        if self.middle_empty < self.trailing_empty {
            return Err(AlignError::invalid(
                "weights.middle_empty",
                "must not be lower than weights.trailing_empty",
            ));
        }
        Ok(())
    }
}

/// Quality of one partition against one pair of sentence lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Total cost, lower is better
    pub score: f64,
    /// English words per Han character for every non-empty mapping
    pub ratios: Vec<f64>,
    /// Chinese sentences beyond the end of the partition
    pub unmapped_chinese_count: usize,
    /// Chinese sentences with Han text but no English words
    pub empty_mapping_count: usize,
}

/// Per-sentence lengths, computed once and shared by every partition
#[derive(Debug, Clone)]
pub struct ScoringContext {
    han_chars: Vec<usize>,
    english_words: Vec<usize>,
}

impl ScoringContext {
    /// Measure both sentence lists
    pub fn new<Z: AsRef<str>, E: AsRef<str>>(chinese: &[Z], english: &[E]) -> Self {
        Self {
            han_chars: chinese
                .iter()
                .map(|s| count_chinese_han_chars(s.as_ref()))
                .collect(),
            english_words: english
                .iter()
                .map(|s| count_english_words(s.as_ref()))
                .collect(),
        }
    }

    /// Number of Chinese sentences
    pub fn chinese_len(&self) -> usize {
        self.han_chars.len()
    }

    /// Word count of a group; sentences are joined with single spaces, so
    /// counts simply add up.
    fn group_words(&self, group: &[usize]) -> usize {
        group
            .iter()
            .filter_map(|&i| self.english_words.get(i))
            .sum()
    }
}

/// Scores partitions with a fixed set of weights
#[derive(Debug, Clone, Default)]
pub struct PartitionScorer {
    weights: ScoringWeights,
}

impl PartitionScorer {
    /// Create a scorer
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score a partition against the raw sentence lists
    pub fn score<Z: AsRef<str>, E: AsRef<str>>(
        &self,
        chinese: &[Z],
        english: &[E],
        partition: &Partition,
    ) -> ScoreResult {
        self.score_in(&ScoringContext::new(chinese, english), partition)
    }

    /// Score a partition against precomputed sentence lengths
    pub fn score_in(&self, context: &ScoringContext, partition: &Partition) -> ScoreResult {
        let w = &self.weights;
        let chinese_len = context.chinese_len();

        let unmapped_chinese_count = chinese_len.saturating_sub(partition.len());
        let mut score = unmapped_chinese_count as f64 * w.unmapped_chinese;

        let trailing_start = partition.len() - partition.trailing_empty_run();
        let mut ratios = Vec::with_capacity(partition.len());
        let mut empty_mapping_count = 0;

        for (i, group) in partition.groups().iter().enumerate().take(chinese_len) {
            let han_chars = context.han_chars[i];
            if han_chars == 0 {
                continue;
            }

            let words = context.group_words(group);
            if words == 0 {
                empty_mapping_count += 1;
                score += if i >= trailing_start {
                    w.trailing_empty
                } else if i < w.leading_window {
                    w.leading_empty * (w.leading_window - i) as f64
                } else {
                    w.middle_empty
                };
            } else {
                ratios.push(words as f64 / han_chars as f64);
                if group.len() > 1 {
                    score += w.merge * (group.len() - 1) as f64;
                }
            }
        }

        if ratios.len() >= 2 {
            score += population_variance(&ratios) * w.variance;
        }

        if empty_mapping_count == 0 && partition.len() == chinese_len {
            score -= w.completeness_bonus;
        }

        ScoreResult {
            score,
            ratios,
            unmapped_chinese_count,
            empty_mapping_count,
        }
    }
}

fn population_variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
