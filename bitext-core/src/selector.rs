//! Alignment selection
//!
//! Runs segmentation, generation and scoring under increasingly aggressive
//! punctuation policies and keeps the cheapest result. A finer policy is only
//! tried while the previous one produced fewer English sentences than there
//! are Chinese sentences.

use crate::config::AlignOptions;
use crate::error::Result;
use crate::partition::generator::PartitionGenerator;
use crate::partition::Partition;
use crate::scorer::{PartitionScorer, ScoreResult, ScoringContext};
use crate::segmenter::{segment_english_sentences, SegmentationPolicy};
use log::Level;
use serde::Serialize;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Score reported for the one-to-one shortcut
const IDENTITY_SCORE: f64 = -500.0;

/// Score reported for the single-Chinese-sentence shortcut
const SINGLE_CHINESE_SCORE: f64 = 0.0;

/// Shortcut taken instead of a partition search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FastPath {
    /// English and Chinese sentence counts match; mapped one to one
    EqualCount,
    /// Only one Chinese sentence; it receives the whole paragraph
    SingleChinese,
}

/// Outcome of one segmentation policy
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentAttempt {
    /// Policy used to segment the English paragraph
    pub policy: SegmentationPolicy,
    /// Sentences the policy produced
    pub english_sentences: Vec<String>,
    /// English text per Chinese sentence under the best partition
    pub aligned_sentences: Vec<String>,
    /// Best partition, if one was found
    pub best_partition: Option<Partition>,
    /// Score of the best partition; infinite when nothing could be aligned
    pub best_score: f64,
    /// Full scoring detail of the best partition
    pub best_score_result: Option<ScoreResult>,
    /// Shortcut taken, if any
    pub fast_path: Option<FastPath>,
    /// Candidates produced by the generator
    pub partitions_generated: usize,
    /// Candidates actually scored after subsampling
    pub partitions_scored: usize,
}

/// Result of a full alignment call with every attempt kept
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentReport {
    /// English text per Chinese sentence
    pub aligned_sentences: Vec<String>,
    /// Policy of the winning attempt
    pub chosen_policy: Option<SegmentationPolicy>,
    /// Attempts in the order they ran
    pub attempts: Vec<AlignmentAttempt>,
    /// Wall-clock time in milliseconds
    pub processing_time_ms: f64,
}

impl AlignmentReport {
    /// The winning attempt
    pub fn chosen_attempt(&self) -> Option<&AlignmentAttempt> {
        let policy = self.chosen_policy?;
        self.attempts.iter().find(|a| a.policy == policy)
    }
}

/// Aligns English paragraphs onto Chinese sentence lists
#[derive(Debug, Clone)]
pub struct Aligner {
    options: AlignOptions,
    generator: PartitionGenerator,
    scorer: PartitionScorer,
}

impl Default for Aligner {
    fn default() -> Self {
        Self::from_valid_options(AlignOptions::default())
    }
}

impl Aligner {
    /// Create an aligner with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aligner with custom options
    pub fn with_options(options: AlignOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(options: AlignOptions) -> Self {
        let generator = PartitionGenerator::new(options.generator_cap).with_seed(options.seed);
        let scorer = PartitionScorer::new(options.weights);
        Self {
            options,
            generator,
            scorer,
        }
    }

    /// Options in use
    pub fn options(&self) -> &AlignOptions {
        &self.options
    }

    /// Align and return one English string per Chinese sentence
    pub fn align<S: AsRef<str>>(&self, chinese: &[S], english: &str) -> Vec<String> {
        self.align_detailed(chinese, english).aligned_sentences
    }

    /// Align and keep every attempt for inspection
    pub fn align_detailed<S: AsRef<str>>(&self, chinese: &[S], english: &str) -> AlignmentReport {
        let start = Instant::now();

        if chinese.is_empty() {
            return AlignmentReport {
                aligned_sentences: Vec::new(),
                chosen_policy: None,
                attempts: Vec::new(),
                processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            };
        }

        let mut attempts = Vec::new();
        let mut next = Some(SegmentationPolicy::Coarse);
        while let Some(policy) = next {
            let attempt = self.attempt(chinese, english, policy);
            let too_few = attempt.english_sentences.len() < chinese.len();
            attempts.push(attempt);
            next = if too_few { policy.finer() } else { None };
        }

        // First minimum wins, so coarser policies take exact ties.
        let mut best = 0;
        for (i, attempt) in attempts.iter().enumerate().skip(1) {
            if attempt.best_score < attempts[best].best_score {
                best = i;
            }
        }
        let chosen = &attempts[best];

        log::log!(
            self.level(),
            "chose {} segmentation with score {} out of {} attempt(s)",
            chosen.policy,
            chosen.best_score,
            attempts.len()
        );

        AlignmentReport {
            aligned_sentences: chosen.aligned_sentences.clone(),
            chosen_policy: Some(chosen.policy),
            attempts,
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }

    /// Run segmentation, generation and scoring under a single policy
    pub fn attempt<S: AsRef<str>>(
        &self,
        chinese: &[S],
        english: &str,
        policy: SegmentationPolicy,
    ) -> AlignmentAttempt {
        let english_sentences = segment_english_sentences(english, policy);
        let num_english = english_sentences.len();
        let num_chinese = chinese.len();

        if num_english == num_chinese {
            log::log!(
                self.level(),
                "{policy}: {num_english} sentences match one to one"
            );
            return AlignmentAttempt {
                policy,
                aligned_sentences: english_sentences.clone(),
                best_partition: Some(Partition::from_sizes(&vec![1; num_english])),
                english_sentences,
                best_score: IDENTITY_SCORE,
                best_score_result: None,
                fast_path: Some(FastPath::EqualCount),
                partitions_generated: 0,
                partitions_scored: 0,
            };
        }

        if num_chinese == 1 {
            log::log!(self.level(), "{policy}: single Chinese sentence takes the paragraph");
            return AlignmentAttempt {
                policy,
                english_sentences,
                aligned_sentences: vec![english.to_string()],
                best_partition: None,
                best_score: SINGLE_CHINESE_SCORE,
                best_score_result: None,
                fast_path: Some(FastPath::SingleChinese),
                partitions_generated: 0,
                partitions_scored: 0,
            };
        }

        let generated = self.generator.generate(num_english, num_chinese);
        let partitions_generated = generated.len();
        let partitions = subsample(generated, self.options.max_partitions);
        let partitions_scored = partitions.len();

        let context = ScoringContext::new(chinese, &english_sentences);
        let best = self.best_partition(&context, &partitions);

        let (aligned_sentences, best_partition, best_score, best_score_result) = match best {
            Some((index, result)) => {
                let partition = partitions[index].clone();
                (
                    partition.render(&english_sentences, num_chinese),
                    Some(partition),
                    result.score,
                    Some(result),
                )
            }
            None => (vec![String::new(); num_chinese], None, f64::INFINITY, None),
        };

        log::log!(
            self.level(),
            "{policy}: {num_english} English / {num_chinese} Chinese sentences, \
             {partitions_scored} of {partitions_generated} partitions scored, best {best_score}"
        );

        AlignmentAttempt {
            policy,
            english_sentences,
            aligned_sentences,
            best_partition,
            best_score,
            best_score_result,
            fast_path: None,
            partitions_generated,
            partitions_scored,
        }
    }

    /// Index and score of the cheapest partition, earliest on ties
    fn best_partition(
        &self,
        context: &ScoringContext,
        partitions: &[Partition],
    ) -> Option<(usize, ScoreResult)> {
        #[cfg(feature = "parallel")]
        {
            if partitions.len() >= self.options.parallel_threshold {
                return partitions
                    .par_iter()
                    .enumerate()
                    .map(|(i, p)| (i, self.scorer.score_in(context, p)))
                    .reduce_with(earlier_minimum);
            }
        }

        partitions
            .iter()
            .enumerate()
            .map(|(i, p)| (i, self.scorer.score_in(context, p)))
            .reduce(earlier_minimum)
    }

    fn level(&self) -> Level {
        if self.options.verbose {
            Level::Info
        } else {
            Level::Debug
        }
    }
}

/// Keep the lower score; on a tie keep the earlier candidate
fn earlier_minimum(a: (usize, ScoreResult), b: (usize, ScoreResult)) -> (usize, ScoreResult) {
    if b.1.score < a.1.score || (b.1.score == a.1.score && b.0 < a.0) {
        b
    } else {
        a
    }
}

/// Keep at most `max` partitions by taking every `len / max`-th one
fn subsample(partitions: Vec<Partition>, max: usize) -> Vec<Partition> {
    if partitions.len() <= max {
        return partitions;
    }
    let stride = partitions.len() / max;
    partitions.into_iter().step_by(stride).take(max).collect()
}

/// Align with default options
pub fn align<S: AsRef<str>>(chinese: &[S], english: &str) -> Vec<String> {
    Aligner::new().align(chinese, english)
}

/// Align with custom options
pub fn align_with_options<S: AsRef<str>>(
    chinese: &[S],
    english: &str,
    options: AlignOptions,
) -> Result<Vec<String>> {
    Ok(Aligner::with_options(options)?.align(chinese, english))
}
