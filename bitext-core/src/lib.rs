//! Chinese-English sentence alignment
//!
//! Given the sentences of a Chinese paragraph and the raw text of its English
//! translation, this crate finds the assignment of English sentences onto
//! Chinese sentences that best keeps a one-to-one correspondence.
//!
//! The pipeline runs in four stages:
//!
//! 1. [`segmenter`] splits the English paragraph under a punctuation policy.
//! 2. [`partition::generator`] samples order-preserving partitions of the
//!    English sentences onto the Chinese ones.
//! 3. [`scorer`] assigns each partition a lower-is-better cost.
//! 4. [`selector`] escalates through policies and keeps the cheapest result.
//!
//! ```
//! use bitext_core::align;
//!
//! let aligned = align(&["句子一。", "句子二。"], "Sentence one. Sentence two.");
//! assert_eq!(aligned, vec!["Sentence one.", "Sentence two."]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod partition;
pub mod scorer;
pub mod segmenter;
pub mod selector;
pub mod text;

// Re-export key types
pub use config::{AlignOptions, AlignOptionsBuilder};
pub use error::{AlignError, Result};
pub use partition::{generator::PartitionGenerator, Group, Partition};
pub use scorer::{PartitionScorer, ScoreResult, ScoringWeights};
pub use segmenter::{segment_english_sentences, SegmentationPolicy};
pub use selector::{
    align, align_with_options, Aligner, AlignmentAttempt, AlignmentReport, FastPath,
};
pub use text::{count_chinese_han_chars, count_english_words};
