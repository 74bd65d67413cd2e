//! English sentence segmentation
//!
//! Splits a paragraph into candidate sentences. The split points are
//! deliberately shallow: a run of `.`, `!` or `?` ends a sentence only when
//! the next word is capitalised or the text ends there, which keeps most
//! abbreviations and decimals intact without any dictionary.

use crate::error::AlignError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Terminator runs only
static COARSE_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("coarse delimiter regex"));

/// Terminator runs plus semicolons
static MEDIUM_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+|;").expect("medium delimiter regex"));

/// Terminator runs plus semicolons and commas
static FINE_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+|[;,]").expect("fine delimiter regex"));

/// Punctuation policy controlling which marks terminate an English sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationPolicy {
    /// `.`, `!`, `?`
    Coarse,
    /// Coarse plus `;`
    Medium,
    /// Medium plus `,`
    Fine,
}

impl SegmentationPolicy {
    /// All policies, least aggressive first
    pub const ESCALATION: [SegmentationPolicy; 3] = [
        SegmentationPolicy::Coarse,
        SegmentationPolicy::Medium,
        SegmentationPolicy::Fine,
    ];

    /// Get the policy name
    pub fn name(&self) -> &'static str {
        match self {
            SegmentationPolicy::Coarse => "coarse",
            SegmentationPolicy::Medium => "medium",
            SegmentationPolicy::Fine => "fine",
        }
    }

    /// The next, finer policy, if any
    pub fn finer(&self) -> Option<SegmentationPolicy> {
        match self {
            SegmentationPolicy::Coarse => Some(SegmentationPolicy::Medium),
            SegmentationPolicy::Medium => Some(SegmentationPolicy::Fine),
            SegmentationPolicy::Fine => None,
        }
    }

    fn delimiters(&self) -> &'static Regex {
        match self {
            SegmentationPolicy::Coarse => &COARSE_DELIMITERS,
            SegmentationPolicy::Medium => &MEDIUM_DELIMITERS,
            SegmentationPolicy::Fine => &FINE_DELIMITERS,
        }
    }
}

impl fmt::Display for SegmentationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SegmentationPolicy {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coarse" => Ok(SegmentationPolicy::Coarse),
            "medium" => Ok(SegmentationPolicy::Medium),
            "fine" => Ok(SegmentationPolicy::Fine),
            _ => Err(AlignError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Split `text` into trimmed, non-empty sentences under `policy`.
///
/// Delimiters stay attached to the sentence they close. Text after the last
/// accepted delimiter becomes the final sentence. Empty or whitespace-only
/// input yields an empty list.
pub fn segment_english_sentences(text: &str, policy: SegmentationPolicy) -> Vec<String> {
    let mut sentences = Vec::new();
    if text.trim().is_empty() {
        return sentences;
    }

    let mut start = 0;
    for m in policy.delimiters().find_iter(text) {
        if !closes_sentence(m.as_str(), &text[m.end()..]) {
            continue;
        }
        push_trimmed(&mut sentences, &text[start..m.end()]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

/// Decide whether a delimiter match ends a sentence given the text after it
fn closes_sentence(delimiter: &str, rest: &str) -> bool {
    let starts_with_space = rest.chars().next().is_some_and(char::is_whitespace);

    match delimiter {
        ";" | "," => starts_with_space,
        _ => {
            if rest.trim().is_empty() {
                return true;
            }
            starts_with_space
                && rest
                    .trim_start()
                    .chars()
                    .next()
                    .is_some_and(char::is_uppercase)
        }
    }
}

fn push_trimmed(sentences: &mut Vec<String>, segment: &str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        sentences.push(segment.to_string());
    }
}
