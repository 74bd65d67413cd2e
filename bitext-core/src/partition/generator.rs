//! Candidate partition generation
//!
//! The space of order-preserving partitions grows combinatorially with the
//! sentence counts, so the generator never enumerates it. Instead a handful
//! of strategies each contribute a few shaped or sampled candidates, all of
//! them deduplicated by value and bounded by a cap.
//!
//! Sampling draws from a ChaCha stream seeded per call, so identical inputs
//! always yield identical candidate sets.

use super::Partition;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Default bound on the number of candidates per call
pub const DEFAULT_GENERATOR_CAP: usize = 1000;

/// Default sampling seed
pub const DEFAULT_SEED: u64 = 0x5EED_A11C;

/// Attempts for the merged-groups strategy
const MERGE_ATTEMPTS: usize = 10;

/// Attempts for the random strategy
const RANDOM_ATTEMPTS: usize = 50;

/// Front-loaded groups take this multiple of the remaining average
const FRONT_LOAD_FACTOR: f64 = 1.6;

/// Back-loaded groups take this multiple of the remaining average
const BACK_LOAD_FACTOR: f64 = 0.4;

/// Strategy that produced a candidate, used for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Fewer English sentences: empty groups at the end
    SkipAtEnd,
    /// Fewer English sentences: empty groups at the start
    SkipAtStart,
    /// Fewer English sentences: a contiguous run of empty groups inside
    SkipInMiddle,
    /// Fewer English sentences: adjacent sentences merged into one group
    MergedGroups,
    /// Sizes as even as possible
    Equal,
    /// Larger groups first
    FrontLoaded,
    /// Smaller groups first, the last group takes the rest
    BackLoaded,
    /// Uniformly sampled sizes
    Random,
}

/// Generates bounded, deduplicated sets of well-formed partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionGenerator {
    cap: usize,
    seed: u64,
}

impl Default for PartitionGenerator {
    fn default() -> Self {
        Self {
            cap: DEFAULT_GENERATOR_CAP,
            seed: DEFAULT_SEED,
        }
    }
}

impl PartitionGenerator {
    /// Create a generator with the given cap and the default seed
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            seed: DEFAULT_SEED,
        }
    }

    /// Use a different sampling seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generate candidate partitions of `num_english` sentences onto
    /// `num_chinese` positions.
    ///
    /// Every returned partition has exactly `num_chinese` groups and places
    /// each English index exactly once, in order. Candidates are returned in
    /// the order they were first produced.
    pub fn generate(&self, num_english: usize, num_chinese: usize) -> Vec<Partition> {
        if num_chinese == 0 {
            return Vec::new();
        }
        if num_chinese == 1 {
            return vec![Partition::from_sizes(&[num_english])];
        }
        if num_english == 0 {
            return Vec::new();
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut candidates = CandidateSet::new(num_english, num_chinese, self.cap);

        if num_english < num_chinese {
            generate_with_gaps(&mut candidates, &mut rng);
        } else {
            generate_covering(&mut candidates, &mut rng);
        }

        log::trace!(
            "generated {} partitions for {} English / {} Chinese sentences ({} malformed discarded)",
            candidates.ordered.len(),
            num_english,
            num_chinese,
            candidates.discarded
        );
        candidates.ordered
    }
}

/// Insertion-ordered, deduplicated, capped collection of valid candidates
struct CandidateSet {
    num_english: usize,
    num_chinese: usize,
    cap: usize,
    seen: HashSet<Partition>,
    ordered: Vec<Partition>,
    discarded: usize,
}

impl CandidateSet {
    fn new(num_english: usize, num_chinese: usize, cap: usize) -> Self {
        Self {
            num_english,
            num_chinese,
            cap,
            seen: HashSet::new(),
            ordered: Vec::new(),
            discarded: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.cap.saturating_sub(self.ordered.len())
    }

    /// Add a candidate built from group sizes; malformed or duplicate sizes
    /// are dropped.
    fn offer(&mut self, strategy: Strategy, sizes: Option<Vec<usize>>) {
        if self.remaining() == 0 {
            return;
        }
        let Some(sizes) = sizes else {
            self.discarded += 1;
            log::trace!("{strategy:?}: sizing did not cover every sentence");
            return;
        };
        let partition = Partition::from_sizes(&sizes);
        if !partition.is_well_formed(self.num_english, self.num_chinese) {
            self.discarded += 1;
            log::trace!("{strategy:?}: discarded malformed sizes {sizes:?}");
            return;
        }
        if self.seen.insert(partition.clone()) {
            self.ordered.push(partition);
        }
    }
}

/// Case where some Chinese sentences must stay unmapped
fn generate_with_gaps(candidates: &mut CandidateSet, rng: &mut ChaCha8Rng) {
    let num_english = candidates.num_english;
    let num_chinese = candidates.num_chinese;
    let gap = num_chinese - num_english;

    candidates.offer(Strategy::SkipAtEnd, Some(gap_sizes(num_english, gap, num_english)));
    candidates.offer(Strategy::SkipAtStart, Some(gap_sizes(num_english, gap, 0)));
    for start in 1..num_english {
        if candidates.remaining() == 0 {
            break;
        }
        candidates.offer(Strategy::SkipInMiddle, Some(gap_sizes(num_english, gap, start)));
    }

    // Each merge frees one more Chinese position, which lands at the end.
    let merges = gap.min(num_english / 2);
    if merges == 0 {
        return;
    }
    let filled = num_english - merges;
    let attempts = MERGE_ATTEMPTS.min(candidates.remaining());
    for attempt in 0..attempts {
        let merged: Vec<usize> = if attempt == 0 {
            (0..merges).collect()
        } else {
            index::sample(rng, filled, merges).into_vec()
        };
        candidates.offer(
            Strategy::MergedGroups,
            Some(merged_sizes(filled, num_chinese, &merged)),
        );
    }
}

/// One sentence per group with `gap` empty groups starting at `start`
fn gap_sizes(num_english: usize, gap: usize, start: usize) -> Vec<usize> {
    let mut sizes = vec![1; start];
    sizes.extend(std::iter::repeat(0).take(gap));
    sizes.extend(std::iter::repeat(1).take(num_english - start));
    sizes
}

/// `filled` leading groups, two sentences in each merged one, then empties
fn merged_sizes(filled: usize, num_chinese: usize, merged: &[usize]) -> Vec<usize> {
    let mut sizes: Vec<usize> = (0..filled)
        .map(|group| if merged.contains(&group) { 2 } else { 1 })
        .collect();
    sizes.resize(num_chinese, 0);
    sizes
}

/// Case where every Chinese sentence receives at least one English sentence
fn generate_covering(candidates: &mut CandidateSet, rng: &mut ChaCha8Rng) {
    let num_english = candidates.num_english;
    let num_chinese = candidates.num_chinese;

    candidates.offer(Strategy::Equal, Some(equal_sizes(num_english, num_chinese)));
    candidates.offer(
        Strategy::FrontLoaded,
        front_loaded_sizes(num_english, num_chinese),
    );
    candidates.offer(
        Strategy::BackLoaded,
        back_loaded_sizes(num_english, num_chinese),
    );

    let attempts = RANDOM_ATTEMPTS.min(candidates.remaining());
    for _ in 0..attempts {
        candidates.offer(
            Strategy::Random,
            random_sizes(num_english, num_chinese, rng),
        );
    }
}

/// Even split, remainder spread over the earliest groups
fn equal_sizes(num_english: usize, num_chinese: usize) -> Vec<usize> {
    let base = num_english / num_chinese;
    let extra = num_english % num_chinese;
    (0..num_chinese)
        .map(|i| base + usize::from(i < extra))
        .collect()
}

/// Each group takes a rounded share of the remaining average; the last group
/// takes the plain average, which is whatever is left.
fn front_loaded_sizes(num_english: usize, num_chinese: usize) -> Option<Vec<usize>> {
    let mut remaining = num_english;
    let mut sizes = Vec::with_capacity(num_chinese);
    for i in 0..num_chinese {
        let remaining_chinese = num_chinese - i;
        let average = remaining as f64 / remaining_chinese as f64;
        let factor = if remaining_chinese == 1 {
            1.0
        } else {
            FRONT_LOAD_FACTOR
        };
        let size = (average * factor).round() as usize;
        if size == 0 || size > remaining {
            return None;
        }
        sizes.push(size);
        remaining -= size;
    }
    (remaining == 0).then_some(sizes)
}

/// Small leading groups; the last group absorbs everything left
fn back_loaded_sizes(num_english: usize, num_chinese: usize) -> Option<Vec<usize>> {
    let mut remaining = num_english;
    let mut sizes = Vec::with_capacity(num_chinese);
    for i in 0..num_chinese - 1 {
        let remaining_chinese = num_chinese - i;
        let average = remaining as f64 / remaining_chinese as f64;
        let size = (average * BACK_LOAD_FACTOR).ceil() as usize;
        if size == 0 || size > remaining {
            return None;
        }
        sizes.push(size);
        remaining -= size;
    }
    if remaining == 0 {
        return None;
    }
    sizes.push(remaining);
    Some(sizes)
}

/// Uniform sizes that always leave at least one sentence per later group
fn random_sizes(
    num_english: usize,
    num_chinese: usize,
    rng: &mut ChaCha8Rng,
) -> Option<Vec<usize>> {
    let mut remaining = num_english;
    let mut sizes = Vec::with_capacity(num_chinese);
    for i in 0..num_chinese - 1 {
        let remaining_chinese = num_chinese - i;
        let max = (remaining + 1).checked_sub(remaining_chinese)?;
        if max == 0 {
            return None;
        }
        let size = rng.gen_range(1..=max);
        sizes.push(size);
        remaining -= size;
    }
    if remaining == 0 {
        return None;
    }
    sizes.push(remaining);
    Some(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all_well_formed(partitions: &[Partition], num_english: usize, num_chinese: usize) {
        for partition in partitions {
            assert!(
                partition.is_well_formed(num_english, num_chinese),
                "malformed partition {partition:?} for {num_english}/{num_chinese}"
            );
        }
    }

    #[test]
    fn test_no_chinese_sentences() {
        let generator = PartitionGenerator::default();
        assert!(generator.generate(0, 0).is_empty());
        assert!(generator.generate(5, 0).is_empty());
    }

    #[test]
    fn test_single_chinese_sentence_takes_everything() {
        let generator = PartitionGenerator::default();
        assert_eq!(
            generator.generate(3, 1),
            vec![Partition::from(vec![vec![0, 1, 2]])]
        );
        assert_eq!(generator.generate(0, 1), vec![Partition::from_sizes(&[0])]);
    }

    #[test]
    fn test_no_english_sentences() {
        assert!(PartitionGenerator::default().generate(0, 3).is_empty());
    }

    #[test]
    fn test_gap_case_strategies() {
        let partitions = PartitionGenerator::default().generate(2, 3);
        assert_eq!(
            partitions,
            vec![
                Partition::from_sizes(&[1, 1, 0]),
                Partition::from_sizes(&[0, 1, 1]),
                Partition::from_sizes(&[1, 0, 1]),
                Partition::from_sizes(&[2, 0, 0]),
            ]
        );
    }

    #[test]
    fn test_gap_case_without_possible_merge() {
        let partitions = PartitionGenerator::default().generate(1, 4);
        assert_eq!(
            partitions,
            vec![
                Partition::from_sizes(&[1, 0, 0, 0]),
                Partition::from_sizes(&[0, 0, 0, 1]),
            ]
        );
    }

    #[test]
    fn test_gap_case_middle_positions() {
        let partitions = PartitionGenerator::default().generate(4, 6);
        assert_all_well_formed(&partitions, 4, 6);
        for start in 1..4 {
            let expected = gap_sizes(4, 2, start);
            assert!(partitions.contains(&Partition::from_sizes(&expected)));
        }
        assert!(partitions.contains(&Partition::from_sizes(&[2, 2, 0, 0, 0, 0])));
    }

    #[test]
    fn test_covering_case_shaped_strategies() {
        assert_eq!(equal_sizes(7, 3), vec![3, 2, 2]);
        assert_eq!(equal_sizes(6, 3), vec![2, 2, 2]);
        assert_eq!(front_loaded_sizes(10, 2), Some(vec![8, 2]));
        assert_eq!(front_loaded_sizes(12, 3), Some(vec![6, 5, 1]));
        assert_eq!(front_loaded_sizes(5, 3), None);
        assert_eq!(back_loaded_sizes(5, 2), Some(vec![1, 4]));
        assert_eq!(back_loaded_sizes(10, 3), Some(vec![2, 2, 6]));
    }

    #[test]
    fn test_covering_case_finds_every_split_of_two() {
        let partitions = PartitionGenerator::default().generate(5, 2);
        assert_all_well_formed(&partitions, 5, 2);
        assert_eq!(partitions.len(), 4);
        assert_eq!(partitions[0], Partition::from_sizes(&[3, 2]));
        for first in 1..=4 {
            assert!(partitions.contains(&Partition::from_sizes(&[first, 5 - first])));
        }
    }

    #[test]
    fn test_covering_groups_are_never_empty() {
        let partitions = PartitionGenerator::default().generate(9, 4);
        assert_all_well_formed(&partitions, 9, 4);
        assert!(partitions.iter().all(|p| p.empty_group_count() == 0));
    }

    #[test]
    fn test_cap_bounds_output() {
        let partitions = PartitionGenerator::new(5).generate(30, 10);
        assert_eq!(partitions.len(), 5);
        assert_all_well_formed(&partitions, 30, 10);

        let partitions = PartitionGenerator::new(3).generate(5, 12);
        assert_eq!(partitions.len(), 3);
        assert_all_well_formed(&partitions, 5, 12);
    }

    #[test]
    fn test_same_seed_same_candidates() {
        let a = PartitionGenerator::default().with_seed(7).generate(20, 6);
        let b = PartitionGenerator::default().with_seed(7).generate(20, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_candidates_are_distinct() {
        let partitions = PartitionGenerator::default().generate(15, 5);
        let unique: HashSet<_> = partitions.iter().collect();
        assert_eq!(unique.len(), partitions.len());
    }
}
