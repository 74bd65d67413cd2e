//! Partition value type
//!
//! A partition assigns every English sentence index to exactly one Chinese
//! sentence position. Groups are contiguous, ascending, and appear in
//! paragraph order, so a partition is fully described by its group sizes.
//! Partitions are immutable once built and hash by value, which is what the
//! generator uses to deduplicate candidates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub mod generator;

/// English sentence indices assigned to one Chinese sentence
pub type Group = SmallVec<[usize; 4]>;

/// An order-preserving assignment of English sentences onto Chinese sentences
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition {
    groups: Box<[Group]>,
}

impl Partition {
    /// Build a partition from explicit groups.
    ///
    /// No invariant is checked here; use [`Partition::is_well_formed`] before
    /// trusting a hand-built partition.
    pub fn from_groups(groups: Vec<Group>) -> Self {
        Self {
            groups: groups.into_boxed_slice(),
        }
    }

    /// Build contiguous groups from a list of sizes; a size of zero yields an
    /// empty group.
    pub fn from_sizes(sizes: &[usize]) -> Self {
        let mut next = 0;
        let groups = sizes
            .iter()
            .map(|&size| {
                let group: Group = (next..next + size).collect();
                next += size;
                group
            })
            .collect::<Vec<_>>();
        Self::from_groups(groups)
    }

    /// Number of groups, i.e. Chinese positions covered
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the partition has no groups at all
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All groups in Chinese sentence order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Group at a Chinese position
    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    /// Group sizes in order
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(|g| g.len()).collect()
    }

    /// Number of groups with no English sentence
    pub fn empty_group_count(&self) -> usize {
        self.groups.iter().filter(|g| g.is_empty()).count()
    }

    /// Length of the run of empty groups at the end
    pub fn trailing_empty_run(&self) -> usize {
        self.groups.iter().rev().take_while(|g| g.is_empty()).count()
    }

    /// Check the shape and coverage invariants.
    ///
    /// A well-formed partition has exactly `num_chinese` groups and lists the
    /// indices `0..num_english` exactly once, ascending across the whole
    /// partition.
    pub fn is_well_formed(&self, num_english: usize, num_chinese: usize) -> bool {
        if self.groups.len() != num_chinese {
            return false;
        }
        let mut expected = 0;
        for &index in self.groups.iter().flatten() {
            if index != expected {
                return false;
            }
            expected += 1;
        }
        expected == num_english
    }

    /// Join the English sentences of each group with a single space.
    ///
    /// The output always has `len` entries; positions past the end of the
    /// partition and empty groups become empty strings.
    pub fn render<S: AsRef<str>>(&self, english: &[S], len: usize) -> Vec<String> {
        (0..len)
            .map(|i| match self.groups.get(i) {
                Some(group) => join_group(english, group),
                None => String::new(),
            })
            .collect()
    }
}

impl From<Vec<Vec<usize>>> for Partition {
    fn from(groups: Vec<Vec<usize>>) -> Self {
        Self::from_groups(groups.into_iter().map(Group::from_vec).collect())
    }
}

/// Join the sentences a group points at; unknown indices are skipped
pub(crate) fn join_group<S: AsRef<str>>(english: &[S], group: &[usize]) -> String {
    group
        .iter()
        .filter_map(|&i| english.get(i).map(|s| s.as_ref()))
        .collect::<Vec<&str>>()
        .join(" ")
}
