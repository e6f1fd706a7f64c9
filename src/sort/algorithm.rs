use std::fmt;
use crate::sort::{quick_sort, selection_sort, shell_sort};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Selection,
    Shell,
    Quick,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [SortAlgorithm::Selection, SortAlgorithm::Shell, SortAlgorithm::Quick];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Size limits used by [`auto_select_with`]: up to `small` records use selection sort,
/// up to `medium` use shell sort, anything larger uses quicksort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortThresholds {
    pub small: usize,
    pub medium: usize,
}

impl Default for SortThresholds {
    fn default() -> Self {
        Self { small: 10, medium: 100 }
    }
}

impl SortAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Shell => "Shell Sort",
            SortAlgorithm::Quick => "Quick Sort",
        }
    }

    pub fn complexity(&self) -> &'static str {
        match self {
            SortAlgorithm::Selection => "O(n²)",
            SortAlgorithm::Shell | SortAlgorithm::Quick => "O(n log n)",
        }
    }

    pub fn for_len(len: usize, thresholds: SortThresholds) -> Self {
        if len <= thresholds.small {
            SortAlgorithm::Selection
        } else if len <= thresholds.medium {
            SortAlgorithm::Shell
        } else {
            SortAlgorithm::Quick
        }
    }

    pub fn sort<T, K, F>(&self, records: &[T], key: F) -> Vec<T>
        where T: Clone, K: PartialOrd, F: Fn(&T) -> K
    {
        match self {
            SortAlgorithm::Selection => selection_sort(records, key),
            SortAlgorithm::Shell => shell_sort(records, key),
            SortAlgorithm::Quick => quick_sort(records, key),
        }
    }

    /// Descending output is the ascending output reversed, so equal keys come out in
    /// the reverse of their ascending order.
    pub fn sort_by_order<T, K, F>(&self, records: &[T], key: F, order: SortOrder) -> Vec<T>
        where T: Clone, K: PartialOrd, F: Fn(&T) -> K
    {
        let mut sorted = self.sort(records, key);
        if order == SortOrder::Descending {
            sorted.reverse();
        }
        sorted
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Picks the algorithm by input size with the default thresholds (10 and 100).
pub fn auto_select<T, K, F>(records: &[T], key: F) -> (SortAlgorithm, Vec<T>)
    where T: Clone, K: PartialOrd, F: Fn(&T) -> K
{
    auto_select_with(records, key, SortThresholds::default())
}

pub fn auto_select_with<T, K, F>(records: &[T], key: F, thresholds: SortThresholds) -> (SortAlgorithm, Vec<T>)
    where T: Clone, K: PartialOrd, F: Fn(&T) -> K
{
    let algorithm = SortAlgorithm::for_len(records.len(), thresholds);
    (algorithm, algorithm.sort(records, key))
}
