pub mod selection;
pub mod shell;
pub mod quick;
pub mod algorithm;
pub mod bench;

pub use selection::selection_sort;
pub use shell::shell_sort;
pub use quick::quick_sort;
pub use algorithm::{auto_select, auto_select_with, SortAlgorithm, SortOrder, SortThresholds, ALL_ALGORITHMS};
pub use bench::{compare_algorithms, Timing};
