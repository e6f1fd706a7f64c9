use std::time::{Duration, Instant};
use crate::sort::{SortAlgorithm, ALL_ALGORITHMS};

#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub algorithm: SortAlgorithm,
    pub elapsed: Duration,
}

impl Timing {
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs every algorithm over the same input and returns the timings, fastest first.
pub fn compare_algorithms<T, K, F>(records: &[T], key: F) -> Vec<Timing>
    where T: Clone, K: PartialOrd, F: Fn(&T) -> K
{
    let mut timings = Vec::with_capacity(ALL_ALGORITHMS.len());
    for algorithm in ALL_ALGORITHMS {
        let start = Instant::now();
        let _ = std::hint::black_box(algorithm.sort(records, &key));
        let elapsed = start.elapsed();
        timings.push(Timing { algorithm, elapsed });
    }
    timings.sort_by_key(|timing| timing.elapsed);
    timings
}
