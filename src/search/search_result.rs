/// Outcome of a search together with its cost.
///
/// `index` is `None` when the target is absent; `steps` is the number of comparisons made
/// either way, so algorithms can be compared by work done and not only by correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub index: Option<usize>,
    pub steps: usize,
}

impl SearchResult {
    #[inline(always)]
    pub fn found(index: usize, steps: usize) -> Self {
        Self { index: Some(index), steps }
    }

    #[inline(always)]
    pub fn not_found(steps: usize) -> Self {
        Self { index: None, steps }
    }

    #[inline(always)]
    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }
}
