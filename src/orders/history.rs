use chrono::Local;
use crate::orders::order::DATE_FORMAT;

/// Stack of timestamped actions, newest on top.
#[derive(Debug, Default)]
pub struct ActionHistory {
    actions: Vec<String>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn record(&mut self, action: &str) {
        let timestamp = Local::now().format(DATE_FORMAT);
        self.actions.push(format!("[{}] {}", timestamp, action));
    }

    /// Up to `n` actions, newest first.
    pub fn latest(&self, n: usize) -> impl Iterator<Item = &str> {
        self.actions.iter().rev().take(n).map(String::as_str)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
