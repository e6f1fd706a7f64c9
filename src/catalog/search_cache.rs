use ahash::{HashMap, HashMapExt};
use crate::scheme::Product;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub total: u64,
    /// Percentage of lookups answered from the cache, `0.0` before the first lookup.
    pub hit_rate: f64,
    pub entries: usize,
}

/// Name-search results keyed by the lowercased query.
pub struct SearchCache {
    entries: HashMap<String, Vec<Product>>,
    hits: u64,
    misses: u64,
}

impl SearchCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get(&mut self, query: &str) -> Option<&[Product]> {
        match self.entries.get(&query.to_lowercase()) {
            Some(products) => {
                self.hits += 1;
                Some(products.as_slice())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, query: &str, products: Vec<Product>) {
        self.entries.insert(query.to_lowercase(), products);
    }

    /// Drops every cached result. Hit and miss counters survive.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        let total = self.hits + self.misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        };
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            total,
            hit_rate,
            entries: self.entries.len(),
        }
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new()
    }
}
