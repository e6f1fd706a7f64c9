use crate::catalog::search_cache::{CacheStats, SearchCache};
use crate::disk_storage::RecordSource;
use crate::error::Result;
use crate::index::{ChainedHashTable, Index};
use crate::info;
use crate::scheme::{Product, ProductField};
use crate::search::{binary_search, contains_search, range_search, SearchResult};
use crate::settings::cfg::DEFAULT_INDEX_BUCKETS;
use crate::sort::{shell_sort, SortAlgorithm, SortOrder, SortThresholds};

/// The shop's products: an ordered list for listings plus an id index for lookups.
///
/// The list and the index always hold the same set of products.
pub struct Catalog {
    products: Vec<Product>,
    index: ChainedHashTable<u32, Product>,
    cache: SearchCache,
    thresholds: SortThresholds,
}

impl Catalog {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            products: Vec::new(),
            index: ChainedHashTable::new(bucket_count),
            cache: SearchCache::new(),
            thresholds: SortThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: SortThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn from_source<S: RecordSource>(source: &S, bucket_count: usize) -> Result<Self> {
        let mut catalog = Self::new(bucket_count);
        for product in source.load()? {
            catalog.add(product);
        }
        Ok(catalog)
    }

    pub fn dump_to<S: RecordSource>(&self, source: &S) -> Result<()> {
        source.save(&self.products)
    }

    /// Adds a product, replacing the one with the same id in place.
    ///
    /// Returns the replaced product, if any.
    pub fn add(&mut self, product: Product) -> Option<Product> {
        self.cache.clear();
        let replaced = self.index.insert(product.id, product.clone());
        if replaced.is_some() {
            if let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) {
                *slot = product;
            }
        } else {
            info!("Product {} added to the catalog", product.id);
            self.products.push(product);
        }
        replaced
    }

    pub fn remove(&mut self, id: u32) -> Option<Product> {
        if !self.index.delete(&id) {
            return None;
        }
        self.cache.clear();
        let position = self.products.iter().position(|p| p.id == id)?;
        info!("Product {} removed from the catalog", id);
        Some(self.products.remove(position))
    }

    #[inline(always)]
    pub fn find_by_id(&self, id: u32) -> Option<&Product> {
        self.index.find(&id)
    }

    #[inline(always)]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.products
            .iter()
            .filter_map(|p| p.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        let category = category.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.category.as_ref().is_some_and(|c| c.to_lowercase() == category))
            .collect()
    }

    /// Products whose name contains `fragment`. Repeated queries are answered from the cache.
    pub fn search_by_name(&mut self, fragment: &str) -> Vec<Product> {
        if let Some(cached) = self.cache.get(fragment) {
            return cached.to_vec();
        }
        let found: Vec<Product> = contains_search(&self.products, fragment, Product::name)
            .into_iter()
            .cloned()
            .collect();
        self.cache.insert(fragment, found.clone());
        found
    }

    /// Exact, case-insensitive name lookup by binary search over a name-sorted copy.
    pub fn find_by_name(&self, name: &str) -> (SearchResult, Option<Product>) {
        let sorted = shell_sort(&self.products, |p| p.name.to_lowercase());
        let result = binary_search(&sorted, name, Product::name);
        let product = result.index.map(|i| sorted[i].clone());
        (result, product)
    }

    pub fn price_range(&self, min: f64, max: f64) -> Vec<Product> {
        let sorted = shell_sort(&self.products, |p| p.price);
        range_search(&sorted, min, max, |p| p.price)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn sorted_by(&self, field: ProductField, order: SortOrder) -> (SortAlgorithm, Vec<Product>) {
        let algorithm = SortAlgorithm::for_len(self.products.len(), self.thresholds);
        let sorted = algorithm.sort_by_order(&self.products, |p| field.sort_key(p), order);
        (algorithm, sorted)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    #[inline(always)]
    pub fn index_load_factor(&self) -> f64 {
        self.index.load_factor()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_BUCKETS)
    }
}
