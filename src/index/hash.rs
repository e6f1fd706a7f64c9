use crate::index::index::{BucketKey, Index, DEFAULT_BUCKET_COUNT};

/// Hash table with a fixed number of buckets, collisions resolved by chaining.
///
/// The bucket count never changes after construction: there is no rehashing, so lookups
/// degrade towards O(n) as the load factor grows. [`ChainedHashTable::load_factor`] and
/// [`ChainedHashTable::longest_chain`] let the caller watch for that.
#[derive(Debug, Clone)]
pub struct ChainedHashTable<K, V>
    where K: BucketKey + Eq
{
    buckets: Box<[Vec<(K, V)>]>,
    len: usize,
}

impl<K, V> ChainedHashTable<K, V>
    where K: BucketKey + Eq
{
    /// A bucket count of zero is treated as one.
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        let mut vec = Vec::with_capacity(bucket_count);
        for _ in 0..bucket_count {
            vec.push(Vec::new());
        }
        Self {
            buckets: vec.into_boxed_slice(),
            len: 0,
        }
    }

    #[inline(always)]
    fn get_number(&self, key: &K) -> usize {
        key.bucket(self.buckets.len())
    }

    #[inline(always)]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Entries in bucket order, chain order within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets.iter().flat_map(|chain| chain.iter().map(|(k, v)| (k, v)))
    }
}

impl<K, V> Default for ChainedHashTable<K, V>
    where K: BucketKey + Eq
{
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_COUNT)
    }
}

impl<K, V> Index<K, V> for ChainedHashTable<K, V>
    where K: BucketKey + Eq
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        let number = self.get_number(&key);
        let chain = &mut self.buckets[number];
        if let Some(entry) = chain.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut entry.1, value));
        }
        chain.push((key, value));
        self.len += 1;
        None
    }

    fn find(&self, key: &K) -> Option<&V> {
        self.buckets[self.get_number(key)]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let number = self.get_number(key);
        self.buckets[number]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn delete(&mut self, key: &K) -> bool {
        let number = self.get_number(key);
        let chain = &mut self.buckets[number];
        let Some(position) = chain.iter().position(|(k, _)| k == key) else {
            return false;
        };
        // `remove`, not `swap_remove`: the chain keeps insertion order.
        chain.remove(position);
        self.len -= 1;
        true
    }

    #[inline(always)]
    fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.len = 0;
    }

    #[inline(always)]
    fn count(&self) -> usize {
        self.len
    }

    fn for_each<F>(&self, mut f: F)
        where F: FnMut(&K, &V)
    {
        for (k, v) in self.iter() {
            f(k, v);
        }
    }
}
