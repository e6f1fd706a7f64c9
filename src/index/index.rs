use crate::utils::hash::get_hash;

pub trait Index<K, V> {
    /// Inserts a key-value pair. An existing key keeps its slot and gets the new value.
    ///
    /// Returns the replaced value, if any.
    fn insert(&mut self, key: K, value: V) -> Option<V>;
    fn find(&self, key: &K) -> Option<&V>;
    fn find_mut(&mut self, key: &K) -> Option<&mut V>;
    /// Removes a single entry.
    ///
    /// Returns `true` if the key was present, `false` otherwise.
    fn delete(&mut self, key: &K) -> bool;
    fn contains(&self, key: &K) -> bool;
    fn clear(&mut self);
    fn count(&self) -> usize;
    fn for_each<F>(&self, f: F) where F: FnMut(&K, &V);
}

/// Maps a key onto one of `bucket_count` buckets.
pub trait BucketKey {
    fn bucket(&self, bucket_count: usize) -> usize;
}

macro_rules! impl_bucket_key_unsigned {
    ($($t:ty),*) => {
        $(impl BucketKey for $t {
            #[inline(always)]
            fn bucket(&self, bucket_count: usize) -> usize {
                (*self as u64 % bucket_count as u64) as usize
            }
        })*
    };
}

macro_rules! impl_bucket_key_signed {
    ($($t:ty),*) => {
        $(impl BucketKey for $t {
            #[inline(always)]
            fn bucket(&self, bucket_count: usize) -> usize {
                (*self as i64).rem_euclid(bucket_count as i64) as usize
            }
        })*
    };
}

impl_bucket_key_unsigned!(u8, u16, u32, u64, usize);
impl_bucket_key_signed!(i8, i16, i32, i64, isize);

impl BucketKey for str {
    #[inline(always)]
    fn bucket(&self, bucket_count: usize) -> usize {
        (get_hash(self.as_bytes()) % bucket_count as u64) as usize
    }
}

impl BucketKey for String {
    #[inline(always)]
    fn bucket(&self, bucket_count: usize) -> usize {
        self.as_str().bucket(bucket_count)
    }
}

impl<T: BucketKey + ?Sized> BucketKey for &T {
    #[inline(always)]
    fn bucket(&self, bucket_count: usize) -> usize {
        (**self).bucket(bucket_count)
    }
}

pub const DEFAULT_BUCKET_COUNT: usize = 11;
