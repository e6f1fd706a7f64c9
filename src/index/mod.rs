pub mod index;
pub mod hash;

pub use index::{BucketKey, Index, DEFAULT_BUCKET_COUNT};
pub use hash::ChainedHashTable;
