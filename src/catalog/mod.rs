pub mod catalog;
pub mod customers;
pub mod search_cache;

pub use catalog::Catalog;
pub use customers::{CustomerDirectory, RegisteredCustomer};
pub use search_cache::{CacheStats, SearchCache};
