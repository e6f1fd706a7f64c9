pub mod search_result;
pub mod sequential;
pub mod binary;

pub use search_result::SearchResult;
pub use sequential::{contains_search, sequential_search};
pub use binary::{binary_search, range_search};
