pub mod custom_error;

pub use custom_error::{CatalogError, Result};
