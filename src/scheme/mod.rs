pub mod product;
pub mod field_info;

pub use product::{default_products, Product};
pub use field_info::{FieldValue, ProductField};
