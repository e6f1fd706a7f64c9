//! Catalog core for a sticker and vinyl shop: a fixed-bucket chained hash table, sequential
//! and binary search with step counts, and selection/shell/quick sorts over any record type
//! through a key-extraction closure. The `catalog` and `orders` modules compose them into the
//! shop's product store, cart and order queue.

#[doc(hidden)]
pub use colored;

#[macro_use]
pub mod console;
pub mod error;
mod utils;
pub mod index;
pub mod search;
pub mod sort;
pub mod scheme;
pub mod catalog;
pub mod disk_storage;
pub mod orders;
pub mod settings;

#[cfg(test)]
mod tests;
