pub mod cfg;

pub use cfg::Config;
