use std::env;
use std::path::PathBuf;
use crate::sort::SortThresholds;
use crate::{info, warn};

pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";
pub const DEFAULT_INDEX_BUCKETS: usize = 13;

pub struct Config {
    pub catalog_path: PathBuf,
    pub index_buckets: usize,
    pub sort_thresholds: SortThresholds,
}

impl Config {
    pub fn new() -> Self {
        let catalog_path = match env::var("CATALOG_PATH") {
            Ok(value) => {
                info!("The catalog path was set to: {} using the environment variable \"CATALOG_PATH\"", value);
                PathBuf::from(value)
            },
            Err(_) => {
                info!("The catalog path was not set using the environment variable \"CATALOG_PATH\", setting it to \"{}\"", DEFAULT_CATALOG_PATH);
                PathBuf::from(DEFAULT_CATALOG_PATH)
            }
        };

        let index_buckets = read_positive("INDEX_BUCKETS", "number of index buckets", DEFAULT_INDEX_BUCKETS);

        let defaults = SortThresholds::default();
        let small = read_positive("AUTO_SORT_SMALL", "selection sort limit", defaults.small);
        let medium = read_positive("AUTO_SORT_MEDIUM", "shell sort limit", defaults.medium);
        let sort_thresholds = if small > medium {
            warn!("The selection sort limit ({}) is above the shell sort limit ({}), using the defaults", small, medium);
            defaults
        } else {
            SortThresholds { small, medium }
        };

        Self { catalog_path, index_buckets, sort_thresholds }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            index_buckets: DEFAULT_INDEX_BUCKETS,
            sort_thresholds: SortThresholds::default(),
        }
    }
}

fn read_positive(var: &str, what: &str, default: usize) -> usize {
    match env::var(var) {
        Ok(value) => match value.trim().parse::<usize>() {
            Ok(parsed) if parsed > 0 => {
                info!("The {} was set to: {} using the environment variable \"{}\"", what, parsed, var);
                parsed
            },
            _ => {
                warn!("The environment variable \"{}\" must be a positive number, got \"{}\". Setting the {} to {}", var, value, what, default);
                default
            }
        },
        Err(_) => {
            info!("The {} was not set using the environment variable \"{}\", setting it to {}", what, var, default);
            default
        }
    }
}
