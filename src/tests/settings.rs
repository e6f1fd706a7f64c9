use std::env;
use std::path::PathBuf;
use crate::settings::cfg::{DEFAULT_CATALOG_PATH, DEFAULT_INDEX_BUCKETS};
use crate::settings::Config;
use crate::sort::SortThresholds;

const VARS: [&str; 4] = ["CATALOG_PATH", "INDEX_BUCKETS", "AUTO_SORT_SMALL", "AUTO_SORT_MEDIUM"];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

/// The process environment is shared between test threads, so every case runs in this one test.
#[test]
fn config_from_environment() {
    clear_vars();
    let config = Config::new();
    let defaults = Config::default();
    assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
    assert_eq!(config.catalog_path, defaults.catalog_path);
    assert_eq!(config.index_buckets, DEFAULT_INDEX_BUCKETS);
    assert_eq!(config.sort_thresholds, defaults.sort_thresholds);

    env::set_var("CATALOG_PATH", "/tmp/shop/catalog.json");
    env::set_var("INDEX_BUCKETS", "31");
    env::set_var("AUTO_SORT_SMALL", "5");
    env::set_var("AUTO_SORT_MEDIUM", "50");
    let config = Config::new();
    assert_eq!(config.catalog_path, PathBuf::from("/tmp/shop/catalog.json"));
    assert_eq!(config.index_buckets, 31);
    assert_eq!(config.sort_thresholds, SortThresholds { small: 5, medium: 50 });

    env::set_var("INDEX_BUCKETS", "many");
    assert_eq!(Config::new().index_buckets, DEFAULT_INDEX_BUCKETS);

    env::set_var("INDEX_BUCKETS", "0");
    assert_eq!(Config::new().index_buckets, DEFAULT_INDEX_BUCKETS);

    env::set_var("AUTO_SORT_SMALL", "50");
    env::set_var("AUTO_SORT_MEDIUM", "20");
    assert_eq!(Config::new().sort_thresholds, SortThresholds::default());

    env::set_var("AUTO_SORT_SMALL", "-3");
    env::set_var("AUTO_SORT_MEDIUM", "200");
    assert_eq!(Config::new().sort_thresholds, SortThresholds { small: 10, medium: 200 });

    clear_vars();
}
