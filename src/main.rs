use std::env;
use std::process;
use vinyl_catalog::catalog::Catalog;
use vinyl_catalog::console::start_message;
use vinyl_catalog::disk_storage::JsonFileSource;
use vinyl_catalog::error::Result;
use vinyl_catalog::orders::ActionHistory;
use vinyl_catalog::scheme::{default_products, ProductField};
use vinyl_catalog::settings::Config;
use vinyl_catalog::sort::{compare_algorithms, SortOrder};
use vinyl_catalog::{error, info, success, warn};

fn main() {
    start_message();
    let config = Config::new();
    if let Err(err) = run(&config) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let field = match env::args().nth(1) {
        Some(name) => ProductField::from_name(&name)?,
        None => ProductField::Price,
    };

    let source = JsonFileSource::new(&config.catalog_path);
    let mut catalog = Catalog::from_source(&source, config.index_buckets)?
        .with_thresholds(config.sort_thresholds);
    if catalog.is_empty() {
        warn!("The catalog is empty, seeding it with the default products");
        for product in default_products() {
            catalog.add(product);
        }
        catalog.dump_to(&source)?;
    }

    let mut history = ActionHistory::new();
    let (algorithm, sorted) = catalog.sorted_by(field, SortOrder::Ascending);
    history.record(&format!("Catalog sorted by {:?} with {}", field, algorithm));

    info!("Catalog sorted by {:?} using {}", field, algorithm);
    println!("\n{:<5} {:<50} {:<10} {:<15}", "ID", "Name", "Price", "Category");
    println!("{}", "-".repeat(82));
    for product in &sorted {
        println!(
            "{:<5} {:<50} Q{:<9.2} {:<15}",
            product.id,
            product.name,
            product.price,
            product.category.as_deref().unwrap_or("-")
        );
    }

    let timings = compare_algorithms(catalog.list(), |p| field.sort_key(p));
    history.record("Sorting algorithms compared");
    println!("\n{:<20} {:<15} {:<15}", "Algorithm", "Time (ms)", "Complexity");
    println!("{}", "-".repeat(50));
    for timing in &timings {
        println!("{:<20} {:<15.4} {:<15}", timing.algorithm.name(), timing.millis(), timing.algorithm.complexity());
    }
    if let Some(fastest) = timings.first() {
        success!("Fastest algorithm: {}", fastest.algorithm);
    }

    info!("Index load factor: {:.2} ({} products)", catalog.index_load_factor(), catalog.len());
    for action in history.latest(10) {
        println!("  {}", action);
    }
    Ok(())
}
