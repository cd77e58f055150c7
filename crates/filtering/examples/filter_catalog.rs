//! Example: Filter the demo catalog
//!
//! Run with: cargo run --package filtering --example filter_catalog
//!
//! This example shows how to:
//! 1. Build a catalog
//! 2. Filter by a single attribute
//! 3. Compose specifications with and/or/not
//! 4. Use a closure as an ad-hoc specification

use catalog::{Catalog, Color, Product, Size};
use filtering::specs::{ColorSpec, SizeSpec};
use filtering::{CatalogFilter, Filter, Specification};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("debug")
        .init();

    println!("=== Catalog Filtering Example ===\n");

    let catalog = Catalog::sample();
    let filter = CatalogFilter::new();

    // Single attribute: green products
    println!("Green products:");
    let green = ColorSpec::new(Color::Green);
    for product in filter.filter(catalog.products(), &green) {
        println!(" - {} is green", product.name);
    }
    println!();

    // Compound: large blue items
    println!("Large blue products:");
    let big_blue = ColorSpec::new(Color::Blue).and(SizeSpec::new(Size::Large));
    for product in filter.filter(catalog.products(), &big_blue) {
        println!(" - {} is large and blue", product.name);
    }
    println!();

    // Negation: everything that is not small
    println!("Products that are not small:");
    let not_small = SizeSpec::new(Size::Small).not();
    for product in filter.filter(catalog.products(), &not_small) {
        println!(" - {}", product);
    }
    println!();

    // Ad-hoc closure specification
    println!("Products with a short name:");
    let short_name = |p: &Product| p.name.len() <= 4;
    for product in filter.filter(catalog.products(), &short_name) {
        println!(" - {}", product);
    }

    Ok(())
}
