//! Integration tests for the filtering crate.
//!
//! These tests verify that specifications, combinators and the filter
//! work together in a realistic scenario, and pin down the contracts a
//! caller relies on: subsequence output, order preservation, membership
//! by evaluation, and idempotence.

use catalog::{Catalog, Color, Product, Size};
use filtering::specs::{ColorSpec, NameContainsSpec, SizeSpec};
use filtering::{CatalogFilter, Filter, Specification};

fn create_test_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.push(Product::new("Apple", Color::Red, Size::Small));
    catalog.push(Product::new("Tree", Color::Green, Size::Medium));
    catalog.push(Product::new("House", Color::Blue, Size::Large));
    catalog.push(Product::new("Greenhouse", Color::Green, Size::Large));
    catalog.push(Product::new("Cherry", Color::Red, Size::Small));
    catalog
}

#[test]
fn test_output_is_ordered_subsequence() {
    let catalog = create_test_catalog();
    let filter = CatalogFilter::new();
    let red = ColorSpec::new(Color::Red);

    let names: Vec<&str> = filter
        .filter(catalog.products(), &red)
        .map(|p| p.name.as_str())
        .collect();

    // Relative order of the input survives
    assert_eq!(names, vec!["Apple", "Cherry"]);
}

#[test]
fn test_membership_tracks_evaluation() {
    let catalog = create_test_catalog();
    let filter = CatalogFilter::new();
    let spec = SizeSpec::new(Size::Large);

    let matched: Vec<&Product> = filter.filter(catalog.products(), &spec).collect();

    for product in &catalog {
        let in_output = matched.iter().any(|m| *m == product);
        assert_eq!(in_output, spec.is_satisfied(product));
    }
}

#[test]
fn test_filtering_is_idempotent() {
    let catalog = create_test_catalog();
    let filter = CatalogFilter::new();
    let green = ColorSpec::new(Color::Green);

    let once: Vec<Product> = filter
        .filter(catalog.products(), &green)
        .cloned()
        .collect();
    let twice: Vec<Product> = filter.filter(&once, &green).cloned().collect();

    assert_eq!(once, twice);
}

#[test]
fn test_nested_composition() {
    let catalog = create_test_catalog();
    let filter = CatalogFilter::new();

    // (green AND large) OR small
    let spec = ColorSpec::new(Color::Green)
        .and(SizeSpec::new(Size::Large))
        .or(SizeSpec::new(Size::Small));

    let names: Vec<&str> = filter
        .filter(catalog.products(), &spec)
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(names, vec!["Apple", "Greenhouse", "Cherry"]);
}

#[test]
fn test_negation() {
    let catalog = create_test_catalog();
    let filter = CatalogFilter::new();

    let not_red = ColorSpec::new(Color::Red).not();
    let count = filter.filter(catalog.products(), &not_red).count();

    assert_eq!(count, 3);
}

#[test]
fn test_name_and_color() {
    let catalog = create_test_catalog();
    let filter = CatalogFilter::new();

    let spec = NameContainsSpec::new("house").and(ColorSpec::new(Color::Green));
    let names: Vec<&str> = filter
        .filter(catalog.products(), &spec)
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(names, vec!["Greenhouse"]);
}

#[test]
fn test_runtime_composition_with_boxed_specs() {
    let catalog = create_test_catalog();
    let filter = CatalogFilter::new();

    // Grow the predicate the way the CLI does: start from always-true,
    // then AND in whatever the caller asked for.
    let mut spec: Box<dyn Specification<Product>> = Box::new(|_: &Product| true);
    spec = Box::new(spec.and(ColorSpec::new(Color::Green)));
    spec = Box::new(spec.and(SizeSpec::new(Size::Large)));

    let names: Vec<&str> = filter
        .filter(catalog.products(), &spec)
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(names, vec!["Greenhouse"]);
}

#[test]
fn test_parallel_path_matches_lazy_path() {
    let catalog = create_test_catalog();
    let filter = CatalogFilter::new();
    let spec = SizeSpec::new(Size::Small).or(SizeSpec::new(Size::Medium));

    let lazy: Vec<&Product> = filter.filter(catalog.products(), &spec).collect();
    let parallel = filter.filter_par(catalog.products(), &spec);

    assert_eq!(lazy, parallel);
}

#[test]
fn test_input_is_not_mutated() {
    let catalog = create_test_catalog();
    let before = catalog.clone();
    let filter = CatalogFilter::new();

    let _ = filter
        .filter(catalog.products(), &ColorSpec::new(Color::Blue))
        .count();

    assert_eq!(catalog.products(), before.products());
}
