//! Composable predicate filtering over catalog products.
//!
//! This crate provides:
//! - Specification trait and primitive specifications over products
//! - And/Or/Not combinators for building compound predicates
//! - CatalogFilter for applying a specification across a sequence
//!
//! ## Architecture
//! The pattern splits filtering into two halves:
//! 1. Specifications decide, per item, whether it qualifies
//! 2. The filter walks a sequence and lazily yields the qualifying items
//!
//! New criteria are new specification types (or closures); the filter
//! and the existing specifications never change for them.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{Catalog, Color, Size};
//! use filtering::{CatalogFilter, Filter, Specification};
//! use filtering::specs::{ColorSpec, SizeSpec};
//!
//! let catalog = Catalog::sample();
//! let filter = CatalogFilter::new();
//!
//! // Single attribute
//! let green = ColorSpec::new(Color::Green);
//! for product in filter.filter(catalog.products(), &green) {
//!     println!(" - {} is green", product.name);
//! }
//!
//! // Compound: blue AND large
//! let big_blue = ColorSpec::new(Color::Blue).and(SizeSpec::new(Size::Large));
//! let matches: Vec<_> = filter.filter(catalog.products(), &big_blue).collect();
//! ```

pub mod combinators;
pub mod filter;
pub mod specs;
pub mod traits;

// Re-export main types
pub use combinators::{AndSpec, NotSpec, OrSpec};
pub use filter::CatalogFilter;
pub use traits::{Filter, Specification};

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, Color, Product, Size};
    use crate::specs::{ColorSpec, SizeSpec};

    #[test]
    fn test_green_products() {
        let catalog = Catalog::sample();
        let filter = CatalogFilter::new();

        let green = ColorSpec::new(Color::Green);
        let matches: Vec<&Product> = filter.filter(catalog.products(), &green).collect();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Tree");
    }

    #[test]
    fn test_large_blue_products() {
        let catalog = Catalog::sample();
        let filter = CatalogFilter::new();

        let big_blue = ColorSpec::new(Color::Blue).and(SizeSpec::new(Size::Large));
        let matches: Vec<&Product> = filter.filter(catalog.products(), &big_blue).collect();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "House");
    }

    #[test]
    fn test_closure_specification() {
        let catalog = Catalog::sample();
        let filter = CatalogFilter::new();

        let short_name = |p: &Product| p.name.len() <= 4;
        let matches: Vec<&Product> = filter.filter(catalog.products(), &short_name).collect();

        let names: Vec<&str> = matches.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Tree"]);
    }
}
