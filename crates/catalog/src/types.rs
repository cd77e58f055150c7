//! Core domain types for the product catalog.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Structs with public fields
//! - Enums for fixed sets of values
//! - Derive macros for common traits
//! - `FromStr` for parsing attribute values from text
//! - Borrowing: the catalog hands out references, never copies

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// =============================================================================
// Attribute Enums
// =============================================================================

/// Product color - demonstrates Rust enums for fixed value sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl FromStr for Color {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(CatalogError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

/// Product size categories
///
/// Rust concept: Enums can represent discrete categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(CatalogError::InvalidValue {
                field: "size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// Represents a single product in the catalog.
///
/// Immutable after construction: nothing downstream mutates a product,
/// filters only read it and hand back references.
///
/// Rust concepts:
/// - `#[derive(Debug, Clone)]` automatically implements these traits
/// - `pub` makes fields accessible outside this module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    /// Create a new product
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

// =============================================================================
// Catalog - The In-Memory Product Collection
// =============================================================================

/// An ordered, in-memory collection of products.
///
/// The catalog is read-only from the filter's perspective: methods hand out
/// `&Product` references and never mutate or reorder the underlying storage.
///
/// Rust concepts demonstrated:
/// - Vec<T> as the backing store for an ordered sequence
/// - Borrowing: methods return `&T` (references) not `T` (owned values)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// The classic three-product demo catalog: an apple, a tree, and a house.
    pub fn sample() -> Self {
        Self {
            products: vec![
                Product::new("Apple", Color::Red, Size::Small),
                Product::new("Tree", Color::Green, Size::Medium),
                Product::new("House", Color::Blue, Size::Large),
            ],
        }
    }

    /// Load a catalog from a file (one `name,color,size` record per line)
    pub fn load_from_file(path: &Path) -> crate::error::Result<Self> {
        let products = crate::parser::parse_catalog(path)?;
        Ok(Self { products })
    }

    /// Add a product to the end of the catalog
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Get a product by position
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// View the products as an ordered slice
    ///
    /// Rust concept: `&[T]` is a slice (view into an array/vector)
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over the products in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
