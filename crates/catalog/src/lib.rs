//! # Catalog Crate
//!
//! This crate holds the product domain model and the catalog file loader.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Product, Color, Size, Catalog)
//! - **parser**: Parse catalog files into Rust structs
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! // Load a catalog file
//! let catalog = Catalog::load_from_file(Path::new("data/products.csv"))?;
//!
//! // Or start from the built-in demo data
//! let demo = Catalog::sample();
//!
//! println!("{} products loaded", catalog.len());
//! ```
//!
//! ## Learning Goals
//!
//! This crate demonstrates several key Rust concepts:
//!
//! 1. **Ownership and Borrowing**: Catalog owns the data, methods return references
//! 2. **Error Handling**: Using Result<T> and custom error types
//! 3. **Enums**: Fixed attribute sets (Color, Size) as enums, not strings
//! 4. **Traits**: Implementing Display, FromStr, IntoIterator
//! 5. **Modules**: Organizing code into logical units

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Color, Product, Size};
