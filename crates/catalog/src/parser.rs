//! Parser for catalog files.
//!
//! Format: one product per line, `name,color,size`.
//! Blank lines and lines starting with `#` are skipped.
//!
//! Rust concepts you'll learn here:
//! - String parsing and splitting
//! - Error handling with `?` operator
//! - Converting between types (parsing strings to enums via `FromStr`)
//! - Working with file I/O

use crate::error::{CatalogError, Result};
use crate::types::{Color, Product, Size};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a catalog file into a list of products.
///
/// Records keep their file order; the caller decides what to do with them.
pub fn parse_catalog(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)?;
    let mut products = Vec::new();

    // Read line by line
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue; // Skip blank lines and comments
        }

        // Split by ","
        let fields: Vec<&str> = line_trimmed.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(CatalogError::FieldCountMismatch {
                expected: 3,
                found: fields.len(),
                line: line_no,
            });
        }

        let name = fields[0];
        if name.is_empty() {
            return Err(CatalogError::ParseError {
                file: path.display().to_string(),
                line: line_no,
                reason: "Missing product name".to_string(),
            });
        }

        let color: Color = fields[1].parse()?;
        let size: Size = fields[2].parse()?;

        products.push(Product::new(name, color, size));
    }

    debug!("Parsed {} products from {}", products.len(), path.display());
    Ok(products)
}
