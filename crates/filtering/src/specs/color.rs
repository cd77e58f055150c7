//! Specification matching products of a fixed color.

use crate::traits::Specification;
use catalog::{Color, Product};

/// Keeps products whose color equals the configured one.
pub struct ColorSpec {
    color: Color,
}

impl ColorSpec {
    /// Create a new ColorSpec.
    ///
    /// # Arguments
    /// * `color` - The color a product must have to satisfy this spec
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Size;

    #[test]
    fn test_color_spec() {
        let apple = Product::new("Apple", Color::Red, Size::Small);
        let tree = Product::new("Tree", Color::Green, Size::Medium);

        let spec = ColorSpec::new(Color::Green);

        assert!(!spec.is_satisfied(&apple));
        assert!(spec.is_satisfied(&tree));
    }
}
