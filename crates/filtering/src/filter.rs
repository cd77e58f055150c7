//! The provided Filter implementation.
//!
//! CatalogFilter applies one specification across a slice of items. The
//! interesting part is what it does NOT do: it has no per-attribute entry
//! points, so new filtering criteria never require touching this file.

use crate::traits::{Filter, Specification};
use rayon::prelude::*;
use tracing::debug;

/// Applies a specification to each item of a sequence.
///
/// Stateless: the filter holds nothing between calls, and each call
/// returns a fresh lazy pass over the borrowed input.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogFilter;

impl CatalogFilter {
    pub fn new() -> Self {
        Self
    }

    /// Data-parallel variant of [`Filter::filter`] for large inputs.
    ///
    /// Items are evaluated independently, so the only contract carried
    /// over from the lazy path is order preservation: collecting a rayon
    /// iterator into a Vec keeps the input order.
    pub fn filter_par<'a, T: Sync>(
        &self,
        items: &'a [T],
        spec: &dyn Specification<T>,
    ) -> Vec<&'a T> {
        let matched: Vec<&T> = items
            .par_iter()
            .filter(|item| spec.is_satisfied(item))
            .collect();
        debug!(
            "Parallel filter kept {} of {} items",
            matched.len(),
            items.len()
        );
        matched
    }
}

impl<T> Filter<T> for CatalogFilter {
    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        debug!("Filtering {} items", items.len());
        Box::new(items.iter().filter(move |item| spec.is_satisfied(item)))
    }
}
