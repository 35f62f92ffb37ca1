use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::store::SavedProduct;

/// Filter state for the Artículos tab: a free-text query matched fuzzily
/// against the cached product names (fzf-style), unlike the form autocomplete
/// which is plain substring containment.
pub struct ProductsState {
    query: String,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for ProductsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductsState")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl Default for ProductsState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductsState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Indices into `products` that match the query, best score first.
    /// An empty query keeps the cache order.
    pub fn filtered(&self, products: &[SavedProduct]) -> Vec<usize> {
        if self.query.is_empty() {
            return (0..products.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = products
            .iter()
            .enumerate()
            .filter_map(|(idx, product)| {
                self.matcher
                    .fuzzy_match(&product.name, &self.query)
                    .map(|score| (idx, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

#[cfg(test)]
#[path = "products_state_tests.rs"]
mod products_state_tests;
