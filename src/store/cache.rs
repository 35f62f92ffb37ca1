use super::product::SavedProduct;

/// Read/write access to the saved-product cache.
///
/// Injected into the autocomplete controller and the submit path so tests can
/// substitute a double.
pub trait ProductStore {
    /// Case-insensitive substring search over product names.
    ///
    /// Results keep the storage order of the cache; no relevance ranking is
    /// applied. Callers are expected to gate on query length, but a short or
    /// empty query still just filters by containment.
    fn search(&self, query: &str) -> Vec<SavedProduct>;

    /// Create or update a product by case-insensitive exact name match.
    ///
    /// Mutable fields (price, brand, model) are overwritten on an existing
    /// record; a price of 0 clears the stored default price. Always succeeds.
    fn upsert(
        &mut self,
        name: &str,
        price: f64,
        brand: Option<&str>,
        model: Option<&str>,
    ) -> SavedProduct;
}

/// In-memory saved-product cache, insertion-ordered.
///
/// Shared by every form instance in a session; persisted to disk between
/// sessions by `storage`.
#[derive(Debug, Default)]
pub struct ProductCache {
    products: Vec<SavedProduct>,
}

impl ProductCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<SavedProduct>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[SavedProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductStore for ProductCache {
    fn search(&self, query: &str) -> Vec<SavedProduct> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn upsert(
        &mut self,
        name: &str,
        price: f64,
        brand: Option<&str>,
        model: Option<&str>,
    ) -> SavedProduct {
        let name = name.trim();
        debug_assert!(!name.is_empty(), "upsert requires a non-empty name");

        // A price of 0 means "no default price"; refill would skip it anyway.
        let default_price = (price > 0.0).then_some(price);
        let brand = brand.map(|b| b.to_string());
        let model = model.map(|m| m.to_string());

        let lower = name.to_lowercase();
        if let Some(existing) = self
            .products
            .iter_mut()
            .find(|p| p.name.to_lowercase() == lower)
        {
            existing.default_price = default_price;
            existing.brand = brand;
            existing.model = model;
            return existing.clone();
        }

        let mut product = SavedProduct::new(name);
        product.default_price = default_price;
        product.brand = brand;
        product.model = model;
        self.products.push(product.clone());
        product
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
