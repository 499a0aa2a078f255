//! Catalog
//!
//! The read-only product supplier the stores and listing transform consume.
//! The catalog owns the product records; everything else references them by
//! string id or holds clones.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use thiserror::Error;

use crate::products::{Category, Product, ProductKey};

/// Catalog construction errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product with the same id is already present.
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
}

/// Immutable product catalog.
///
/// Products live in a `SlotMap` with generated keys; a string-id index and
/// per-category key lists (in insertion order, which is the "featured" order)
/// sit on top for lookups.
#[derive(Debug, Default)]
pub struct Catalog {
    products: SlotMap<ProductKey, Product>,
    ids: FxHashMap<String, ProductKey>,
    by_category: FxHashMap<Category, Vec<ProductKey>>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product, returning its generated key.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError::DuplicateId` if a product with the same id
    /// has already been inserted.
    pub fn insert(&mut self, product: Product) -> Result<ProductKey, CatalogError> {
        if self.ids.contains_key(&product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }

        let id = product.id.clone();
        let category = product.category;
        let key = self.products.insert(product);

        self.ids.insert(id, key);
        self.by_category.entry(category).or_default().push(key);

        Ok(key)
    }

    /// Look up a product by its string id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.ids.get(id).and_then(|key| self.products.get(*key))
    }

    /// Look up a product by its generated key.
    #[must_use]
    pub fn get_by_key(&self, key: ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Get the generated key for a string id.
    #[must_use]
    pub fn key_of(&self, id: &str) -> Option<ProductKey> {
        self.ids.get(id).copied()
    }

    /// All products in a category, in insertion order.
    #[must_use]
    pub fn products_in(&self, category: Category) -> Vec<&Product> {
        self.by_category
            .get(&category)
            .into_iter()
            .flatten()
            .filter_map(|key| self.products.get(*key))
            .collect()
    }

    /// Iterate over every product in the catalog.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::prices::Price;

    use super::*;

    fn product(id: &str, category: Category, price: u64) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price: Price::new(price),
            original_price: Price::new(0),
            discount: 0,
            image: String::new(),
            category,
            in_stock: true,
            rating: 0.0,
            reviews: 0,
            features: Vec::new(),
        }
    }

    #[test]
    fn insert_and_get_by_id() -> TestResult {
        let mut catalog = Catalog::new();

        let key = catalog.insert(product("wig-001", Category::Wigs, 45_000))?;

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.key_of("wig-001"), Some(key));

        let found = catalog.get("wig-001");

        assert_eq!(found.map(|p| *p.price), Some(45_000));
        assert_eq!(catalog.get_by_key(key).map(|p| p.id.as_str()), Some("wig-001"));

        Ok(())
    }

    #[test]
    fn duplicate_id_is_rejected() -> TestResult {
        let mut catalog = Catalog::new();

        catalog.insert(product("wig-001", Category::Wigs, 45_000))?;

        let err = catalog
            .insert(product("wig-001", Category::Wigs, 38_000))
            .err();

        assert!(matches!(err, Some(CatalogError::DuplicateId(id)) if id == "wig-001"));
        assert_eq!(catalog.len(), 1);

        Ok(())
    }

    #[test]
    fn products_in_preserves_insertion_order() -> TestResult {
        let mut catalog = Catalog::new();

        catalog.insert(product("wig-002", Category::Wigs, 52_000))?;
        catalog.insert(product("tool-001", Category::Tools, 8_000))?;
        catalog.insert(product("wig-001", Category::Wigs, 45_000))?;

        let wigs: Vec<&str> = catalog
            .products_in(Category::Wigs)
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(wigs, vec!["wig-002", "wig-001"]);
        assert_eq!(catalog.products_in(Category::Frontals).len(), 0);

        Ok(())
    }

    #[test]
    fn missing_id_returns_none() {
        let catalog = Catalog::new();

        assert!(catalog.get("wig-404").is_none());
        assert!(catalog.key_of("wig-404").is_none());
        assert!(catalog.is_empty());
    }
}
