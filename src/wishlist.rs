//! Wishlist
//!
//! The session wishlist store: an insertion-ordered, id-deduplicated set of
//! saved products, persisted under the `"wishlist"` key after every
//! effective mutation.

use std::fmt;

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::{
    notify::Notifier,
    products::Product,
    storage::{self, KeyValueStore},
};

/// Fixed persistence key for the wishlist blob.
const STORAGE_KEY: &str = "wishlist";

/// Session wishlist store.
///
/// Construct one per session with [`WishlistStore::hydrate`] and pass it down
/// explicitly. Adding is idempotent by product id; all operations are total.
pub struct WishlistStore<'a> {
    products: Vec<Product>,
    storage: &'a dyn KeyValueStore,
    notifier: &'a dyn Notifier,
}

impl fmt::Debug for WishlistStore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WishlistStore")
            .field("products", &self.products)
            .finish_non_exhaustive()
    }
}

impl<'a> WishlistStore<'a> {
    /// Construct a wishlist by rehydrating the persisted `"wishlist"` blob.
    ///
    /// Absent or corrupt data yields an empty wishlist; the condition is
    /// logged, never surfaced. Duplicate ids in a parseable blob are dropped
    /// with a warning, keeping the first occurrence.
    pub fn hydrate(storage: &'a dyn KeyValueStore, notifier: &'a dyn Notifier) -> Self {
        let mut products: Vec<Product> = storage::hydrate(storage, STORAGE_KEY);
        let mut seen = FxHashSet::default();

        products.retain(|product| {
            if seen.insert(product.id.clone()) {
                true
            } else {
                warn!(id = %product.id, "dropping duplicate persisted wishlist entry");
                false
            }
        });

        Self {
            products,
            storage,
            notifier,
        }
    }

    /// Save a product to the wishlist.
    ///
    /// Idempotent: a product whose id is already present is a complete no-op,
    /// with no persistence write and no toast. Otherwise the product is
    /// appended to the end.
    pub fn add(&mut self, product: &Product) {
        if self.contains(&product.id) {
            return;
        }

        self.products.push(product.clone());

        self.persist();
        self.notifier.notify(
            "Added to wishlist",
            &format!("{} has been added to your wishlist.", product.name),
        );
    }

    /// Remove the entry for a product id. Absent ids are a complete no-op.
    pub fn remove(&mut self, product_id: &str) {
        let Some(position) = self
            .products
            .iter()
            .position(|product| product.id == product_id)
        else {
            return;
        };

        let product = self.products.remove(position);

        self.persist();
        self.notifier.notify(
            "Removed from wishlist",
            &format!("{} has been removed from your wishlist.", product.name),
        );
    }

    /// Whether a product id is currently saved.
    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.products.iter().any(|product| product.id == product_id)
    }

    /// All saved products, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over the saved products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn persist(&self) {
        storage::persist(self.storage, STORAGE_KEY, &self.products);
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        notify::{NoopNotifier, RecordingNotifier},
        prices::Price,
        products::Category,
        storage::MemoryStore,
    };

    use super::*;

    fn product(id: &str, name: &str, price: u64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price: Price::new(price),
            original_price: Price::new(0),
            discount: 0,
            image: String::new(),
            category: Category::Frontals,
            in_stock: true,
            rating: 0.0,
            reviews: 0,
            features: Vec::new(),
        }
    }

    #[test]
    fn add_is_idempotent_by_id() {
        let storage = MemoryStore::new();
        let mut wishlist = WishlistStore::hydrate(&storage, &NoopNotifier);
        let frontal = product("frontal-001", "HD Lace Frontal", 25_000);

        wishlist.add(&frontal);
        wishlist.add(&frontal);

        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains("frontal-001"));
    }

    #[test]
    fn idempotent_add_does_not_toast_twice() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let mut wishlist = WishlistStore::hydrate(&storage, &notifier);
        let frontal = product("frontal-001", "HD Lace Frontal", 25_000);

        wishlist.add(&frontal);
        wishlist.add(&frontal);

        assert_eq!(notifier.toasts().len(), 1);
    }

    #[test]
    fn remove_deletes_entry_and_ignores_absent_ids() {
        let storage = MemoryStore::new();
        let mut wishlist = WishlistStore::hydrate(&storage, &NoopNotifier);

        wishlist.add(&product("frontal-001", "HD Lace Frontal", 25_000));
        wishlist.remove("frontal-001");
        wishlist.remove("frontal-404");

        assert!(wishlist.is_empty());
        assert!(!wishlist.contains("frontal-001"));
    }

    #[test]
    fn entries_keep_insertion_order() {
        let storage = MemoryStore::new();
        let mut wishlist = WishlistStore::hydrate(&storage, &NoopNotifier);

        wishlist.add(&product("b", "B", 2));
        wishlist.add(&product("a", "A", 1));
        wishlist.add(&product("c", "C", 3));

        let ids: Vec<&str> = wishlist.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn mutations_notify_with_storefront_copy() {
        let storage = MemoryStore::new();
        let notifier = RecordingNotifier::new();
        let mut wishlist = WishlistStore::hydrate(&storage, &notifier);

        wishlist.add(&product("frontal-001", "HD Lace Frontal", 25_000));
        wishlist.remove("frontal-001");

        assert_eq!(
            notifier.toasts(),
            vec![
                (
                    "Added to wishlist".to_string(),
                    "HD Lace Frontal has been added to your wishlist.".to_string()
                ),
                (
                    "Removed from wishlist".to_string(),
                    "HD Lace Frontal has been removed from your wishlist.".to_string()
                ),
            ]
        );
    }

    #[test]
    fn wishlist_round_trips_through_storage() {
        let storage = MemoryStore::new();

        {
            let mut wishlist = WishlistStore::hydrate(&storage, &NoopNotifier);

            wishlist.add(&product("frontal-001", "HD Lace Frontal", 25_000));
            wishlist.add(&product("wig-001", "Straight Lace Wig", 45_000));
        }

        let rehydrated = WishlistStore::hydrate(&storage, &NoopNotifier);

        let ids: Vec<&str> = rehydrated.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["frontal-001", "wig-001"]);
    }

    #[test]
    fn hydrate_drops_duplicate_ids() -> TestResult {
        let storage = MemoryStore::new();
        let first = product("frontal-001", "HD Lace Frontal", 25_000);
        let duplicate = product("frontal-001", "HD Lace Frontal", 19_000);

        let blob = serde_json::json!({
            "version": 1,
            "entries": [first, duplicate],
        });

        storage.set("wishlist", &blob.to_string())?;

        let wishlist = WishlistStore::hydrate(&storage, &NoopNotifier);

        assert_eq!(wishlist.len(), 1);
        assert_eq!(
            wishlist.products().first().map(|p| *p.price),
            Some(25_000)
        );

        Ok(())
    }

    #[test]
    fn hydrate_recovers_from_corrupt_blob() -> TestResult {
        let storage = MemoryStore::new();

        storage.set("wishlist", "{\"version\":1,\"entries\":42}")?;

        let wishlist = WishlistStore::hydrate(&storage, &NoopNotifier);

        assert!(wishlist.is_empty());

        Ok(())
    }
}
