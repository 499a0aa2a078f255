//! Weft prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartLine, CartStore},
    catalog::{Catalog, CatalogError},
    filters::{Filters, HairPattern, PriceBand, SortKey, UnknownToken},
    fixtures::{FixtureError, load_catalog, load_catalog_from},
    listing::{apply_filters, category_listing},
    notify::{Notifier, NoopNotifier, RecordingNotifier},
    prices::Price,
    products::{Category, Product, ProductKey, UnknownCategory},
    storage::{FileStore, KeyValueStore, MemoryStore, StorageError},
    summary::{CartSummary, SummaryError, write_listing},
    wishlist::WishlistStore,
};
