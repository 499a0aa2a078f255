//! Cart
//!
//! The session cart store: an insertion-ordered list of product-quantity
//! lines, persisted under the `"cart"` key after every effective mutation.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    notify::Notifier,
    products::Product,
    storage::{self, KeyValueStore},
};

/// Fixed persistence key for the cart blob.
const STORAGE_KEY: &str = "cart";

/// One product-quantity pairing within a cart.
///
/// Invariant: quantity is always at least 1. A line that would reach zero is
/// removed from the cart, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product on this line
    pub product: Product,

    /// Units of the product, at least 1
    pub quantity: u32,
}

impl CartLine {
    /// Price times quantity for this line, in whole naira.
    #[must_use]
    pub fn amount(&self) -> u64 {
        *self.product.price * u64::from(self.quantity)
    }

    /// Pre-discount price times quantity for this line, in whole naira.
    #[must_use]
    pub fn undiscounted_amount(&self) -> u64 {
        *self.product.undiscounted_price() * u64::from(self.quantity)
    }
}

/// Session cart store.
///
/// Construct one per session with [`CartStore::hydrate`] and pass it down
/// explicitly; the store is not a process-wide singleton. All operations are
/// total: out-of-range inputs fall back to defined behavior (quantities clamp,
/// zero routes through removal) and persistence failures never surface.
pub struct CartStore<'a> {
    lines: Vec<CartLine>,
    storage: &'a dyn KeyValueStore,
    notifier: &'a dyn Notifier,
}

impl fmt::Debug for CartStore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl<'a> CartStore<'a> {
    /// Construct a cart by rehydrating the persisted `"cart"` blob.
    ///
    /// Absent or corrupt data yields an empty cart; the condition is logged,
    /// never surfaced. Parseable lines that violate the cart invariants
    /// (zero quantity, duplicate product id) are dropped with a warning.
    pub fn hydrate(storage: &'a dyn KeyValueStore, notifier: &'a dyn Notifier) -> Self {
        let mut lines: Vec<CartLine> = storage::hydrate(storage, STORAGE_KEY);

        lines.retain(|line| {
            if line.quantity == 0 {
                warn!(id = %line.product.id, "dropping persisted cart line with zero quantity");
                return false;
            }

            true
        });

        let mut seen = FxHashSet::default();

        lines.retain(|line| {
            if seen.insert(line.product.id.clone()) {
                true
            } else {
                warn!(id = %line.product.id, "dropping duplicate persisted cart line");
                false
            }
        });

        Self {
            lines,
            storage,
            notifier,
        }
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// Quantities below 1 are clamped to 1. If a line for the product already
    /// exists its quantity is incremented (saturating); otherwise a new line
    /// is appended, preserving insertion order.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);

        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            });
        }

        self.persist();
        self.notifier.notify(
            "Added to cart",
            &format!("{} has been added to your cart.", product.name),
        );
    }

    /// Remove the line for a product id. Absent ids are a complete no-op.
    pub fn remove(&mut self, product_id: &str) {
        let Some(position) = self
            .lines
            .iter()
            .position(|line| line.product.id == product_id)
        else {
            return;
        };

        let line = self.lines.remove(position);

        self.persist();
        self.notifier.notify(
            "Removed from cart",
            &format!("{} has been removed from your cart.", line.product.name),
        );
    }

    /// Set the quantity on the line for a product id.
    ///
    /// A quantity of zero or less removes the line entirely; the cart never
    /// retains a zero-quantity line. Quantity updates are silent (no toast):
    /// only explicit removals notify. Absent ids are a no-op.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        let Some(position) = self
            .lines
            .iter()
            .position(|line| line.product.id == product_id)
        else {
            return;
        };

        if quantity <= 0 {
            self.lines.remove(position);
        } else if let Some(line) = self.lines.get_mut(position) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }

        self.persist();
    }

    /// Sum of price times quantity across all lines, in whole naira.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.lines.iter().map(CartLine::amount).sum()
    }

    /// Sum of quantities across all lines.
    ///
    /// Distinct from [`CartStore::len`], which counts lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// The line for a product id, if present.
    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == product_id)
    }

    /// All lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn persist(&self) {
        storage::persist(self.storage, STORAGE_KEY, &self.lines);
    }
}
