//! Prices

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Represents a price in whole naira.
///
/// The storefront never deals in kobo; all catalog prices, cart subtotals
/// and savings figures are whole-currency integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// Creates a new Price
    pub fn new(value: u64) -> Self {
        Price { value }
    }

    /// Whether this price is zero (used to mark "no original price" on
    /// undiscounted products).
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.value == 0
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Price::new(value)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price() {
        let price = Price::new(45_000);

        assert_eq!(price.value, 45_000);
    }

    #[test]
    fn price_derefs_to_u64() {
        let price = Price { value: 100 };

        assert_eq!(*price, 100);
    }

    #[test]
    fn prices_order_by_value() {
        let mut prices = vec![Price::new(3000), Price::new(1000), Price::new(2000)];

        prices.sort();

        assert_eq!(
            prices,
            vec![Price::new(1000), Price::new(2000), Price::new(3000)]
        );
    }

    #[test]
    fn price_serializes_transparently() -> TestResult {
        let json = serde_json::to_string(&Price::new(15_000))?;

        assert_eq!(json, "15000");
        assert_eq!(serde_json::from_str::<Price>("15000")?, Price::new(15_000));

        Ok(())
    }
}
