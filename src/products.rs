//! Products

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

use crate::prices::Price;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Error returned when a category slug is not recognized.
#[derive(Debug, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// The closed set of product categories the storefront sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Human hair wigs
    Wigs,
    /// Lace frontals
    Frontals,
    /// Installation and maintenance tools
    Tools,
}

impl Category {
    /// All categories, in storefront navigation order.
    pub const ALL: [Category; 3] = [Category::Wigs, Category::Frontals, Category::Tools];

    /// URL/fixture slug for the category.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Wigs => "wigs",
            Category::Frontals => "frontals",
            Category::Tools => "tools",
        }
    }

    /// Display title shown at the top of the category listing.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Category::Wigs => "Wigs",
            Category::Frontals => "Frontals",
            Category::Tools => "Wigging Tools",
        }
    }

    /// Short blurb shown under the category title.
    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            Category::Wigs => "Premium quality human hair wigs in various styles and lengths.",
            Category::Frontals => "High-quality lace frontals for a natural hairline.",
            Category::Tools => "Professional tools for wig installation and maintenance.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wigs" => Ok(Category::Wigs),
            "frontals" => Ok(Category::Frontals),
            "tools" => Ok(Category::Tools),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A catalog product record.
///
/// Products are supplied by the [`Catalog`](crate::catalog::Catalog) and are
/// read-only to the stores: the cart and wishlist hold clones and never
/// create, mutate or delete them.
///
/// Serializes with `camelCase` field names, matching the JSON blobs the
/// storefront persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Marketing description
    pub description: String,

    /// Selling price
    pub price: Price,

    /// Pre-discount price; zero when the product is not discounted
    pub original_price: Price,

    /// Discount percentage, 0 to 100
    pub discount: u8,

    /// Image reference
    pub image: String,

    /// Category the product is listed under
    pub category: Category,

    /// Whether the product is currently purchasable
    pub in_stock: bool,

    /// Star rating, 0.0 to 5.0
    pub rating: f32,

    /// Number of customer reviews behind the rating
    pub reviews: u32,

    /// Ordered feature bullet points
    pub features: Vec<String>,
}

impl Product {
    /// The price this product would sell at without its discount.
    ///
    /// Falls back to the selling price when no original price is recorded.
    #[must_use]
    pub fn undiscounted_price(&self) -> Price {
        if self.original_price.is_zero() {
            self.price
        } else {
            self.original_price
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn test_product(id: &str, name: &str, price: u64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price: Price::new(price),
            original_price: Price::new(0),
            discount: 0,
            image: String::new(),
            category: Category::Wigs,
            in_stock: true,
            rating: 4.5,
            reviews: 10,
            features: Vec::new(),
        }
    }

    #[test]
    fn category_slug_round_trips() -> TestResult {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>()?, category);
        }

        Ok(())
    }

    #[test]
    fn unknown_category_slug_errors() {
        let err = "hats".parse::<Category>().err();

        assert!(matches!(err, Some(UnknownCategory(slug)) if slug == "hats"));
    }

    #[test]
    fn category_titles_match_storefront_copy() {
        assert_eq!(Category::Wigs.title(), "Wigs");
        assert_eq!(Category::Tools.title(), "Wigging Tools");
        assert_eq!(
            Category::Frontals.blurb(),
            "High-quality lace frontals for a natural hairline."
        );
    }

    #[test]
    fn product_serializes_with_camel_case_fields() -> TestResult {
        let product = test_product("wig-001", "Straight Lace Wig", 45_000);
        let json = serde_json::to_string(&product)?;

        assert!(
            json.contains("\"originalPrice\""),
            "expected camelCase originalPrice"
        );
        assert!(json.contains("\"inStock\""), "expected camelCase inStock");

        Ok(())
    }

    #[test]
    fn undiscounted_price_falls_back_to_selling_price() {
        let mut product = test_product("wig-001", "Straight Lace Wig", 45_000);

        assert_eq!(product.undiscounted_price(), Price::new(45_000));

        product.original_price = Price::new(52_000);

        assert_eq!(product.undiscounted_price(), Price::new(52_000));
    }
}
