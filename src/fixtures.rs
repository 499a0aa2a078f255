//! Fixtures
//!
//! YAML catalog loading. A fixture file is an ordered `products:` list; the
//! file order is the catalog's insertion order, which the listing treats as
//! the "featured" order.

use std::{fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    prices::Price,
    products::{Product, UnknownCategory},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown category slug
    #[error(transparent)]
    Category(#[from] UnknownCategory),

    /// Catalog construction error
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    /// Ordered list of product fixtures
    products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
struct ProductFixture {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    price: u64,
    #[serde(default)]
    original_price: u64,
    #[serde(default)]
    discount: u8,
    #[serde(default)]
    image: String,
    category: String,
    #[serde(default = "default_in_stock")]
    in_stock: bool,
    #[serde(default)]
    rating: f32,
    #[serde(default)]
    reviews: u32,
    #[serde(default)]
    features: Vec<String>,
}

fn default_in_stock() -> bool {
    true
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        Ok(Product {
            id: fixture.id,
            name: fixture.name,
            description: fixture.description,
            price: Price::new(fixture.price),
            original_price: Price::new(fixture.original_price),
            discount: fixture.discount,
            image: fixture.image,
            category: fixture.category.parse()?,
            in_stock: fixture.in_stock,
            rating: fixture.rating,
            reviews: fixture.reviews,
            features: fixture.features,
        })
    }
}

/// Load a catalog from `./fixtures/products/{name}.yml`.
///
/// # Errors
///
/// Returns a `FixtureError` if the file cannot be read or parsed, if a
/// category slug is unknown, or if two products share an id.
pub fn load_catalog(name: &str) -> Result<Catalog, FixtureError> {
    load_catalog_from("./fixtures", name)
}

/// Load a catalog from `{base}/products/{name}.yml`.
///
/// # Errors
///
/// Returns a `FixtureError` if the file cannot be read or parsed, if a
/// category slug is unknown, or if two products share an id.
pub fn load_catalog_from(
    base: impl Into<PathBuf>,
    name: &str,
) -> Result<Catalog, FixtureError> {
    let file_path = base.into().join("products").join(format!("{name}.yml"));
    let contents = fs::read_to_string(&file_path)?;
    let fixture: CatalogFixture = serde_norway::from_str(&contents)?;

    let mut catalog = Catalog::new();

    for product_fixture in fixture.products {
        let product: Product = product_fixture.try_into()?;

        catalog.insert(product)?;
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;
    use testresult::TestResult;

    use crate::products::Category;

    use super::*;

    #[test]
    fn storefront_fixture_loads() -> TestResult {
        let catalog = load_catalog("storefront")?;

        assert!(!catalog.is_empty());
        assert!(!catalog.products_in(Category::Wigs).is_empty());
        assert!(!catalog.products_in(Category::Frontals).is_empty());
        assert!(!catalog.products_in(Category::Tools).is_empty());

        Ok(())
    }

    #[test]
    fn capsule_fixture_has_one_product_per_band() -> TestResult {
        let catalog = load_catalog("capsule")?;

        let mut prices: Vec<u64> = catalog.iter().map(|p| *p.price).collect();

        prices.sort_unstable();

        assert_eq!(prices, vec![5_000, 15_000, 35_000, 60_000]);

        Ok(())
    }

    #[test]
    fn fixture_order_is_catalog_order() -> TestResult {
        let dir = tempdir()?;
        let products_dir = dir.path().join("products");

        fs::create_dir_all(&products_dir)?;
        fs::write(
            products_dir.join("ordered.yml"),
            r"
products:
  - id: wig-002
    name: Second Wig
    price: 30000
    category: wigs
  - id: wig-001
    name: First Wig
    price: 45000
    category: wigs
",
        )?;

        let catalog = load_catalog_from(dir.path(), "ordered")?;

        let ids: Vec<&str> = catalog
            .products_in(Category::Wigs)
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(ids, vec!["wig-002", "wig-001"]);

        Ok(())
    }

    #[test]
    fn unknown_category_in_fixture_errors() -> TestResult {
        let dir = tempdir()?;
        let products_dir = dir.path().join("products");

        fs::create_dir_all(&products_dir)?;
        fs::write(
            products_dir.join("bad.yml"),
            r"
products:
  - id: hat-001
    name: Hat
    price: 5000
    category: hats
",
        )?;

        let result = load_catalog_from(dir.path(), "bad");

        assert!(matches!(result, Err(FixtureError::Category(_))));

        Ok(())
    }

    #[test]
    fn duplicate_id_in_fixture_errors() -> TestResult {
        let dir = tempdir()?;
        let products_dir = dir.path().join("products");

        fs::create_dir_all(&products_dir)?;
        fs::write(
            products_dir.join("dupes.yml"),
            r"
products:
  - id: wig-001
    name: Wig
    price: 45000
    category: wigs
  - id: wig-001
    name: Wig Again
    price: 38000
    category: wigs
",
        )?;

        let result = load_catalog_from(dir.path(), "dupes");

        assert!(matches!(result, Err(FixtureError::Catalog(_))));

        Ok(())
    }

    #[test]
    fn missing_fixture_file_errors() {
        let result = load_catalog("no-such-fixture");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
