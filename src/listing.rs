//! Listing
//!
//! Pure transforms from a product sequence plus a filter selection to the
//! ordered sequence a listing displays. Nothing here mutates the catalog;
//! re-run the transform whenever either input changes.

use crate::{
    catalog::Catalog,
    filters::{Filters, SortKey},
    products::{Category, Product},
};

/// Filter and sort a product sequence.
///
/// Applies the price band filter, then the hair pattern filter (both with
/// union semantics; an empty selection passes everything), then the sort
/// key. The sort is stable: input order is preserved for
/// [`SortKey::Featured`] and [`SortKey::Newest`] and among equal prices.
pub fn apply_filters<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    filters: &Filters,
) -> Vec<&'a Product> {
    let mut result: Vec<&Product> = products
        .into_iter()
        .filter(|product| filters.admits_price(product.price))
        .filter(|product| filters.admits_name(&product.name))
        .collect();

    match filters.sort() {
        SortKey::Featured | SortKey::Newest => {}
        SortKey::PriceLow => result.sort_by_key(|product| product.price),
        SortKey::PriceHigh => result.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    result
}

/// The category page's listing: one category's products through the filters.
///
/// Hair pattern selections only apply to [`Category::Wigs`]; for every other
/// category they are ignored, so a leftover "straight" selection cannot
/// empty the frontals or tools page.
pub fn category_listing<'a>(
    catalog: &'a Catalog,
    category: Category,
    filters: &Filters,
) -> Vec<&'a Product> {
    let products = catalog.products_in(category);

    if category == Category::Wigs {
        apply_filters(products, filters)
    } else {
        let mut scoped = filters.clone();

        scoped.set_hair_patterns(std::iter::empty());

        apply_filters(products, &scoped)
    }
}
