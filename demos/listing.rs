//! Listing Demo
//!
//! Shows the listing transform over the fixture catalog: each price band on
//! its own, a union of two bands, hair pattern filtering and both price
//! sorts.
//!
//! Run with: `cargo run --example listing`

use std::io;

use anyhow::Result;

use weft::{
    filters::{Filters, HairPattern, PriceBand, SortKey},
    fixtures::load_catalog,
    listing::category_listing,
    products::Category,
    summary::write_listing,
};

/// Listing Demo
#[expect(clippy::print_stdout, reason = "Demo code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let catalog = load_catalog("storefront")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let mut filters = Filters::new();

    println!("== Every wig, featured order ==");
    write_listing(&mut handle, &category_listing(&catalog, Category::Wigs, &filters))?;

    for band in PriceBand::ALL {
        filters.set_price_bands([band]);

        println!("== Wigs in {band} ==");
        write_listing(&mut handle, &category_listing(&catalog, Category::Wigs, &filters))?;
    }

    filters.set_price_bands([PriceBand::Under10k, PriceBand::From30kTo50k]);

    println!("== Wigs under 10,000 or between 30,000 and 50,000 ==");
    write_listing(&mut handle, &category_listing(&catalog, Category::Wigs, &filters))?;

    filters.clear();
    filters.set_hair_patterns([HairPattern::Straight, HairPattern::BodyWave]);

    println!("== Straight and body wave wigs ==");
    write_listing(&mut handle, &category_listing(&catalog, Category::Wigs, &filters))?;

    println!("== The same selection leaves frontals untouched ==");
    write_listing(
        &mut handle,
        &category_listing(&catalog, Category::Frontals, &filters),
    )?;

    filters.clear();

    for sort in [SortKey::PriceLow, SortKey::PriceHigh] {
        filters.set_sort(sort);

        println!("== Wigs sorted {sort} ==");
        write_listing(&mut handle, &category_listing(&catalog, Category::Wigs, &filters))?;
    }

    Ok(())
}
