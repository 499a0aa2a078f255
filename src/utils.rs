//! Utils

use clap::Parser;

use crate::{
    filters::{Filters, HairPattern, PriceBand, SortKey},
    products::Category,
};

/// Arguments for the storefront demos
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Fixture catalog to load from `fixtures/products`
    #[clap(short, long, default_value = "storefront")]
    pub fixture: String,

    /// Category to browse
    #[clap(short, long, default_value = "wigs")]
    pub category: Category,

    /// Price bands to filter by (e.g. `under-10000`, repeatable)
    #[clap(short, long)]
    pub price: Vec<PriceBand>,

    /// Hair patterns to filter by (e.g. `body-wave`, repeatable)
    #[clap(long)]
    pub hair: Vec<HairPattern>,

    /// Sort order for the listing
    #[clap(short, long, default_value = "featured")]
    pub sort: SortKey,

    /// Directory for persisted cart/wishlist state
    #[clap(long)]
    pub state_dir: Option<String>,
}

impl DemoArgs {
    /// Build the filter selection these arguments describe.
    #[must_use]
    pub fn filters(&self) -> Filters {
        let mut filters = Filters::new();

        filters.set_price_bands(self.price.iter().copied());
        filters.set_hair_patterns(self.hair.iter().copied());
        filters.set_sort(self.sort);

        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_build_a_filter_selection() {
        let args = DemoArgs {
            fixture: "storefront".to_string(),
            category: Category::Wigs,
            price: vec![PriceBand::Over50k, PriceBand::Under10k],
            hair: vec![HairPattern::Curly],
            sort: SortKey::PriceLow,
            state_dir: None,
        };

        let filters = args.filters();

        assert_eq!(
            filters.price_bands(),
            &[PriceBand::Under10k, PriceBand::Over50k]
        );
        assert_eq!(filters.hair_patterns(), &[HairPattern::Curly]);
        assert_eq!(filters.sort(), SortKey::PriceLow);
    }
}
