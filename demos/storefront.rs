//! Storefront Demo
//!
//! Walks through a shopping session: hydrates the cart and wishlist from a
//! file-backed store (state survives re-runs), browses a filtered category
//! listing, moves a wishlist item into the cart and prints the cart summary.
//!
//! Use `-f` to load a fixture catalog by name
//! Use `-c` to pick the category to browse
//! Use `-p`/`--hair`/`-s` to filter and sort the listing
//! Use `--state-dir` to choose where cart/wishlist state is persisted

use std::{io, path::PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;

use weft::{
    cart::CartStore,
    fixtures::load_catalog,
    listing::category_listing,
    notify::Notifier,
    storage::FileStore,
    summary::{CartSummary, write_listing},
    utils::DemoArgs,
    wishlist::WishlistStore,
};

/// Notifier that prints every toast to stdout.
#[derive(Debug, Default)]
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    #[expect(clippy::print_stdout, reason = "Demo code")]
    fn notify(&self, title: &str, description: &str) {
        println!("[toast] {title}: {description}");
    }
}

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Demo code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = DemoArgs::parse();

    let catalog = load_catalog(&args.fixture)?;
    let filters = args.filters();

    let state_dir = args
        .state_dir
        .clone()
        .map_or_else(|| PathBuf::from("target").join("weft-state"), PathBuf::from);

    let storage = FileStore::new(state_dir)?;
    let notifier = StdoutNotifier;

    let mut cart = CartStore::hydrate(&storage, &notifier);
    let mut wishlist = WishlistStore::hydrate(&storage, &notifier);

    println!(
        "{} -- {}",
        args.category.title(),
        args.category.blurb()
    );

    let listing = category_listing(&catalog, args.category, &filters);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_listing(&mut handle, &listing)?;

    // Shop the first two listed products and save the last one for later.
    if let Some(first) = listing.first() {
        cart.add(first, 1);
    }

    if let Some(second) = listing.get(1) {
        cart.add(second, 2);
    }

    if let Some(last) = listing.last() {
        wishlist.add(last);
    }

    // Move the oldest wishlist entry into the cart, the wishlist drawer's
    // "add to cart" action.
    if let Some(saved) = wishlist.products().first().cloned() {
        cart.add(&saved, 1);
        wishlist.remove(&saved.id);
    }

    println!(
        "\nCart: {} item(s) across {} line(s); wishlist: {} saved",
        cart.count(),
        cart.len(),
        wishlist.len()
    );

    if cart.is_empty() {
        return Err(anyhow!("listing was empty, nothing to summarize"));
    }

    CartSummary::from_cart(&cart).write_to(&mut handle)?;

    Ok(())
}
