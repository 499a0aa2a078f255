//! Weft
//!
//! Weft is the state engine for a hair and wig storefront: session-scoped
//! cart and wishlist stores with durable key-value persistence, an ephemeral
//! listing filter, and the pure transforms that turn a product catalog into
//! a filtered, sorted shop window.

pub mod cart;
pub mod catalog;
pub mod filters;
pub mod fixtures;
pub mod listing;
pub mod notify;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod storage;
pub mod summary;
pub mod utils;
pub mod wishlist;
