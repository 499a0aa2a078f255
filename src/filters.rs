//! Listing filters
//!
//! The ephemeral filter/sort selection for a product listing. Unlike the cart
//! and wishlist, filters are never persisted; they reset to defaults when the
//! session ends.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::prices::Price;

/// Error returned when a filter token is not recognized.
#[derive(Debug, Error)]
#[error("Unknown {kind} token: {token}")]
pub struct UnknownToken {
    /// Which token family was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub token: String,
}

impl UnknownToken {
    fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }
}

/// One of the four fixed price intervals a listing can be filtered by.
///
/// Bounds are in whole naira. The lower bound is exclusive except for the
/// first band; the upper bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceBand {
    /// Below 10,000
    #[serde(rename = "under-10000")]
    Under10k,
    /// 10,000 to 30,000 inclusive
    #[serde(rename = "10000-30000")]
    From10kTo30k,
    /// Above 30,000, up to 50,000 inclusive
    #[serde(rename = "30000-50000")]
    From30kTo50k,
    /// Above 50,000
    #[serde(rename = "over-50000")]
    Over50k,
}

impl PriceBand {
    /// All bands, cheapest first.
    pub const ALL: [PriceBand; 4] = [
        PriceBand::Under10k,
        PriceBand::From10kTo30k,
        PriceBand::From30kTo50k,
        PriceBand::Over50k,
    ];

    /// Canonical token for the band.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            PriceBand::Under10k => "under-10000",
            PriceBand::From10kTo30k => "10000-30000",
            PriceBand::From30kTo50k => "30000-50000",
            PriceBand::Over50k => "over-50000",
        }
    }

    /// Whether a price falls inside this band.
    #[must_use]
    pub fn matches(self, price: Price) -> bool {
        match self {
            PriceBand::Under10k => *price < 10_000,
            PriceBand::From10kTo30k => (10_000..=30_000).contains(&*price),
            PriceBand::From30kTo50k => *price > 30_000 && *price <= 50_000,
            PriceBand::Over50k => *price > 50_000,
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PriceBand {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under-10000" => Ok(PriceBand::Under10k),
            "10000-30000" => Ok(PriceBand::From10kTo30k),
            "30000-50000" => Ok(PriceBand::From30kTo50k),
            "over-50000" => Ok(PriceBand::Over50k),
            other => Err(UnknownToken::new("price band", other)),
        }
    }
}

/// Hair texture a wig listing can be filtered by.
///
/// Matching is a substring search against the lowercased product display
/// name ("Body Wave Lace Wig" matches [`HairPattern::BodyWave`]). This is a
/// known limitation inherited from the storefront: products carry no texture
/// attribute, so the name is the only signal. A product whose name omits its
/// texture will never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HairPattern {
    /// Straight textures
    Straight,
    /// Body wave textures
    BodyWave,
    /// Curly textures
    Curly,
    /// Kinky textures
    Kinky,
}

impl HairPattern {
    /// All patterns, in storefront filter order.
    pub const ALL: [HairPattern; 4] = [
        HairPattern::Straight,
        HairPattern::BodyWave,
        HairPattern::Curly,
        HairPattern::Kinky,
    ];

    /// Canonical token for the pattern.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            HairPattern::Straight => "straight",
            HairPattern::BodyWave => "body-wave",
            HairPattern::Curly => "curly",
            HairPattern::Kinky => "kinky",
        }
    }

    /// The lowercase needle searched for in product names.
    fn needle(self) -> &'static str {
        match self {
            HairPattern::Straight => "straight",
            HairPattern::BodyWave => "body wave",
            HairPattern::Curly => "curly",
            HairPattern::Kinky => "kinky",
        }
    }

    /// Whether a product display name indicates this texture.
    #[must_use]
    pub fn matches_name(self, name: &str) -> bool {
        name.to_lowercase().contains(self.needle())
    }
}

impl fmt::Display for HairPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for HairPattern {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(HairPattern::Straight),
            "body-wave" => Ok(HairPattern::BodyWave),
            "curly" => Ok(HairPattern::Curly),
            "kinky" => Ok(HairPattern::Kinky),
            other => Err(UnknownToken::new("hair pattern", other)),
        }
    }
}

/// Ordering applied to a filtered listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog insertion order, the storefront's curated order.
    #[default]
    Featured,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Products carry no recency data, so this currently behaves exactly
    /// like [`SortKey::Featured`].
    Newest,
}

impl SortKey {
    /// All sort keys, in storefront dropdown order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Newest,
    ];

    /// Canonical token for the sort key.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Newest => "newest",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SortKey {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortKey::Featured),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "newest" => Ok(SortKey::Newest),
            other => Err(UnknownToken::new("sort", other)),
        }
    }
}

/// The active filter/sort selection for a listing.
///
/// Selection sets are replaced wholesale: callers toggle membership before
/// calling, the store does not diff. Sets are kept sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    price_bands: SmallVec<[PriceBand; 4]>,
    hair_patterns: SmallVec<[HairPattern; 4]>,
    sort: SortKey,
}

impl Filters {
    /// Create a filter selection with all-empty defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the price band selection wholesale.
    pub fn set_price_bands(&mut self, bands: impl IntoIterator<Item = PriceBand>) {
        self.price_bands = bands.into_iter().collect();
        self.price_bands.sort_unstable();
        self.price_bands.dedup();
    }

    /// Replace the hair pattern selection wholesale.
    pub fn set_hair_patterns(&mut self, patterns: impl IntoIterator<Item = HairPattern>) {
        self.hair_patterns = patterns.into_iter().collect();
        self.hair_patterns.sort_unstable();
        self.hair_patterns.dedup();
    }

    /// Replace the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Reset to all-empty defaults and [`SortKey::Featured`].
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Currently selected price bands, sorted and deduplicated.
    #[must_use]
    pub fn price_bands(&self) -> &[PriceBand] {
        &self.price_bands
    }

    /// Currently selected hair patterns, sorted and deduplicated.
    #[must_use]
    pub fn hair_patterns(&self) -> &[HairPattern] {
        &self.hair_patterns
    }

    /// Current sort key.
    #[must_use]
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Whether a price passes the band selection.
    ///
    /// Union semantics: the price matches if it falls in ANY selected band;
    /// an empty selection passes everything.
    #[must_use]
    pub fn admits_price(&self, price: Price) -> bool {
        self.price_bands.is_empty() || self.price_bands.iter().any(|band| band.matches(price))
    }

    /// Whether a product display name passes the hair pattern selection.
    ///
    /// Union semantics, same as [`Filters::admits_price`].
    #[must_use]
    pub fn admits_name(&self, name: &str) -> bool {
        self.hair_patterns.is_empty()
            || self
                .hair_patterns
                .iter()
                .any(|pattern| pattern.matches_name(name))
    }
}
