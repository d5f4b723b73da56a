use serde::{Deserialize, Serialize};

/// Sort order for a filtered product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Newest,
    /// Descending by rating. Default, and fallback for unrecognized keys.
    #[default]
    Popularity,
}

impl SortKey {
    /// Parse a sort key as sent by the frontend. Both the hyphenated and the
    /// camelCase spellings are accepted; anything else means popularity.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "price-low" | "priceLow" => SortKey::PriceLow,
            "price-high" | "priceHigh" => SortKey::PriceHigh,
            "newest" => SortKey::Newest,
            _ => SortKey::Popularity,
        }
    }
}

/// Inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// One catalog query: constructed by the caller per render, immutable input
/// to the filter pipeline, never mutated by it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search term. Blank disables the search stage.
    pub search: String,
    /// Category tokens: canonical ids or name slugs. Empty, or the single
    /// sentinel `"all"`, disables the category stage.
    pub categories: Vec<String>,
    /// Cuisine tokens, same sentinel rule as categories.
    pub cuisines: Vec<String>,
    /// Inclusive price range; `None` disables the price stage.
    pub price_range: Option<PriceRange>,
    pub sort: SortKey,
}
