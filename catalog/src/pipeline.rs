//! The catalog filter pipeline: search, category, cuisine and price stages
//! applied in sequence over an already-fetched product list. Each stage is a
//! pure subset operation and can be called on its own; `apply_filters`
//! composes them and finishes with the sort stage.

use pantry_common::filter::{FilterState, PriceRange};
use pantry_common::product::Product;

use crate::matcher::{matches_category, tokens_select_all};
use crate::sort::sort_products;

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keep products whose name or description contains the term,
/// case-insensitively. A blank term keeps everything.
pub fn search_stage(products: &[Product], term: &str) -> Vec<Product> {
    let term = term.trim();
    if term.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| contains_ci(&p.name, term) || contains_ci(&p.description, term))
        .cloned()
        .collect()
}

/// Keep products matching any of the requested category tokens.
/// Empty tokens, or the `"all"` sentinel, keep everything.
pub fn category_stage(products: &[Product], tokens: &[String]) -> Vec<Product> {
    if tokens_select_all(tokens) {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| tokens.iter().any(|t| matches_category(p, t)))
        .cloned()
        .collect()
}

/// Keep products whose name, description or any associated category name
/// contains any of the cuisine tokens. Same sentinel rule as categories.
///
/// This intentionally overlaps with the category stage's name matching:
/// cuisines are a separate taxonomy keyed off free text, not category ids.
pub fn cuisine_stage(products: &[Product], tokens: &[String]) -> Vec<Product> {
    if tokens_select_all(tokens) {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| {
            tokens.iter().any(|t| {
                contains_ci(&p.name, t)
                    || contains_ci(&p.description, t)
                    || p.categories.iter().any(|c| contains_ci(&c.name, t))
            })
        })
        .cloned()
        .collect()
}

/// Keep products priced within the range, bounds inclusive.
pub fn price_stage(products: &[Product], range: &PriceRange) -> Vec<Product> {
    products
        .iter()
        .filter(|p| range.contains(p.price))
        .cloned()
        .collect()
}

/// Strict sequential composition of the four stages; each later stage sees
/// only the survivors of the earlier one. Inactive stages pass through, so a
/// default `FilterState` returns the input unchanged, in input order.
pub fn filter_products(products: &[Product], state: &FilterState) -> Vec<Product> {
    let survivors = search_stage(products, &state.search);
    let survivors = category_stage(&survivors, &state.categories);
    let survivors = cuisine_stage(&survivors, &state.cuisines);
    let survivors = match &state.price_range {
        Some(range) => price_stage(&survivors, range),
        None => survivors,
    };
    tracing::debug!(
        total = products.len(),
        kept = survivors.len(),
        "catalog filter applied"
    );
    survivors
}

/// Filter, then order by the state's sort key.
pub fn apply_filters(products: &[Product], state: &FilterState) -> Vec<Product> {
    sort_products(&filter_products(products, state), state.sort)
}
