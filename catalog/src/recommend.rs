use std::collections::BTreeSet;

use pantry_common::product::Product;
use rand::seq::SliceRandom;
use rand::Rng;

/// Combine several fetched product lists into a recommendation strip:
/// dedup by product id, shuffle, take at most `limit`.
///
/// The selection is deliberately non-deterministic; the only guarantees are
/// that the result is no longer than `limit` and that every entry came from
/// one of the input lists.
pub fn recommend_with<R: Rng>(lists: &[Vec<Product>], limit: usize, rng: &mut R) -> Vec<Product> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut pool: Vec<Product> = Vec::new();
    for product in lists.iter().flatten() {
        if seen.insert(&product.id.0) {
            pool.push(product.clone());
        }
    }
    pool.shuffle(rng);
    pool.truncate(limit);
    pool
}

/// `recommend_with` seeded from the thread-local generator.
pub fn recommend(lists: &[Vec<Product>], limit: usize) -> Vec<Product> {
    recommend_with(lists, limit, &mut rand::thread_rng())
}
