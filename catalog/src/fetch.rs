//! Boundary to the hosted record store. The pipeline itself never does I/O;
//! callers hand a `RecordSource` to the loaders here, which narrow the raw
//! records through the DTO mappers. A failed fetch is logged and becomes an
//! empty list for that render cycle, never a propagated fault. No retries.

use serde_json::Value;
use thiserror::Error;

use pantry_common::article::Article;
use pantry_common::category::Category;
use pantry_common::dto::{self, DtoError};
use pantry_common::product::Product;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// A source of raw backend records, keyed by collection name.
/// Implemented over the hosted data service in the application; tests use
/// in-memory stubs.
pub trait RecordSource {
    fn fetch_records(&self, collection: &str) -> Result<Vec<Value>, FetchError>;
}

pub const PRODUCTS: &str = "products";
pub const CATEGORIES: &str = "categories";
pub const ARTICLES: &str = "articles";

pub fn load_products(source: &dyn RecordSource) -> Vec<Product> {
    load(source, PRODUCTS, dto::product_from_record)
}

pub fn load_categories(source: &dyn RecordSource) -> Vec<Category> {
    load(source, CATEGORIES, dto::category_from_record)
}

pub fn load_articles(source: &dyn RecordSource) -> Vec<Article> {
    load(source, ARTICLES, dto::article_from_record)
}

/// Fetch a collection and map each record. Individually malformed records
/// are skipped with a warning; a failed fetch yields an empty list.
fn load<T>(
    source: &dyn RecordSource,
    collection: &str,
    map: impl Fn(&Value) -> Result<T, DtoError>,
) -> Vec<T> {
    match source.fetch_records(collection) {
        Ok(records) => records
            .iter()
            .filter_map(|record| match map(record) {
                Ok(entity) => Some(entity),
                Err(err) => {
                    tracing::warn!("skipping malformed {collection} record: {err}");
                    None
                }
            })
            .collect(),
        Err(err) => {
            tracing::warn!("fetch of {collection} failed: {err}");
            Vec::new()
        }
    }
}
