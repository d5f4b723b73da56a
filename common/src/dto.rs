//! Mappers between the backend's loosely-typed records and the canonical
//! entities. All narrowing of dynamic data happens here; nothing past this
//! boundary sees a raw record.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::article::{Article, ArticleId, ArticleKind};
use crate::category::{Category, CategoryId};
use crate::product::{CategoryRef, Product, ProductId};

/// Mapping failure. Only missing required fields are errors; every optional
/// field degrades to its empty value instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DtoError {
    #[error("record is not an object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// Numeric fields may arrive as JSON numbers or as numeric strings.
fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    let value = value?;
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn coerce_u32(value: Option<&Value>) -> Option<u32> {
    coerce_f64(value).map(|n| if n < 0.0 { 0 } else { n as u32 })
}

/// Missing or null strings map to the empty string.
fn coerce_string(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn coerce_opt_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn coerce_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    value
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn required_string(map: &Map<String, Value>, field: &'static str) -> Result<String, DtoError> {
    map.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(DtoError::MissingField(field))
}

fn as_object(record: &Value) -> Result<&Map<String, Value>, DtoError> {
    record.as_object().ok_or(DtoError::NotAnObject)
}

/// Map a raw product record into a `Product`.
pub fn product_from_record(record: &Value) -> Result<Product, DtoError> {
    let map = as_object(record)?;

    let categories = map
        .get("categories")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let obj = item.as_object()?;
                    let id = obj.get("id").and_then(Value::as_str)?;
                    Some(CategoryRef {
                        id: CategoryId(id.to_string()),
                        name: coerce_string(obj.get("name")),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    let brands = map
        .get("brands")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Product {
        id: ProductId(required_string(map, "id")?),
        name: required_string(map, "name")?,
        description: coerce_string(map.get("description")),
        price: coerce_f64(map.get("price")).unwrap_or(0.0),
        stock_quantity: coerce_u32(map.get("stock_quantity")).unwrap_or(0),
        category_id: coerce_opt_string(map.get("category_id")).map(CategoryId),
        categories,
        image_url: coerce_string(map.get("image_url")),
        image: coerce_string(map.get("image")),
        image_url_1: coerce_string(map.get("image_url_1")),
        image_url_2: coerce_string(map.get("image_url_2")),
        image_url_3: coerce_string(map.get("image_url_3")),
        image_url_4: coerce_string(map.get("image_url_4")),
        discount: coerce_f64(map.get("discount")).map(|d| d.clamp(0.0, 100.0)),
        original_price: coerce_f64(map.get("original_price")),
        promotion: coerce_opt_string(map.get("promotion")),
        rating: coerce_f64(map.get("rating")),
        brands,
        created_at: coerce_timestamp(map.get("created_at")),
    })
}

/// Map a `Product` back into a record for the backend. Fields the backend
/// computes itself (the generated id and timestamps) are omitted.
pub fn product_to_record(product: &Product) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), json!(product.name));
    map.insert("description".into(), json!(product.description));
    map.insert("price".into(), json!(product.price));
    map.insert("stock_quantity".into(), json!(product.stock_quantity));
    if let Some(category_id) = &product.category_id {
        map.insert("category_id".into(), json!(category_id.0));
    }
    map.insert("image_url".into(), json!(product.image_url));
    map.insert("image".into(), json!(product.image));
    map.insert("image_url_1".into(), json!(product.image_url_1));
    map.insert("image_url_2".into(), json!(product.image_url_2));
    map.insert("image_url_3".into(), json!(product.image_url_3));
    map.insert("image_url_4".into(), json!(product.image_url_4));
    if let Some(discount) = product.discount {
        map.insert("discount".into(), json!(discount));
    }
    if let Some(original_price) = product.original_price {
        map.insert("original_price".into(), json!(original_price));
    }
    if let Some(promotion) = &product.promotion {
        map.insert("promotion".into(), json!(promotion));
    }
    if let Some(rating) = product.rating {
        map.insert("rating".into(), json!(rating));
    }
    if !product.brands.is_empty() {
        map.insert("brands".into(), json!(product.brands));
    }
    Value::Object(map)
}

/// Map a raw category record into a `Category`.
pub fn category_from_record(record: &Value) -> Result<Category, DtoError> {
    let map = as_object(record)?;

    let path = map
        .get("path")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(|id| CategoryId(id.to_string()))
                .collect()
        })
        .unwrap_or_default();

    Ok(Category {
        id: CategoryId(required_string(map, "id")?),
        name: required_string(map, "name")?,
        parent_id: coerce_opt_string(map.get("parent_id")).map(CategoryId),
        path,
        level: coerce_u32(map.get("level")).unwrap_or(0),
    })
}

/// Map a `Category` back into a record; the generated id is omitted.
pub fn category_to_record(category: &Category) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), json!(category.name));
    if let Some(parent_id) = &category.parent_id {
        map.insert("parent_id".into(), json!(parent_id.0));
    }
    map.insert(
        "path".into(),
        json!(category.path.iter().map(|id| &id.0).collect::<Vec<_>>()),
    );
    map.insert("level".into(), json!(category.level));
    Value::Object(map)
}

/// Map a raw content-page record into an `Article`.
pub fn article_from_record(record: &Value) -> Result<Article, DtoError> {
    let map = as_object(record)?;

    Ok(Article {
        id: ArticleId(required_string(map, "id")?),
        title: required_string(map, "title")?,
        body: coerce_string(map.get("body")),
        kind: ArticleKind::parse(&coerce_string(map.get("type"))),
        image_url: coerce_string(map.get("image_url")),
        created_at: coerce_timestamp(map.get("created_at")),
    })
}

/// Map an `Article` back into a record; id and timestamp are omitted.
pub fn article_to_record(article: &Article) -> Value {
    let kind = match article.kind {
        ArticleKind::Article => "article",
        ArticleKind::Video => "video",
        ArticleKind::Recipe => "recipe",
    };
    json!({
        "title": article.title,
        "body": article.body,
        "type": kind,
        "image_url": article.image_url,
    })
}
