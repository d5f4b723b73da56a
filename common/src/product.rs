use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::CategoryId;

/// Unique product identifier (opaque string from the backend).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// A category the product is associated with (id plus display name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: String,
}

/// A product listing in the storefront catalog.
///
/// Image fields follow the backend convention: empty string means absent.
/// `image` is the legacy alias for `image_url` kept for old records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price in currency-agnostic decimal units.
    pub price: f64,
    pub stock_quantity: u32,
    /// Direct category reference, if the record carries one.
    pub category_id: Option<CategoryId>,
    pub categories: Vec<CategoryRef>,
    pub image_url: String,
    pub image: String,
    pub image_url_1: String,
    pub image_url_2: String,
    pub image_url_3: String,
    pub image_url_4: String,
    /// Discount percentage, 0-100.
    pub discount: Option<f64>,
    pub original_price: Option<f64>,
    pub promotion: Option<String>,
    /// Rating on a 0-5 scale.
    pub rating: Option<f64>,
    pub brands: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Minimal product with the given id, name and price; everything else empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId(id.into()),
            name: name.into(),
            description: String::new(),
            price,
            stock_quantity: 0,
            category_id: None,
            categories: Vec::new(),
            image_url: String::new(),
            image: String::new(),
            image_url_1: String::new(),
            image_url_2: String::new(),
            image_url_3: String::new(),
            image_url_4: String::new(),
            discount: None,
            original_price: None,
            promotion: None,
            rating: None,
            brands: Vec::new(),
            created_at: None,
        }
    }

    /// Price after applying the discount percentage, clamped non-negative.
    /// A missing or zero discount leaves the price unchanged.
    pub fn discounted_price(&self) -> f64 {
        match self.discount {
            Some(pct) if pct > 0.0 => (self.price * (1.0 - pct / 100.0)).max(0.0),
            _ => self.price,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discounted_price() {
        let mut p = Product::new("p-1", "Ramen", 10.0);
        assert_eq!(p.discounted_price(), 10.0);

        p.discount = Some(25.0);
        assert_eq!(p.discounted_price(), 7.5);

        p.discount = Some(0.0);
        assert_eq!(p.discounted_price(), 10.0);
    }

    #[test]
    fn test_discounted_price_never_negative() {
        let mut p = Product::new("p-1", "Ramen", 10.0);
        p.discount = Some(150.0);
        assert!(p.discounted_price() >= 0.0);
    }

    #[test]
    fn test_in_stock() {
        let mut p = Product::new("p-1", "Ramen", 10.0);
        assert!(!p.in_stock());
        p.stock_quantity = 3;
        assert!(p.in_stock());
    }
}
