use chrono::{DateTime, Utc};
use pantry_common::filter::SortKey;
use pantry_common::product::Product;

/// Order a product list by the given key. Stable and non-mutating: ties keep
/// their relative input order, which pagination and tests rely on.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut out = products.to_vec();
    match key {
        SortKey::PriceLow => out.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => out.sort_by(|a, b| b.price.total_cmp(&a.price)),
        // Products without a timestamp sort as epoch zero, i.e. oldest.
        SortKey::Newest => out.sort_by(|a, b| created_or_epoch(b).cmp(&created_or_epoch(a))),
        // Unrated products count as rating zero.
        SortKey::Popularity => {
            out.sort_by(|a, b| rating_or_zero(b).total_cmp(&rating_or_zero(a)))
        }
    }
    out
}

fn created_or_epoch(p: &Product) -> DateTime<Utc> {
    p.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn rating_or_zero(p: &Product) -> f64 {
    p.rating.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_price_low_ascending() {
        let products = vec![
            Product::new("a", "A", 9.0),
            Product::new("b", "B", 1.0),
            Product::new("c", "C", 5.0),
        ];
        let sorted = sort_products(&products, SortKey::PriceLow);
        assert_eq!(names(&sorted), vec!["B", "C", "A"]);
        // input untouched
        assert_eq!(names(&products), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_price_high_descending() {
        let products = vec![
            Product::new("a", "A", 9.0),
            Product::new("b", "B", 1.0),
            Product::new("c", "C", 5.0),
        ];
        assert_eq!(
            names(&sort_products(&products, SortKey::PriceHigh)),
            vec!["A", "C", "B"]
        );
    }

    #[test]
    fn test_price_ties_keep_input_order() {
        let products = vec![
            Product::new("a", "A", 5.0),
            Product::new("b", "B", 5.0),
            Product::new("c", "C", 2.0),
            Product::new("d", "D", 5.0),
        ];
        assert_eq!(
            names(&sort_products(&products, SortKey::PriceLow)),
            vec!["C", "A", "B", "D"]
        );
    }

    #[test]
    fn test_price_low_then_high_reverses() {
        let products = vec![
            Product::new("a", "A", 3.0),
            Product::new("b", "B", 1.0),
            Product::new("c", "C", 7.0),
        ];
        let low = sort_products(&products, SortKey::PriceLow);
        let high = sort_products(&low, SortKey::PriceHigh);
        let mut reversed = low.clone();
        reversed.reverse();
        assert_eq!(names(&high), names(&reversed));
    }

    #[test]
    fn test_newest_missing_timestamp_sorts_oldest() {
        let mut old = Product::new("a", "Old", 1.0);
        old.created_at = Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        let mut new = Product::new("b", "New", 1.0);
        new.created_at = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        let undated = Product::new("c", "Undated", 1.0);

        let sorted = sort_products(&[undated, old, new], SortKey::Newest);
        assert_eq!(names(&sorted), vec!["New", "Old", "Undated"]);
    }

    #[test]
    fn test_popularity_missing_rating_counts_as_zero() {
        let mut rated = Product::new("a", "Rated", 1.0);
        rated.rating = Some(3.5);
        let unrated = Product::new("b", "Unrated", 1.0);
        let mut top = Product::new("c", "Top", 1.0);
        top.rating = Some(4.8);

        let sorted = sort_products(&[unrated, rated, top], SortKey::Popularity);
        assert_eq!(names(&sorted), vec!["Top", "Rated", "Unrated"]);
    }
}
