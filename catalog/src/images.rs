use pantry_common::product::Product;

/// Served when a product has no image at all.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.png";

/// Rewrite Google Drive share links to the direct-view form.
///
/// Both `.../file/d/<ID>/view` share links and `uc?...id=<ID>` links become
/// `https://drive.google.com/uc?export=view&id=<ID>`. Anything that is not a
/// Drive link passes through unchanged.
pub fn normalize_drive_url(url: &str) -> String {
    if !url.contains("drive.google.com") {
        return url.to_string();
    }
    if let Some(rest) = url.split("/file/d/").nth(1) {
        let id = rest.split(['/', '?']).next().unwrap_or("");
        if !id.is_empty() {
            return direct_view(id);
        }
    }
    if let Some(query) = url.split('?').nth(1) {
        for pair in query.split('&') {
            if let Some(id) = pair.strip_prefix("id=") {
                if !id.is_empty() {
                    return direct_view(id);
                }
            }
        }
    }
    url.to_string()
}

fn direct_view(id: &str) -> String {
    format!("https://drive.google.com/uc?export=view&id={id}")
}

fn slots(product: &Product) -> [&str; 6] {
    [
        product.image_url.as_str(),
        product.image.as_str(),
        product.image_url_1.as_str(),
        product.image_url_2.as_str(),
        product.image_url_3.as_str(),
        product.image_url_4.as_str(),
    ]
}

/// Pick the display image: the canonical field, then the legacy alias, then
/// the alternate slots in order, then the placeholder.
pub fn primary_image(product: &Product) -> String {
    slots(product)
        .into_iter()
        .find(|url| !url.trim().is_empty())
        .map(normalize_drive_url)
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

/// Every image set on the product: the primary field (or its legacy alias)
/// plus the non-empty alternates, deduplicated in first-seen order, each
/// normalized through the Drive transform. Falls back to the placeholder
/// when nothing is set.
pub fn all_images(product: &Product) -> Vec<String> {
    let primary = if product.image_url.trim().is_empty() {
        product.image.as_str()
    } else {
        product.image_url.as_str()
    };

    let mut out: Vec<String> = Vec::new();
    for url in [
        primary,
        product.image_url_1.as_str(),
        product.image_url_2.as_str(),
        product.image_url_3.as_str(),
        product.image_url_4.as_str(),
    ] {
        if url.trim().is_empty() {
            continue;
        }
        let normalized = normalize_drive_url(url);
        if !out.contains(&normalized) {
            out.push(normalized);
        }
    }
    if out.is_empty() {
        out.push(PLACEHOLDER_IMAGE.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_link_normalized() {
        assert_eq!(
            normalize_drive_url("https://drive.google.com/file/d/ABC123/view"),
            "https://drive.google.com/uc?export=view&id=ABC123"
        );
        assert_eq!(
            normalize_drive_url("https://drive.google.com/file/d/ABC123/view?usp=sharing"),
            "https://drive.google.com/uc?export=view&id=ABC123"
        );
    }

    #[test]
    fn test_uc_link_normalized() {
        assert_eq!(
            normalize_drive_url("https://drive.google.com/uc?id=ABC123"),
            "https://drive.google.com/uc?export=view&id=ABC123"
        );
        assert_eq!(
            normalize_drive_url("https://drive.google.com/uc?export=download&id=ABC123"),
            "https://drive.google.com/uc?export=view&id=ABC123"
        );
    }

    #[test]
    fn test_non_drive_url_passes_through() {
        assert_eq!(
            normalize_drive_url("https://img.example/ramen.png"),
            "https://img.example/ramen.png"
        );
        assert_eq!(normalize_drive_url(""), "");
    }

    #[test]
    fn test_primary_prefers_canonical_then_legacy() {
        let mut p = Product::new("p-1", "Ramen", 5.0);
        p.image_url = "https://img.example/canonical.png".into();
        p.image = "https://img.example/legacy.png".into();
        assert_eq!(primary_image(&p), "https://img.example/canonical.png");

        p.image_url.clear();
        assert_eq!(primary_image(&p), "https://img.example/legacy.png");
    }

    #[test]
    fn test_only_second_alternate_set() {
        let mut p = Product::new("p-1", "Ramen", 5.0);
        p.image_url_2 = "https://img.example/alt2.png".into();
        assert_eq!(primary_image(&p), "https://img.example/alt2.png");
        assert_eq!(all_images(&p), vec!["https://img.example/alt2.png"]);
    }

    #[test]
    fn test_no_images_fall_back_to_placeholder() {
        let p = Product::new("p-1", "Ramen", 5.0);
        assert_eq!(primary_image(&p), PLACEHOLDER_IMAGE);
        assert_eq!(all_images(&p), vec![PLACEHOLDER_IMAGE.to_string()]);
    }

    #[test]
    fn test_all_images_dedupes_in_first_seen_order() {
        let mut p = Product::new("p-1", "Ramen", 5.0);
        p.image_url = "https://drive.google.com/file/d/ABC123/view".into();
        p.image_url_1 = "https://img.example/side.png".into();
        // Same file as the primary, in uc form: dedupes after normalization.
        p.image_url_2 = "https://drive.google.com/uc?id=ABC123".into();
        assert_eq!(
            all_images(&p),
            vec![
                "https://drive.google.com/uc?export=view&id=ABC123".to_string(),
                "https://img.example/side.png".to_string(),
            ]
        );
    }
}
