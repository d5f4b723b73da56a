use pantry_common::product::Product;
use uuid::Uuid;

/// True when the token is a canonical identifier: the 36-character
/// hyphenated form. The shorter un-hyphenated spelling the parser would
/// also accept is not canonical here.
pub fn is_canonical_id(token: &str) -> bool {
    token.len() == 36 && Uuid::try_parse(token).is_ok()
}

/// The sentinel `"all"`, or an empty token set, disables category filtering.
pub fn tokens_select_all(tokens: &[String]) -> bool {
    tokens.is_empty() || tokens.iter().all(|t| t.trim().eq_ignore_ascii_case("all"))
}

/// Normalize a name or slug for fuzzy comparison: lowercase, hyphens to
/// spaces, `&` spelled out, whitespace collapsed. Applied to both sides so
/// the slug "snacks-and-drinks" lines up with the name "Snacks & Drinks".
fn normalize(s: &str) -> String {
    s.to_lowercase()
        .replace('-', " ")
        .replace('&', " and ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Does the product belong to the requested category?
///
/// Identifier matches are tried first: the direct `category_id`, then each
/// associated category. Only when the token is not a canonical identifier do
/// we fall back to fuzzy name matching, which keeps old human-authored slug
/// links working against renamed or restructured categories.
pub fn matches_category(product: &Product, token: &str) -> bool {
    if let Some(direct) = &product.category_id {
        if direct.0 == token {
            return true;
        }
    }
    if product.categories.iter().any(|c| c.id.0 == token) {
        return true;
    }
    if is_canonical_id(token) {
        return false;
    }

    let wanted = normalize(token);
    if wanted.is_empty() {
        return false;
    }
    product.categories.iter().any(|c| {
        let name = normalize(&c.name);
        !name.is_empty() && (name == wanted || name.contains(&wanted) || wanted.contains(&name))
    })
}
