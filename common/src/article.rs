use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique article identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArticleId(pub String);

/// Kind of content page served by the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleKind {
    #[default]
    Article,
    Video,
    Recipe,
}

impl ArticleKind {
    /// Parse the backend's `type` field; unknown values fall back to `Article`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "video" => ArticleKind::Video,
            "recipe" => ArticleKind::Recipe,
            _ => ArticleKind::Article,
        }
    }
}

/// A content page: editorial article, video page, or recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub kind: ArticleKind,
    pub image_url: String,
    pub created_at: Option<DateTime<Utc>>,
}
