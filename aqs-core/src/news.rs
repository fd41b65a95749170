//! News article shape shared by the completion client and the feed UI.

use serde::{Deserialize, Serialize};

/// Articles requested per feed refresh.
pub const ARTICLES_PER_FEED: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    pub title: String,
    pub summary: String,
    pub full_text: String,
    /// Publication date, "YYYY-MM-DD".
    pub date: String,
    #[serde(default)]
    pub image_url: String,
    pub source: String,
    pub city: String,
}

/// Completion models emit ids as numbers or strings.
fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "article id must be a string or number, got {}",
            other
        ))),
    }
}
