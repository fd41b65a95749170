//! News feed for the Aqua Sentinel dashboard.
//!
//! One refresh is one completion request asking for a fixed-shape JSON
//! array of articles. The reply is stripped of markdown code fences and
//! parsed; anything unparseable surfaces as [`NewsError::Malformed`] so the
//! UI can offer a retry. Without an endpoint the feed is generated locally
//! from the same location/date seeds as the tide data.

mod client;
mod error;
pub mod offline;
pub mod parse;
pub mod prompt;

pub use client::{CompletionClient, CompletionConfig, DEFAULT_IMAGE_ENDPOINT, DEFAULT_MODEL};
pub use error::NewsError;

use aqs_core::news::NewsArticle;
use chrono::NaiveDate;

/// Where a feed refresh gets its articles.
#[derive(Clone)]
pub enum NewsSource {
    Completion(CompletionClient),
    Offline,
}

impl NewsSource {
    /// Completion source when an endpoint is configured, offline otherwise.
    pub fn from_config(config: Option<CompletionConfig>) -> Self {
        match config {
            Some(config) if !config.endpoint.trim().is_empty() => {
                NewsSource::Completion(CompletionClient::new(config))
            }
            _ => NewsSource::Offline,
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, NewsSource::Offline)
    }

    pub async fn load(
        &self,
        date: &NaiveDate,
        cities: &[String],
    ) -> Result<Vec<NewsArticle>, NewsError> {
        match self {
            NewsSource::Completion(client) => client.fetch_news(date, cities).await,
            NewsSource::Offline => Ok(offline::offline_feed(date, cities)),
        }
    }
}
