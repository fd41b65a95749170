//! One news feed refresh from the command line.

use crate::generate::resolve_date;
use aqs_core::location::Location;
use aqs_core::news::NewsArticle;
use aqs_news::{CompletionConfig, NewsSource};
use log::info;
use std::io::Write;

/// Completion source when an endpoint is given and `--offline` is not set.
pub fn news_source(
    endpoint: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
    offline: bool,
) -> NewsSource {
    if offline {
        return NewsSource::Offline;
    }
    let config = endpoint.map(|endpoint| {
        let mut config = CompletionConfig::new(endpoint);
        if let Some(model) = model {
            config.model = model;
        }
        config.api_key = api_key;
        config
    });
    NewsSource::from_config(config)
}

pub fn write_articles<W: Write>(out: &mut W, articles: &[NewsArticle]) -> anyhow::Result<()> {
    for (i, a) in articles.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "[{}] {}", a.id, a.title)?;
        writeln!(out, "    {} | {} | {}", a.source, a.city, a.date)?;
        writeln!(out, "    {}", a.summary)?;
        if !a.image_url.is_empty() {
            writeln!(out, "    {}", a.image_url)?;
        }
    }
    Ok(())
}

pub async fn run_news(
    endpoint: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
    offline: bool,
    date: Option<&str>,
) -> anyhow::Result<()> {
    let date = resolve_date(date)?;
    let source = news_source(endpoint, model, api_key, offline);
    let cities: Vec<String> = Location::get_location_vector()
        .into_iter()
        .map(|l| l.name)
        .collect();
    info!(
        "Loading {} news for {}",
        if source.is_offline() { "offline" } else { "completion" },
        date
    );
    let articles = source.load(&date, &cities).await?;
    write_articles(&mut std::io::stdout(), &articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn offline_flag_wins_over_endpoint() {
        let source = news_source(Some("http://llm.local/v1".into()), None, None, true);
        assert!(source.is_offline());
        assert!(news_source(None, None, None, false).is_offline());
        assert!(!news_source(Some("http://llm.local/v1".into()), None, None, false).is_offline());
    }

    #[tokio::test]
    async fn offline_feed_prints_every_article() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let cities = vec!["Jakarta".to_string(), "Medan".to_string()];
        let articles = NewsSource::Offline.load(&date, &cities).await.unwrap();
        let mut buf = Vec::new();
        write_articles(&mut buf, &articles).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("[offline-2024-06-01-").count(), articles.len());
        assert!(text.contains("Jakarta"));
    }
}
