//! Completion reply parsing.

use crate::error::NewsError;
use aqs_core::news::{NewsArticle, ARTICLES_PER_FEED};
use reqwest::Url;
use serde::Deserialize;

/// Strip a surrounding markdown code fence (```` ```json ... ``` ````).
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // skip the info string ("json") if present
    let body = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

#[derive(Deserialize)]
struct Wrapped {
    articles: Vec<NewsArticle>,
}

/// Parse a completion reply into at most [`ARTICLES_PER_FEED`] articles.
///
/// Accepts a bare array or an object with an `articles` array.
pub fn parse_articles(text: &str) -> Result<Vec<NewsArticle>, NewsError> {
    let body = strip_code_fences(text);
    let mut articles = match serde_json::from_str::<Vec<NewsArticle>>(body) {
        Ok(articles) => articles,
        Err(array_err) => match serde_json::from_str::<Wrapped>(body) {
            Ok(wrapped) => wrapped.articles,
            Err(_) => return Err(NewsError::Malformed(array_err.to_string())),
        },
    };
    if articles.is_empty() {
        return Err(NewsError::Empty);
    }
    if articles.len() > ARTICLES_PER_FEED {
        log::debug!(
            "[AQS] news: truncating {} articles to {}",
            articles.len(),
            ARTICLES_PER_FEED
        );
        articles.truncate(ARTICLES_PER_FEED);
    }
    Ok(articles)
}

/// Give every article without an image a generated one: `{endpoint}/{title}?seed={id}`.
pub fn fill_image_urls(articles: &mut [NewsArticle], image_endpoint: &str) {
    let Ok(base) = Url::parse(image_endpoint) else {
        log::warn!("[AQS] news: bad image endpoint {:?}", image_endpoint);
        return;
    };
    for article in articles.iter_mut().filter(|a| a.image_url.trim().is_empty()) {
        let mut url = base.clone();
        let pushed = match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().push(&article.title);
                true
            }
            Err(()) => false,
        };
        if !pushed {
            continue;
        }
        url.query_pairs_mut().append_pair("seed", &article.id);
        article.image_url = url.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_json(id: u32) -> String {
        format!(
            r#"{{"id":{id},"title":"Tide warning {id}","summary":"s","fullText":"f","date":"2024-05-01","imageUrl":"","source":"Coastal Post","city":"Jakarta"}}"#
        )
    }

    fn array_of(n: u32) -> String {
        let items: Vec<String> = (1..=n).map(article_json).collect();
        format!("[{}]", items.join(","))
    }

    #[test]
    fn strips_fences_with_and_without_info_string() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("```\n[1]\n```\n"), "[1]");
        assert_eq!(strip_code_fences("```json[1]```"), "[1]");
        assert_eq!(strip_code_fences("  [1]  "), "[1]");
    }

    #[test]
    fn parses_fenced_array() {
        let reply = format!("```json\n{}\n```", array_of(8));
        let articles = parse_articles(&reply).unwrap();
        assert_eq!(articles.len(), 8);
        assert_eq!(articles[0].id, "1");
        assert_eq!(articles[7].title, "Tide warning 8");
    }

    #[test]
    fn parses_wrapped_object_and_truncates() {
        let reply = format!(r#"{{"articles": {}}}"#, array_of(10));
        assert_eq!(parse_articles(&reply).unwrap().len(), ARTICLES_PER_FEED);
    }

    #[test]
    fn malformed_and_empty_replies() {
        assert!(matches!(
            parse_articles("Sure! Here are your articles:"),
            Err(NewsError::Malformed(_))
        ));
        assert!(matches!(
            parse_articles("[{\"id\": 1}]"),
            Err(NewsError::Malformed(_))
        ));
        assert_eq!(parse_articles("```json\n[]\n```"), Err(NewsError::Empty));
    }

    #[test]
    fn fills_only_missing_images() {
        let mut articles = parse_articles(&array_of(2)).unwrap();
        articles[1].image_url = "https://cdn.example.com/a.jpg".to_string();
        fill_image_urls(&mut articles, "https://images.example.com/prompt");
        assert_eq!(
            articles[0].image_url,
            "https://images.example.com/prompt/Tide%20warning%201?seed=1"
        );
        assert_eq!(articles[1].image_url, "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn bad_image_endpoint_leaves_articles_alone() {
        let mut articles = parse_articles(&array_of(1)).unwrap();
        fill_image_urls(&mut articles, "not a url");
        assert!(articles[0].image_url.is_empty());
    }
}
