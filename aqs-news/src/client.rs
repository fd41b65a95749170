//! OpenAI-compatible chat completion client.

use crate::error::NewsError;
use crate::parse::{fill_image_urls, parse_articles};
use crate::prompt::chat_request;
use aqs_core::news::NewsArticle;
use chrono::NaiveDate;
use serde::Deserialize;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://image.pollinations.ai/prompt";

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    /// Full URL of the chat completions endpoint.
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Base URL for generated article images.
    pub image_endpoint: String,
}

impl CompletionConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            image_endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Pull `choices[0].message.content` out of a completion body.
pub(crate) fn completion_content(body: &str) -> Result<String, NewsError> {
    let completion: ChatCompletion =
        serde_json::from_str(body).map_err(|e| NewsError::Malformed(e.to_string()))?;
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(NewsError::Empty)
}

#[derive(Clone)]
pub struct CompletionClient {
    config: CompletionConfig,
    http: reqwest::Client,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Request one feed of articles about `cities` around `date`.
    pub async fn fetch_news(
        &self,
        date: &NaiveDate,
        cities: &[String],
    ) -> Result<Vec<NewsArticle>, NewsError> {
        log::info!(
            "[AQS] news: requesting feed for {} cities from {}",
            cities.len(),
            self.config.endpoint
        );
        let body = chat_request(&self.config.model, date, cities);
        let mut request = self.http.post(&self.config.endpoint).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NewsError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("[AQS] news: endpoint returned {}", status);
            return Err(NewsError::Status(status.as_u16()));
        }
        let text = response
            .text()
            .await
            .map_err(|e| NewsError::Request(e.to_string()))?;

        let content = completion_content(&text)?;
        let mut articles = parse_articles(&content)?;
        fill_image_urls(&mut articles, &self.config.image_endpoint);
        log::info!("[AQS] news: received {} articles", articles.len());
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_choice_content() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"```json\n[]\n```"}}]}"#;
        assert_eq!(completion_content(body).unwrap(), "```json\n[]\n```");
    }

    #[test]
    fn missing_choices_or_content_is_empty() {
        assert_eq!(completion_content(r#"{"choices":[]}"#), Err(NewsError::Empty));
        assert_eq!(
            completion_content(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#),
            Err(NewsError::Empty)
        );
    }

    #[test]
    fn non_completion_body_is_malformed() {
        assert!(matches!(
            completion_content("<html>rate limited</html>"),
            Err(NewsError::Malformed(_))
        ));
    }

    #[test]
    fn config_defaults() {
        let config = CompletionConfig::new("https://llm.example.com/v1/chat/completions");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_key.is_none());
        assert_eq!(config.image_endpoint, DEFAULT_IMAGE_ENDPOINT);
    }
}
