//! Completion request construction.

use aqs_core::news::ARTICLES_PER_FEED;
use aqs_utils::dates::format_date;
use chrono::NaiveDate;
use serde::Serialize;

const SYSTEM_PROMPT: &str = "You are a regional news desk covering floods, tides and water \
management. Reply with raw JSON only, no commentary.";

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

/// User prompt asking for exactly [`ARTICLES_PER_FEED`] articles.
pub fn news_prompt(date: &NaiveDate, cities: &[String]) -> String {
    format!(
        "Write {count} short news articles about flooding, tides, rainfall or coastal water \
levels dated on or shortly before {date}. Each article must concern one of these cities: \
{cities}. Return a JSON array of {count} objects with exactly these fields: \
\"id\" (number), \"title\", \"summary\" (one sentence), \"fullText\" (two to three paragraphs), \
\"date\" (YYYY-MM-DD), \"imageUrl\" (empty string), \"source\" (a plausible outlet name), \
\"city\" (one of the cities above).",
        count = ARTICLES_PER_FEED,
        date = format_date(date),
        cities = cities.join(", "),
    )
}

pub fn chat_request(model: &str, date: &NaiveDate, cities: &[String]) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user",
                content: news_prompt(date, cities),
            },
        ],
        temperature: 0.8,
    }
}
