//! Flood and water news feed.

use super::{ErrorDisplay, LoadingSpinner};
use crate::state::{AppState, NewsState};
use aqs_core::news::NewsArticle;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

/// Refresh the feed in `state`. The request runs in the root scope so
/// leaving the panel does not cancel it and strand the feed in `Loading`.
pub fn refresh_news(mut state: AppState) {
    if *state.news.peek() == NewsState::Loading {
        return;
    }
    state.news.set(NewsState::Loading);
    let source = state.news_source.peek().clone();
    let date = *state.selected_date.peek();
    let cities = state.city_names();
    spawn_forever(async move {
        match source.load(&date, &cities).await {
            Ok(articles) => state.news.set(NewsState::Loaded(articles)),
            Err(e) => {
                log::warn!("[AQS] news: {}", e);
                state.news.set(NewsState::Failed(e.to_string()));
            }
        }
    });
}

#[component]
pub fn NewsFeed() -> Element {
    let state = use_context::<AppState>();
    let mut city_filter = use_signal(String::new);

    use_hook(move || {
        if *state.news.peek() == NewsState::Idle {
            refresh_news(state);
        }
    });

    let cities = state.city_names();
    let filter = city_filter();
    let offline_source = state.news_source.read().is_offline();

    let body = match state.news.read().clone() {
        NewsState::Idle | NewsState::Loading => rsx! { LoadingSpinner { label: "Fetching the latest flood news..." } },
        NewsState::Failed(message) => rsx! {
            ErrorDisplay {
                message,
                on_retry: move |_| refresh_news(state),
            }
        },
        NewsState::Loaded(articles) => {
            let shown: Vec<NewsArticle> = articles
                .into_iter()
                .filter(|a| filter.is_empty() || a.city == filter)
                .collect();
            rsx! {
                if shown.is_empty() {
                    p { style: "color: var(--muted);", "No articles for this city yet." }
                }
                div {
                    class: "news-grid",
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px;",
                    for article in shown {
                        NewsCard { key: "{article.id}", article }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "news-feed",
            div {
                style: "display: flex; gap: 12px; align-items: center; margin-bottom: 12px;",
                h2 { style: "margin: 0; flex: 1;", "Flood news" }
                select {
                    onchange: move |evt: Event<FormData>| city_filter.set(evt.value()),
                    option { value: "", selected: filter.is_empty(), "All cities" }
                    for city in cities {
                        option { value: "{city}", selected: city == filter, "{city}" }
                    }
                }
                button {
                    disabled: *state.news.read() == NewsState::Loading,
                    onclick: move |_| refresh_news(state),
                    "Refresh"
                }
            }
            if offline_source {
                p { style: "font-size: 12px; color: var(--muted);", "Generated locally; no news service configured." }
            }
            {body}
        }
    }
}

#[component]
pub fn NewsCard(article: NewsArticle) -> Element {
    let mut expanded = use_signal(|| false);
    let toggle_label = if expanded() { "Show less" } else { "Read more" };
    let paragraphs: Vec<String> = article
        .full_text
        .split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    rsx! {
        article {
            class: "news-card card",
            if article.image_url.is_empty() {
                div {
                    style: "height: 140px; border-radius: 4px; background: var(--surface-alt); display: flex; align-items: center; justify-content: center; color: var(--muted);",
                    "{article.city}"
                }
            } else {
                img {
                    src: "{article.image_url}",
                    alt: "{article.title}",
                    loading: "lazy",
                    style: "width: 100%; height: 140px; object-fit: cover; border-radius: 4px;",
                }
            }
            h3 { style: "margin: 8px 0 4px 0; font-size: 16px;", "{article.title}" }
            p {
                style: "margin: 0; font-size: 12px; color: var(--muted);",
                "{article.source} · {article.city} · {article.date}"
            }
            if expanded() {
                for (i, paragraph) in paragraphs.into_iter().enumerate() {
                    p { key: "{i}", "{paragraph}" }
                }
            } else {
                p { "{article.summary}" }
            }
            button {
                class: "link-button",
                onclick: move |_| expanded.toggle(),
                "{toggle_label}"
            }
        }
    }
}
