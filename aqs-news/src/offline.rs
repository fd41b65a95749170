//! Seeded feed used when no completion endpoint is configured.
//!
//! Headlines are filled from the same tide records the dashboard shows, so
//! an offline story about Semarang quotes Semarang's generated height.

use aqs_core::news::{NewsArticle, ARTICLES_PER_FEED};
use aqs_core::tide::TideRecord;
use aqs_data::seeded_rng;
use aqs_data::seed::tide_seed;
use aqs_data::tide::generate_with_noise;
use aqs_utils::dates::format_date;
use chrono::{Duration, NaiveDate};

const SOURCES: [&str; 4] = [
    "Coastal Watch",
    "Harbour Daily",
    "River Basin Report",
    "Tidewater Times",
];

struct Story {
    title: &'static str,
    summary: &'static str,
    body: &'static str,
}

// {city}, {height}, {high}, {low} are substituted per article.
const STORIES: [Story; 6] = [
    Story {
        title: "{city} braces for {height} m tide",
        summary: "Harbour officials in {city} expect the tide to reach {height} m with high water near {high}.",
        body: "Harbour officials in {city} said the tide is forecast to reach {height} m today, with the next high water expected around {high}.\n\nResidents in low-lying districts were advised to move valuables off the ground floor and keep drains clear until the tide turns near {low}.",
    },
    Story {
        title: "Drainage crews on standby across {city}",
        summary: "Pump stations in {city} are running extra shifts ahead of the {high} high tide.",
        body: "Municipal drainage teams in {city} have placed mobile pumps at known flooding points ahead of the {high} high tide.\n\nThe water agency said current readings of {height} m are within seasonal range but that heavy rain during high water could overwhelm street drains.",
    },
    Story {
        title: "Monthly tide averages climb in {city}",
        summary: "Average high water in {city} has held near {avg_high} m this month.",
        body: "Tide records for {city} show average high water of {avg_high} m this month against average lows of {avg_low} m.\n\nCoastal engineers say the spread is typical for the season and recommend that seawall inspections continue as scheduled.",
    },
    Story {
        title: "Fishermen in {city} delay departures",
        summary: "Boats in {city} are waiting for the {low} low tide before leaving harbour.",
        body: "Fishing crews in {city} are holding their boats until after the {low} low tide, citing rough water at the harbour mouth.\n\nThe port authority said normal departures should resume once levels settle below {height} m.",
    },
    Story {
        title: "{city} schools review flood drills",
        summary: "Schools near the {city} waterfront are rehearsing evacuation routes this week.",
        body: "Schools close to the {city} waterfront are running flood evacuation drills this week as tides approach {height} m.\n\nDisaster management officials said the drills are routine and that no closures are planned.",
    },
    Story {
        title: "Mangrove project expands along {city} coast",
        summary: "A replanting effort near {city} aims to soften peak tides of up to {avg_high} m.",
        body: "Volunteers planted new mangrove seedlings along the {city} shoreline, where monthly high tides average {avg_high} m.\n\nOrganisers hope the belt will reduce erosion and slow surge water reaching coastal roads.",
    },
];

fn fill(template: &str, record: &TideRecord) -> String {
    template
        .replace("{city}", &record.location)
        .replace("{height}", &format!("{:.1}", record.height))
        .replace("{high}", &record.next_high_time)
        .replace("{low}", &record.next_low_time)
        .replace("{avg_high}", &format!("{:.1}", record.monthly_avg_high))
        .replace("{avg_low}", &format!("{:.1}", record.monthly_avg_low))
}

/// [`ARTICLES_PER_FEED`] articles about `cities`, reproducible for a given date.
///
/// Returns an empty feed when `cities` is empty.
pub fn offline_feed(date: &NaiveDate, cities: &[String]) -> Vec<NewsArticle> {
    let cities: Vec<&String> = cities.iter().filter(|c| !c.is_empty()).collect();
    if cities.is_empty() {
        return Vec::new();
    }

    (0..ARTICLES_PER_FEED)
        .filter_map(|index| {
            let city = cities[index % cities.len()];
            let published = *date - Duration::days((index % 3) as i64);
            let seed = tide_seed(city, &published).ok()?;
            let mut rng = seeded_rng(seed as u64);
            let record = generate_with_noise(city, &published, &mut rng).ok()?;
            let story = &STORIES[(seed as usize + index) % STORIES.len()];
            Some(NewsArticle {
                id: format!("offline-{}-{}", format_date(date), index + 1),
                title: fill(story.title, &record),
                summary: fill(story.summary, &record),
                full_text: fill(story.body, &record),
                date: format_date(&published),
                image_url: String::new(),
                source: SOURCES[seed as usize % SOURCES.len()].to_string(),
                city: city.clone(),
            })
        })
        .collect()
}
