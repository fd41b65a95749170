//! Generator inspection commands: locations, tide, forecast, level.

use aqs_core::location::Location;
use aqs_core::tide::TideRecord;
use aqs_data::{seeded_rng, tide};
use aqs_data::water_level::WaterLevelSimulator;
use aqs_utils::dates::{format_date, parse_date, today};
use chrono::NaiveDate;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

/// Canonical fixture location for `name`, ignoring case.
pub fn resolve_location(name: &str) -> anyhow::Result<Location> {
    Location::find(name).ok_or_else(|| {
        let known: Vec<String> = Location::get_location_vector()
            .into_iter()
            .map(|l| l.name)
            .collect();
        anyhow::anyhow!("Unknown location '{}'. Known: {}", name, known.join(", "))
    })
}

/// Parsed `--date`, or today.
pub fn resolve_date(date: Option<&str>) -> anyhow::Result<NaiveDate> {
    match date {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(today()),
    }
}

/// Seeded when `--noise-seed` is given, OS-seeded otherwise.
fn rng_for(seed: Option<u64>) -> StdRng {
    seed.map(seeded_rng).unwrap_or_else(StdRng::from_os_rng)
}

pub fn run_locations() -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record(["NAME", "REGION", "LATITUDE", "LONGITUDE"])?;
    for l in Location::get_location_vector() {
        wtr.write_record([
            l.name,
            l.region,
            l.latitude.to_string(),
            l.longitude.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Human-readable tide card.
pub fn write_tide<W: Write>(
    out: &mut W,
    date: &NaiveDate,
    record: &TideRecord,
) -> anyhow::Result<()> {
    writeln!(out, "{} on {}", record.location, format_date(date))?;
    writeln!(out, "  status       {} {}", record.status.symbol(), record.status)?;
    writeln!(out, "  height       {:.1} m", record.height)?;
    writeln!(out, "  next high    {}", record.next_high_time)?;
    writeln!(out, "  next low     {}", record.next_low_time)?;
    writeln!(
        out,
        "  monthly avg  high {:.1} m / low {:.1} m",
        record.monthly_avg_high, record.monthly_avg_low
    )?;
    let history: Vec<String> = record.past24h.iter().map(|h| format!("{:.2}", h)).collect();
    writeln!(out, "  past 24h     {}", history.join(" "))?;
    Ok(())
}

pub fn run_tide(
    location: &str,
    date: Option<&str>,
    noise_seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let location = resolve_location(location)?;
    let date = resolve_date(date)?;
    let record = tide::generate_with_noise(&location.name, &date, &mut rng_for(noise_seed))?;
    let mut stdout = std::io::stdout();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &record)?;
        writeln!(stdout)?;
    } else {
        write_tide(&mut stdout, &date, &record)?;
    }
    Ok(())
}

/// Forecast as CSV with one row per day.
pub fn write_forecast<W: Write>(
    out: W,
    start: &NaiveDate,
    records: &[TideRecord],
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["DATE", "LOCATION", "STATUS", "HEIGHT", "NEXT_HIGH", "NEXT_LOW"])?;
    for (offset, r) in records.iter().enumerate() {
        let date = *start + chrono::Duration::days(offset as i64);
        wtr.write_record([
            format_date(&date),
            r.location.clone(),
            r.status.to_string(),
            format!("{:.1}", r.height),
            r.next_high_time.clone(),
            r.next_low_time.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn run_forecast(
    location: &str,
    date: Option<&str>,
    days: u32,
    noise_seed: Option<u64>,
) -> anyhow::Result<()> {
    let location = resolve_location(location)?;
    let start = resolve_date(date)?;
    let records = tide::forecast(&location.name, &start, days, &mut rng_for(noise_seed))?;
    info!("Generated {} forecast days for {}", records.len(), location.name);
    write_forecast(std::io::stdout(), &start, &records)
}

/// Run `ticks` refreshes of the walk, one line per sample.
pub fn write_level<W: Write, R: Rng>(
    out: &mut W,
    simulator: &mut WaterLevelSimulator<R>,
    ticks: u32,
) -> anyhow::Result<()> {
    writeln!(
        out,
        "{} base {:.1}% start {:.1}% ({})",
        simulator.location(),
        simulator.base(),
        simulator.current(),
        simulator.level()
    )?;
    for tick in 1..=ticks {
        let level = simulator.tick();
        writeln!(out, "{:>4} {:>6.1}% {}", tick, level, simulator.level())?;
    }
    Ok(())
}

pub fn run_level(
    location: &str,
    date: Option<&str>,
    ticks: u32,
    noise_seed: Option<u64>,
) -> anyhow::Result<()> {
    let location = resolve_location(location)?;
    let date = resolve_date(date)?;
    let mut simulator =
        WaterLevelSimulator::with_rng(&location.name, date, rng_for(noise_seed))?;
    write_level(&mut std::io::stdout(), &mut simulator, ticks)
}
