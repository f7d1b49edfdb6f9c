use std::io::Write;

use serde::Serialize;

use super::advisor::advise;
use super::domain::Preferences;
use super::ranking::RankedDestination;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    rank: usize,
    id: &'a str,
    name: &'a str,
    total: String,
    percentage: String,
    grade: &'static str,
    flight_hours: Option<f64>,
    advice: Option<&'static str>,
}

/// Write the ranked list as CSV, one row per destination in ranked order.
pub fn write_csv<W: Write>(
    writer: W,
    ranked: &[RankedDestination<'_>],
    preferences: &Preferences,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    for (index, entry) in ranked.iter().enumerate() {
        let destination = entry.destination;
        let advice = advise(destination, &preferences.home_airport);
        writer.serialize(ExportRow {
            rank: index + 1,
            id: destination.id.as_str(),
            name: &destination.name,
            total: format!("{:.1}", entry.score.total),
            percentage: format!("{:.0}", entry.score.percentage()),
            grade: entry.score.grade().label(),
            flight_hours: destination.flight_hours(&preferences.home_airport),
            advice: advice.map(|advice| advice.status.label()),
        })?;
    }

    writer.flush()?;
    Ok(())
}
