use csv::Writer;

use crate::{BankError, records::LeaderboardRecord};

pub const CSV_FILE_NAME: &str = "leaderboard.csv";

pub const CSV_COLUMNS: [&str; 12] = [
    "roll",
    "name",
    "url",
    "section",
    "dayi",
    "username",
    "totalSolved",
    "easySolved",
    "mediumSolved",
    "hardSolved",
    "recentSubmissions",
    "info",
];

/// Renders records as CSV with a header row. Absent fields are empty cells and
/// `recentSubmissions` is embedded as a JSON array.
pub fn to_csv(records: &[LeaderboardRecord]) -> Result<Vec<u8>, BankError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(CSV_COLUMNS)?;

    for record in records {
        writer.write_record(row(record)?)?;
    }

    writer
        .into_inner()
        .map_err(|e| BankError::Csv(e.into_error().into()))
}

fn row(record: &LeaderboardRecord) -> Result<[String; 12], BankError> {
    let entry = &record.entry;
    let mut cells: [String; 12] = Default::default();

    cells[0] = entry.roll_number.clone();
    cells[1] = entry.name.clone();
    cells[2] = entry.profile_url.clone();
    cells[3] = entry.section.clone();
    cells[4] = entry.day.clone();

    if let Some(profile) = &record.profile {
        cells[5] = profile.username.clone();
        cells[6] = profile.stats.total_solved.to_string();
        cells[7] = profile.stats.easy_solved.to_string();
        cells[8] = profile.stats.medium_solved.to_string();
        cells[9] = profile.stats.hard_solved.to_string();
        cells[10] = serde_json::to_string(&profile.recent_submissions)?;
    }

    cells[11] = record.info.clone().unwrap_or_default();

    Ok(cells)
}
