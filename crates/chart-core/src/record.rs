// File: crates/chart-core/src/record.rs
// Summary: Raw dataset records and their normalized (numeric/temporal) form.

use chrono::{Duration, NaiveDate, NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Deserializer};

use crate::error::{ChartError, Result};

/// Year of the shared anchor date. Only the time of day is meaningful.
pub const ANCHOR_YEAR: i32 = 1990;

/// Tick and tooltip format for race times.
pub const CLOCK_FORMAT: &str = "%M:%S";

/// One entry of the cyclist dataset, as received.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    /// Digits; the live dataset sends a number, older copies a string.
    #[serde(deserialize_with = "text_or_number")]
    pub place: String,
    pub time: String,
    pub year: i32,
    pub name: String,
    pub nationality: String,
    #[serde(default)]
    pub doping: String,
    #[serde(rename = "URL", default)]
    pub url: String,
}

fn text_or_number<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }
    Ok(match TextOrNumber::deserialize(d)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub place: u32,
    /// Elapsed race time on the anchor date.
    pub time: NaiveDateTime,
    /// The `M:SS` text the time was parsed from.
    pub raw_time: String,
    pub year: i32,
    pub name: String,
    pub nationality: String,
    pub doping: String,
    pub url: String,
}

impl NormalizedRecord {
    /// True when the record carries a doping allegation.
    pub fn has_allegation(&self) -> bool {
        !self.doping.is_empty()
    }

    /// Time as ISO-8601 UTC with milliseconds, e.g. `1990-01-01T00:36:50.000Z`.
    pub fn iso_time(&self) -> String {
        self.time.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Time rendered as `MM:SS`.
    pub fn clock_label(&self) -> String {
        self.time.format(CLOCK_FORMAT).to_string()
    }
}

/// Midnight of the anchor date.
pub fn anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(ANCHOR_YEAR, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Strictly parse `M:SS` (one or more minute digits, exactly two second
/// digits below 60) into a time on the anchor date. Minutes past 59 roll
/// into the hour.
pub fn parse_race_time(index: usize, value: &str) -> Result<NaiveDateTime> {
    let malformed = || ChartError::MalformedRecord { index, field: "Time", value: value.to_string() };

    let (min, sec) = value.split_once(':').ok_or_else(malformed)?;
    if min.is_empty() || !min.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    if sec.len() != 2 || !sec.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let minutes: i64 = min.parse().map_err(|_| malformed())?;
    let seconds: i64 = sec.parse().map_err(|_| malformed())?;
    if seconds >= 60 {
        return Err(malformed());
    }

    Duration::try_minutes(minutes)
        .and_then(|m| anchor().checked_add_signed(m + Duration::seconds(seconds)))
        .ok_or_else(malformed)
}

/// Parse the rank field; digits only.
pub fn parse_place(index: usize, value: &str) -> Result<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChartError::MalformedRecord { index, field: "Place", value: value.to_string() });
    }
    trimmed
        .parse()
        .map_err(|_| ChartError::MalformedRecord { index, field: "Place", value: value.to_string() })
}

impl RawRecord {
    pub fn normalize(self, index: usize) -> Result<NormalizedRecord> {
        let place = parse_place(index, &self.place)?;
        let time = parse_race_time(index, &self.time)?;
        Ok(NormalizedRecord {
            place,
            time,
            raw_time: self.time,
            year: self.year,
            name: self.name,
            nationality: self.nationality,
            doping: self.doping,
            url: self.url,
        })
    }
}

/// Normalize every record, preserving order and cardinality.
/// Fails on the first malformed record.
pub fn normalize(raw: Vec<RawRecord>) -> Result<Vec<NormalizedRecord>> {
    let out = raw
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.normalize(i))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(records = out.len(), "normalized dataset");
    Ok(out)
}
