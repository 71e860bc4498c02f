use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use ical::parser::ical::component::IcalEvent;
use serde::{Deserialize, Serialize};

/// A calendar entry mapped out of a parsed ICS feed
///
/// Serialized with PascalCase keys, the shape the dashboard frontend
/// has always consumed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub description: String,
    pub location: String,
    pub summary: String,
    pub id: String,
}

impl From<&IcalEvent> for Event {
    fn from(entry: &IcalEvent) -> Self {
        Event {
            start: property(entry, "DTSTART").and_then(|v| parse_ical_time(&v)),
            end: property(entry, "DTEND").and_then(|v| parse_ical_time(&v)),
            created: property(entry, "CREATED").and_then(|v| parse_ical_time(&v)),
            modified: property(entry, "LAST-MODIFIED").and_then(|v| parse_ical_time(&v)),
            description: property(entry, "DESCRIPTION").unwrap_or_default(),
            location: property(entry, "LOCATION").unwrap_or_default(),
            summary: property(entry, "SUMMARY").unwrap_or_default(),
            id: property(entry, "UID").unwrap_or_default(),
        }
    }
}

fn property(entry: &IcalEvent, name: &str) -> Option<String> {
    entry
        .properties
        .iter()
        .find(|p| p.name == name)
        .and_then(|p| p.value.clone())
}

/// Parse an ICS timestamp value
///
/// Handles `YYYYMMDDTHHMMSSZ`, its naive local variant, and date-only
/// `YYYYMMDD` values (all-day events). Naive values are taken as UTC.
pub fn parse_ical_time(value: &str) -> Option<DateTime<Utc>> {
    if value.contains('T') {
        let naive = value.strip_suffix('Z').unwrap_or(value);
        NaiveDateTime::parse_from_str(naive, "%Y%m%dT%H%M%S")
            .ok()
            .map(|dt| dt.and_utc())
    } else {
        NaiveDate::parse_from_str(value, "%Y%m%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}
