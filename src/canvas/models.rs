use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course as returned by `api/v1/courses`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub calendar: CourseCalendar,
}

/// Per-course calendar link; the feed URL travels under the `ics` key
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CourseCalendar {
    #[serde(rename = "ics")]
    pub url: String,
}

/// An assignment as returned by `api/v1/courses/{id}/assignments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
}

/// A calendar event as returned by `api/v1/calendar_events`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalendarEvent {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub context_code: String,
    #[serde(default)]
    pub hidden: bool,
}
