use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Thin projection of an event used by the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    /// Venue-local time of day, free text.
    pub time: String,
    pub venue: String,
    pub short_description: String,
}

/// Full event record. Summaries are always projected from one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
    pub short_description: String,
    pub full_description: String,
    pub organizer_name: String,
    pub organizer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_phone: Option<String>,
    pub map_placeholder: String,
}

impl EventDetail {
    pub fn summary(&self) -> EventSummary {
        EventSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            date: self.date,
            time: self.time.clone(),
            venue: self.venue.clone(),
            short_description: self.short_description.clone(),
        }
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.organizer_email)
    }

    pub fn tel_href(&self) -> Option<String> {
        self.organizer_phone
            .as_deref()
            .map(|phone| format!("tel:{phone}"))
    }
}

/// Long US-style date, e.g. `Sunday, September 15, 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
