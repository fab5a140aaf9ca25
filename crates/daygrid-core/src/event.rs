//! Calendar event descriptors consumed by the layout pass.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// A calendar event supplied by the host.
///
/// The layout pass reads the half-open `[start_time, end_time)` interval
/// and the all-day flag; everything else is carried through untouched so
/// the host can correlate output attributes with its own records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDescriptor {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// All-day events are laid out in a separate lane by the host.
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub metadata: serde_json::Value,
}

impl EventDescriptor {
    /// Create a new event descriptor
    ///
    /// # Panics
    /// Panics if `end_time <= start_time`. Use [`try_new`](Self::try_new) for a non-panicking version.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self::try_new(id, title, start_time, end_time)
            .expect("EventDescriptor::new: end_time must be greater than start_time")
    }

    /// Create a new event descriptor, returning a Result
    ///
    /// # Errors
    /// Returns an error if `end_time <= start_time`
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if end_time <= start_time {
            return Err(ValidationError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            start_time,
            end_time,
            all_day: false,
            tags: Vec::new(),
            metadata: serde_json::json!({}),
        })
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Check if this event's interval overlaps another's.
    ///
    /// Touching intervals (one ends exactly when the other starts) do not
    /// overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }

    /// Check if this event overlaps a half-open time range
    pub fn overlaps_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && self.end_time > start
    }

    /// Whether the interval is well-formed (`end_time > start_time`).
    pub fn has_valid_interval(&self) -> bool {
        self.end_time > self.start_time
    }

    /// Mark as all-day
    pub fn with_all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// Load a JSON array of event descriptors from a file.
///
/// # Errors
/// Returns an error if the file cannot be read or does not contain a
/// JSON array of descriptors.
pub fn load_events(path: &Path) -> Result<Vec<EventDescriptor>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
