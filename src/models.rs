use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The whole persisted record. Five categories, each keyed by the day number
/// as a string ("1".."21"), matching the on-disk JSON layout exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressData {
    pub progress: BTreeMap<String, DayEntry>,
    pub notes: BTreeMap<String, String>,
    pub uploads: BTreeMap<String, UploadInfo>,
    pub time_spent: BTreeMap<String, u32>,
    pub resources_used: BTreeMap<String, Vec<String>>,
}

impl ProgressData {
    /// True iff the day has a progress entry with the completed flag set.
    /// An absent entry means "not done" - incompleteness is represented by
    /// deleting the entry, never by storing `completed: false`.
    pub fn is_completed(&self, day: u8) -> bool {
        self.progress
            .get(&day_key(day))
            .map(|e| e.completed)
            .unwrap_or(false)
    }

    pub fn completion_date(&self, day: u8) -> Option<&str> {
        self.progress
            .get(&day_key(day))
            .and_then(|e| e.date_completed.as_deref())
    }

    /// Minutes recorded for the day, zero if none.
    pub fn time_spent_minutes(&self, day: u8) -> u32 {
        self.time_spent.get(&day_key(day)).copied().unwrap_or(0)
    }
}

/// Map key for a day number. Day numbers round-trip as strings in the file.
pub fn day_key(day: u8) -> String {
    day.to_string()
}

/// Per-day completion record inside the `progress` category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_completed: Option<String>,
}

/// Metadata about an uploaded exercise solution. Only the filename and the
/// upload timestamp are kept; file contents are not copied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadInfo {
    pub filename: String,
    pub upload_time: String,
}

/// One row of the dense 21-day projection used by dashboards and reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRow {
    pub day: u8,
    pub completed: bool,
    pub completion_date: Option<String>,
    pub time_spent_minutes: u32,
}

// JSON output wrapper for CLI
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
