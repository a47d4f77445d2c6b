// Data models for the task list

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Row id assigned by the task table
pub type TaskId = i64;

/// Id value meaning "not yet assigned by the store"
pub const UNASSIGNED_ID: TaskId = 0;

/// A single task row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub important: bool,
    pub completed: bool,
    /// Creation time in milliseconds since epoch, never changed after insert
    pub created: i64,
    pub id: TaskId,
}

impl Task {
    /// New, not yet persisted task created now
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            important: false,
            completed: false,
            created: now_ms(),
            id: UNASSIGNED_ID,
        }
    }

    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Whether the store has assigned an id to this task
    pub fn is_persisted(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    /// Creation time rendered as a local date-time string
    pub fn created_date_formatted(&self) -> String {
        match DateTime::from_timestamp_millis(self.created) {
            Some(utc) => utc.with_timezone(&Local).format("%b %-d, %Y %-I:%M:%S %p").to_string(),
            None => String::new(),
        }
    }
}

/// Secondary ordering of the visible list (importance always sorts first)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    ByName,
    #[default]
    ByDate,
}

impl SortOrder {
    /// Persisted key-value representation
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::ByName => "BY_NAME",
            SortOrder::ByDate => "BY_DATE",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted filter settings: sort order and hide-completed flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPreferences {
    pub sort_order: SortOrder,
    pub hide_completed: bool,
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms() {
        let ts = now_ms();
        assert!(ts > 0);
        // Should be reasonable timestamp (after year 2020)
        assert!(ts > 1_600_000_000_000);
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.name, "Buy milk");
        assert!(!task.important);
        assert!(!task.completed);
        assert_eq!(task.id, UNASSIGNED_ID);
        assert!(!task.is_persisted());
        assert!(task.created > 1_600_000_000_000);
    }

    #[test]
    fn test_sort_order_serialization() {
        let json = serde_json::to_string(&SortOrder::ByName).unwrap();
        assert_eq!(json, "\"BY_NAME\"");

        let order: SortOrder = serde_json::from_str("\"BY_DATE\"").unwrap();
        assert_eq!(order, SortOrder::ByDate);
        assert_eq!(SortOrder::ByDate.to_string(), "BY_DATE");
    }

    #[test]
    fn test_filter_preferences_defaults() {
        let prefs = FilterPreferences::default();
        assert_eq!(prefs.sort_order, SortOrder::ByDate);
        assert!(!prefs.hide_completed);

        // Missing keys fall back to defaults
        let prefs: FilterPreferences = serde_json::from_str(r#"{"hide_completed":true}"#).unwrap();
        assert_eq!(prefs.sort_order, SortOrder::ByDate);
        assert!(prefs.hide_completed);
    }

    #[test]
    fn test_created_date_formatted() {
        let mut task = Task::new("x");
        task.created = 1_700_000_000_000;
        let formatted = task.created_date_formatted();
        assert!(formatted.contains("2023"));
    }
}
