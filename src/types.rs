//! Core types for taskdeck.

use crate::error::StoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The fixed category list the UI offers. The store itself accepts free-form
/// text, so older databases with other values still load.
pub const CATEGORIES: &[&str] = &["Work", "Study", "Personal", "Family", "General"];

/// Category applied when none is given.
pub const DEFAULT_CATEGORY: &str = "General";

/// Persisted lifecycle stamp for a task.
///
/// "Overdue" is deliberately absent: it is a derived display state (see
/// [`DisplayState`]) and is never written to the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    New,
    InProgress,
    Done,
}

impl Status {
    /// Storage representation, used both in SQL and in exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::New => "New",
            Status::InProgress => "InProgress",
            Status::Done => "Done",
        }
    }

    /// Parse the exact storage representation.
    pub fn from_storage(s: &str) -> Result<Self, StoreError> {
        match s {
            "New" => Ok(Status::New),
            "InProgress" => Ok(Status::InProgress),
            "Done" => Ok(Status::Done),
            other => Err(StoreError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-only classification of a task for rendering.
///
/// Mirrors [`Status`] plus the derived `Overdue` state for unfinished tasks
/// whose due date has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    New,
    InProgress,
    Done,
    Overdue,
}

impl DisplayState {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayState::New => "New",
            DisplayState::InProgress => "InProgress",
            DisplayState::Done => "Done",
            DisplayState::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display weight for a calendar day's task count. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for DensityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DensityTier::Low => "Low",
            DensityTier::Medium => "Medium",
            DensityTier::High => "High",
        };
        f.write_str(s)
    }
}

/// A titled, dated unit of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub status: Status,
    pub category: String,
    pub created_at: i64,
}

/// Occurrence counts over the whole table, for the stats view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    pub by_status: HashMap<String, i64>,
    pub by_category: HashMap<String, i64>,
}
