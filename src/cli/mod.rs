//! CLI command definitions for taskdeck.
//!
//! This module defines the CLI structure using clap's derive macros along
//! with the parsers that turn user-facing filter words into store arguments.

use crate::error::StoreError;
use crate::types::{Status, CATEGORIES, DEFAULT_CATEGORY};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Local task tracker with due dates, a calendar view, and CSV export
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the task database (overrides config)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    Add(AddArgs),

    /// List tasks with optional filters
    List(ListArgs),

    /// Show tasks due on a specific day
    Day(DayArgs),

    /// Show day-by-day task counts for a month
    Month(MonthArgs),

    /// Edit a task's fields
    Edit(EditArgs),

    /// Mark a task as done
    Done {
        /// Task id
        id: i64,
    },

    /// Delete a task permanently
    Delete {
        /// Task id
        id: i64,
    },

    /// Show status and category counts
    Stats,

    /// Export all tasks to a semicolon-delimited CSV file
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Task title
    #[arg(long)]
    pub title: String,

    /// Optional description
    #[arg(long)]
    pub description: Option<String>,

    /// Due date in DD.MM.YYYY format
    #[arg(long)]
    pub due: String,

    /// Category: Work, Study, Personal, Family, or General
    #[arg(long, default_value = DEFAULT_CATEGORY)]
    pub category: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Substring to match against title or description (case-sensitive)
    #[arg(long, default_value = "")]
    pub search: String,

    /// Status filter: all, new, in-progress, or done
    #[arg(long, default_value = "all")]
    pub status: String,

    /// Category filter: all or one of the fixed categories
    #[arg(long, default_value = "all")]
    pub category: String,
}

#[derive(Args, Debug)]
pub struct DayArgs {
    /// Date in DD.MM.YYYY format
    pub date: String,
}

#[derive(Args, Debug)]
pub struct MonthArgs {
    /// Year (defaults to the current year)
    pub year: Option<i32>,

    /// Month 1-12 (defaults to the current month)
    pub month: Option<u32>,

    /// Step this many months forward from the selected month
    #[arg(long, default_value_t = 0, conflicts_with = "prev")]
    pub next: u32,

    /// Step this many months back from the selected month
    #[arg(long, default_value_t = 0)]
    pub prev: u32,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Task id
    pub id: i64,

    /// New title (unchanged if omitted)
    #[arg(long)]
    pub title: Option<String>,

    /// New description (unchanged if omitted)
    #[arg(long)]
    pub description: Option<String>,

    /// New due date in DD.MM.YYYY format (unchanged if omitted)
    #[arg(long)]
    pub due: Option<String>,

    /// New status: new, in-progress, or done (unchanged if omitted)
    #[arg(long)]
    pub status: Option<String>,

    /// New category (unchanged if omitted)
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,
}

/// Parse a status word as entered on the command line.
pub fn parse_status(s: &str) -> Result<Status, StoreError> {
    match s.to_ascii_lowercase().as_str() {
        "new" => Ok(Status::New),
        "in-progress" | "inprogress" | "in_progress" => Ok(Status::InProgress),
        "done" => Ok(Status::Done),
        other => Err(StoreError::UnknownStatus(other.to_string())),
    }
}

/// Parse a status filter word; "all" means no filter.
pub fn parse_status_filter(s: &str) -> Result<Option<Status>, StoreError> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    parse_status(s).map(Some)
}

/// Validate a category against the fixed list, returning its canonical
/// spelling.
pub fn parse_category(s: &str) -> Result<String, StoreError> {
    CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(s))
        .map(|c| (*c).to_string())
        .ok_or_else(|| StoreError::UnknownCategory(s.to_string()))
}

/// Parse a category filter word; "all" means no filter.
pub fn parse_category_filter(s: &str) -> Result<Option<String>, StoreError> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    parse_category(s).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_all_is_no_filter() {
        assert_eq!(parse_status_filter("all").unwrap(), None);
        assert_eq!(parse_status_filter("All").unwrap(), None);
    }

    #[test]
    fn status_words_parse() {
        assert_eq!(parse_status("new").unwrap(), Status::New);
        assert_eq!(parse_status("in-progress").unwrap(), Status::InProgress);
        assert_eq!(parse_status("Done").unwrap(), Status::Done);
        assert!(parse_status("overdue").is_err());
    }

    #[test]
    fn category_is_canonicalized() {
        assert_eq!(parse_category("work").unwrap(), "Work");
        assert_eq!(parse_category("General").unwrap(), "General");
        assert!(parse_category("chores").is_err());
    }
}
