//! Calendar projection: month bucketing and display classification.
//!
//! The projector derives views from the store on every call; nothing is
//! cached, so a re-query after any mutation always reflects current state.

use crate::db::Database;
use crate::error::Result;
use crate::types::{DensityTier, DisplayState, Status, Task};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Map each day of the month to its task count. Days with no tasks are
/// absent from the map, not zero-valued.
pub fn bucket_by_day(db: &Database, year: i32, month: u32) -> Result<HashMap<u32, usize>> {
    let tasks = db.tasks_by_month(year, month)?;

    let mut buckets: HashMap<u32, usize> = HashMap::new();
    for task in &tasks {
        *buckets.entry(task.due_date.day()).or_insert(0) += 1;
    }

    Ok(buckets)
}

/// Classify a task for rendering.
///
/// Done wins regardless of date; an unfinished task strictly past due is
/// Overdue; otherwise the persisted status shows through. This is the single
/// classification path -- the persisted status field is never touched.
pub fn classify(task: &Task, today: NaiveDate) -> DisplayState {
    match task.status {
        Status::Done => DisplayState::Done,
        _ if task.due_date < today => DisplayState::Overdue,
        Status::InProgress => DisplayState::InProgress,
        Status::New => DisplayState::New,
    }
}

/// Display weight for a day's task count.
pub fn density_tier(count: usize) -> DensityTier {
    if count > 5 {
        DensityTier::High
    } else if count > 2 {
        DensityTier::Medium
    } else {
        DensityTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with(status: Status, due: NaiveDate) -> Task {
        Task {
            id: 1,
            title: "t".to_string(),
            description: None,
            due_date: due,
            status,
            category: "General".to_string(),
            created_at: 0,
        }
    }

    #[test]
    fn done_is_never_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let past = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(
            classify(&task_with(Status::Done, past), today),
            DisplayState::Done
        );
    }

    #[test]
    fn unfinished_past_due_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert_eq!(
            classify(&task_with(Status::New, yesterday), today),
            DisplayState::Overdue
        );
        assert_eq!(
            classify(&task_with(Status::InProgress, yesterday), today),
            DisplayState::Overdue
        );
    }

    #[test]
    fn due_today_is_not_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(
            classify(&task_with(Status::New, today), today),
            DisplayState::New
        );
        assert_eq!(
            classify(&task_with(Status::InProgress, today), today),
            DisplayState::InProgress
        );
    }

    #[test]
    fn density_tier_boundaries() {
        assert_eq!(density_tier(1), DensityTier::Low);
        assert_eq!(density_tier(2), DensityTier::Low);
        assert_eq!(density_tier(3), DensityTier::Medium);
        assert_eq!(density_tier(5), DensityTier::Medium);
        assert_eq!(density_tier(6), DensityTier::High);
    }
}
