//! Semicolon-delimited CSV export.
//!
//! One header row, then one row per task with the date in display format.
//! Output is UTF-8 throughout, so non-ASCII titles and descriptions survive.
//! Writing is best effort: an I/O failure surfaces with its reason and any
//! partially written file is left as-is.

use crate::dates;
use crate::db::Database;
use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADERS: [&str; 6] = ["ID", "Title", "Description", "Date", "Status", "Category"];

/// Write every task (unfiltered, store ordering) to `writer`.
/// Returns the number of task rows written.
pub fn export_csv<W: Write>(db: &Database, writer: W) -> Result<usize> {
    let tasks = db.list_tasks("", None, None)?;

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);

    wtr.write_record(HEADERS)?;

    for task in &tasks {
        wtr.write_record([
            task.id.to_string(),
            task.title.clone(),
            task.description.clone().unwrap_or_default(),
            dates::format_display_date(task.due_date),
            task.status.as_str().to_string(),
            task.category.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(tasks.len())
}

/// Export to a file path, creating or truncating it.
pub fn export_csv_file<P: AsRef<Path>>(db: &Database, path: P) -> Result<usize> {
    let file = File::create(path)?;
    export_csv(db, file)
}
