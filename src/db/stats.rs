//! Aggregation queries for the stats view.

use super::Database;
use crate::error::Result;
use crate::types::Stats;
use std::collections::HashMap;

impl Database {
    /// Status and category occurrence counts over the entire unfiltered
    /// table.
    pub fn stats(&self) -> Result<Stats> {
        self.with_conn(|conn| {
            let by_status = group_counts(conn, "SELECT status, COUNT(*) FROM tasks GROUP BY status")?;
            let by_category =
                group_counts(conn, "SELECT category, COUNT(*) FROM tasks GROUP BY category")?;

            Ok(Stats {
                by_status,
                by_category,
            })
        })
    }
}

fn group_counts(conn: &rusqlite::Connection, sql: &str) -> Result<HashMap<String, i64>> {
    let mut stmt = conn.prepare(sql)?;
    let counts = stmt
        .query_map([], |row| {
            let key: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            Ok((key, count))
        })?
        .filter_map(|r| r.ok())
        .collect();
    Ok(counts)
}
