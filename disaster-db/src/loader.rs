//! CSV data loading for populating the in-memory SQLite database.
//!
//! # CSV Format
//!
//! Header row required. Columns used: `name`, `category`, `cost` (billions USD),
//! `year`, `mid` (event midpoint, `YYYY-MM-DD`). Other columns are ignored.
//!
//! ```text
//! name,category,cost,year,mid
//! Hurricane Harvey,tropical-cyclone,125,2017,2017-08-28
//! ```

use crate::Database;
use disaster_core::record::parse_disasters;
use disaster_utils::dates::format_date;
use rusqlite::params;

impl Database {
    /// Load disaster records from a CSV string.
    ///
    /// Every row is parsed before anything is written, and the inserts run in
    /// a single transaction: a malformed row leaves the database untouched.
    /// Returns the number of records inserted.
    pub fn load_disasters(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = parse_disasters(csv_data)?;

        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO disasters (name, category, cost, year, date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for record in &records {
                stmt.execute(params![
                    record.name,
                    record.category.id(),
                    record.cost,
                    record.year,
                    format_date(&record.date),
                ])?;
            }
        }
        tx.commit()?;

        log::info!("[Disasters] loader: Loaded {} disasters", records.len());
        Ok(records.len())
    }
}
