//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// - `disasters` - one row per event. `id` follows CSV order so filtered
///   queries return records in dataset order. `date` is stored as
///   "YYYY-MM-DD" text and `category` as its kebab-case identifier.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS disasters (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        cost REAL NOT NULL CHECK (cost >= 0),
        year INTEGER NOT NULL,
        date TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_disasters_category ON disasters(category);
    CREATE INDEX IF NOT EXISTS idx_disasters_year ON disasters(year);
    "#
}
