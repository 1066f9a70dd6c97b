//! In-memory SQLite database layer for billion-dollar disaster records.
//!
//! The disasters CSV is fetched once at startup, parsed into
//! [`DisasterRecord`](disaster_core::record::DisasterRecord)s and inserted
//! into an in-memory SQLite database. The timeline then asks it for the
//! unfiltered summary (cost extent, known years) and for category-filtered
//! record lists on every legend change.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - Typed query methods returning the record and summary structs
//!
//! # Usage
//!
//! ```rust
//! use disaster_core::category::Category;
//! use disaster_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_disasters("name,category,cost,year,mid\nHurricane Harvey,tropical-cyclone,125,2017,2017-08-28\n").unwrap();
//!
//! let summary = db.query_summary().unwrap();
//! assert_eq!(summary.years_desc, vec![2017]);
//!
//! let cyclones = db.query_disasters_in(&[Category::TropicalCyclone]).unwrap();
//! assert_eq!(cyclones.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the disaster dataset.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// between the timeline controller and its filter listener in a
/// single-threaded WASM environment.
///
/// # Example
///
/// ```rust
/// use disaster_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_disasters("name,category,cost,year,mid\nBlizzard,winter-storm-freeze,4.2,1993,1993-03-13\n").unwrap();
/// let disasters = db.query_disasters().unwrap();
/// assert_eq!(disasters.len(), 1);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_disasters`](Self::load_disasters) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "name,category,cost,year,mid\nHurricane Andrew,tropical-cyclone,48.3,1992,1992-08-24\n";

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        // Both should reference the same underlying connection
        db.load_disasters(CSV).unwrap();
        let disasters = db2.query_disasters().unwrap();
        assert_eq!(disasters.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let disasters = db.query_disasters().unwrap();
        assert!(disasters.is_empty(), "New database should have no disasters");
    }
}
