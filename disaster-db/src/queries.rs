//! Typed query methods for retrieving disasters from the database.
//!
//! Record queries return rows in CSV order. The summary queries always look
//! at the whole table, whatever filter the timeline currently shows.

use crate::models::{CostExtent, DatasetSummary};
use crate::Database;
use anyhow::Context;
use disaster_core::category::Category;
use disaster_core::record::DisasterRecord;
use disaster_utils::dates::parse_date;
use rusqlite::{params_from_iter, Row};

type RawDisaster = (String, String, f64, i32, String);

fn raw_disaster(row: &Row<'_>) -> rusqlite::Result<RawDisaster> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
}

fn into_record((name, category, cost, year, date): RawDisaster) -> anyhow::Result<DisasterRecord> {
    Ok(DisasterRecord {
        category: category
            .parse()
            .with_context(|| format!("stored disaster '{}'", name))?,
        date: parse_date(&date)?,
        name,
        cost,
        year,
    })
}

impl Database {
    /// Get every disaster, in dataset order.
    pub fn query_disasters(&self) -> anyhow::Result<Vec<DisasterRecord>> {
        self.query_disasters_in(&[])
    }

    /// Get the disasters whose category is in `categories`, in dataset order.
    ///
    /// An empty slice means no filter and returns the full dataset.
    pub fn query_disasters_in(&self, categories: &[Category]) -> anyhow::Result<Vec<DisasterRecord>> {
        let conn = self.conn.borrow();
        let sql = if categories.is_empty() {
            "SELECT name, category, cost, year, date FROM disasters ORDER BY id".to_string()
        } else {
            let placeholders = vec!["?"; categories.len()].join(", ");
            format!(
                "SELECT name, category, cost, year, date FROM disasters
                 WHERE category IN ({})
                 ORDER BY id",
                placeholders
            )
        };
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(categories.iter().map(|c| c.id())), raw_disaster)?
            .collect::<Result<Vec<_>, _>>()?;
        let records = rows
            .into_iter()
            .map(into_record)
            .collect::<anyhow::Result<Vec<_>>>()?;
        log::debug!(
            "[Disasters] query: query_disasters_in({:?}) returned {} records",
            categories,
            records.len()
        );
        Ok(records)
    }

    /// Global minimum and maximum cost, or `None` for an empty dataset.
    pub fn query_cost_extent(&self) -> anyhow::Result<Option<CostExtent>> {
        let conn = self.conn.borrow();
        let (min, max): (Option<f64>, Option<f64>) = conn.query_row(
            "SELECT MIN(cost), MAX(cost) FROM disasters",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(min.zip(max).map(|(min, max)| CostExtent { min, max }))
    }

    /// Distinct years present in the dataset, most recent first.
    pub fn query_years_desc(&self) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT year FROM disasters ORDER BY year DESC")?;
        let years = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        Ok(years)
    }

    /// Record count, global cost extent and known years of the full dataset.
    pub fn query_summary(&self) -> anyhow::Result<DatasetSummary> {
        let record_count: i64 = self
            .conn
            .borrow()
            .query_row("SELECT COUNT(*) FROM disasters", [], |row| row.get(0))?;
        let summary = DatasetSummary {
            record_count: record_count as usize,
            cost_extent: self.query_cost_extent()?,
            years_desc: self.query_years_desc()?,
        };
        log::info!(
            "[Disasters] query: summary {} records, {} years, extent {:?}",
            summary.record_count,
            summary.years_desc.len(),
            summary.cost_extent
        );
        Ok(summary)
    }
}
