use crate::category::Category;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use disaster_utils::dates;
use serde::Deserialize;

/// Raw CSV row as it appears in `disaster_costs.csv`.
///
/// Only the columns the timeline needs are declared; any extra columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DisasterRow {
    pub name: String,
    pub category: String,
    pub cost: String,
    pub year: String,
    /// Midpoint date of the event, "YYYY-MM-DD".
    pub mid: String,
}

/// A single billion-dollar disaster event.
#[derive(Debug, Clone, PartialEq)]
pub struct DisasterRecord {
    pub name: String,
    pub category: Category,
    /// Cost in billions of USD
    pub cost: f64,
    /// Grouping key for the timeline rows
    pub year: i32,
    pub date: NaiveDate,
}

impl DisasterRecord {
    /// The event date moved onto the reference leap year, used for x positioning.
    pub fn reference_date(&self) -> NaiveDate {
        dates::to_reference_year(&self.date)
    }
}

impl TryFrom<DisasterRow> for DisasterRecord {
    type Error = anyhow::Error;

    fn try_from(row: DisasterRow) -> Result<Self, Self::Error> {
        let category: Category = row.category.parse()?;
        let cost: f64 = row
            .cost
            .trim()
            .parse()
            .with_context(|| format!("invalid cost '{}'", row.cost))?;
        if !cost.is_finite() || cost < 0.0 {
            bail!("cost must be a non-negative number, got '{}'", row.cost);
        }
        let year: i32 = row
            .year
            .trim()
            .parse()
            .with_context(|| format!("invalid year '{}'", row.year))?;
        let date = dates::parse_date(&row.mid)?;

        Ok(DisasterRecord {
            name: row.name.trim().to_string(),
            category,
            cost,
            year,
            date,
        })
    }
}

/// The records whose category is in `selected`, in their original order.
///
/// An empty selection means no filter and keeps every record.
pub fn filter_by_categories(records: &[DisasterRecord], selected: &[Category]) -> Vec<DisasterRecord> {
    records
        .iter()
        .filter(|r| selected.is_empty() || selected.contains(&r.category))
        .cloned()
        .collect()
}

/// Parse the disasters CSV into records.
///
/// The whole parse fails on the first malformed row; the error carries the
/// 1-based line number of that row.
pub fn parse_disasters(csv_data: &str) -> anyhow::Result<Vec<DisasterRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut records = Vec::new();
    for (i, row) in rdr.deserialize::<DisasterRow>().enumerate() {
        // header occupies line 1
        let line = i + 2;
        let row = row.with_context(|| format!("malformed CSV row at line {}", line))?;
        let record = DisasterRecord::try_from(row)
            .with_context(|| format!("invalid disaster at line {}", line))?;
        records.push(record);
    }
    log::info!("[Disasters] parsed {} disaster records", records.len());
    Ok(records)
}

#[cfg(test)]
mod test {
    use super::*;

    const CSV: &str = "\
name,category,cost,year,start,end,mid
Hurricane Harvey,tropical-cyclone,125,2017,2017-08-25,2017-08-31,2017-08-28
Western Wildfires,drought-wildfire,18.7,2017,2017-06-01,2017-12-31,2017-09-15
Winter Storm,winter-storm-freeze, 5 ,2017,2017-01-02,2017-01-04,2017-01-03
";

    #[test]
    fn test_parse_disasters() {
        let records = parse_disasters(CSV).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Hurricane Harvey");
        assert_eq!(records[0].category, Category::TropicalCyclone);
        assert_eq!(records[0].cost, 125.0);
        assert_eq!(records[0].year, 2017);
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2017, 8, 28).unwrap()
        );
        assert_eq!(records[2].cost, 5.0);
    }

    #[test]
    fn test_reference_date_keeps_month_and_day() {
        let records = parse_disasters(CSV).unwrap();
        assert_eq!(
            records[1].reference_date(),
            NaiveDate::from_ymd_opt(2000, 9, 15).unwrap()
        );
    }

    #[test]
    fn test_malformed_date_fails_whole_load() {
        let csv = "\
name,category,cost,year,mid
Good,flooding,2.5,1993,1993-07-01
Bad,flooding,2.5,1993,July 1993
";
        let err = parse_disasters(csv).unwrap_err();
        assert!(format!("{:#}", err).contains("line 3"));
    }

    #[test]
    fn test_rejects_negative_and_non_numeric_cost() {
        let negative = "name,category,cost,year,mid\nX,flooding,-1,1993,1993-07-01\n";
        assert!(parse_disasters(negative).is_err());

        let nan = "name,category,cost,year,mid\nX,flooding,NaN,1993,1993-07-01\n";
        assert!(parse_disasters(nan).is_err());

        let text = "name,category,cost,year,mid\nX,flooding,lots,1993,1993-07-01\n";
        assert!(parse_disasters(text).is_err());
    }

    #[test]
    fn test_rejects_unknown_category() {
        let csv = "name,category,cost,year,mid\nX,earthquake,1,1994,1994-01-17\n";
        let err = parse_disasters(csv).unwrap_err();
        assert!(format!("{:#}", err).contains("earthquake"));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "name,category,cost,year\nX,flooding,1,1994\n";
        assert!(parse_disasters(csv).is_err());
    }

    #[test]
    fn test_filter_keeps_selected_categories_in_order() {
        let records = parse_disasters(CSV).unwrap();
        let picked = filter_by_categories(
            &records,
            &[Category::WinterStormFreeze, Category::TropicalCyclone],
        );
        let names: Vec<&str> = picked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Hurricane Harvey", "Winter Storm"]);
    }

    #[test]
    fn test_filter_with_empty_selection_keeps_everything() {
        let records = parse_disasters(CSV).unwrap();
        assert_eq!(filter_by_categories(&records, &[]), records);
        assert!(filter_by_categories(&records, &[Category::Flooding]).is_empty());
    }

    #[test]
    fn test_header_only_is_empty() {
        let records = parse_disasters("name,category,cost,year,mid\n").unwrap();
        assert!(records.is_empty());
    }
}
