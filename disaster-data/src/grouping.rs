//! Grouping of records into timeline rows.

use disaster_core::record::DisasterRecord;
use std::collections::BTreeMap;

/// A record together with its derived max-of-year flag.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDisaster {
    pub record: DisasterRecord,
    /// True iff no record of the same year costs more. Ties all get the flag.
    pub is_max_of_year: bool,
}

/// All records of one year, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup {
    pub year: i32,
    pub disasters: Vec<RankedDisaster>,
}

/// Bucket records by year, most recent year first, flagging each year's
/// costliest record(s).
///
/// The flag is recomputed from scratch on every call, so it always reflects
/// the records that are actually in the group.
pub fn group_by_year(records: &[DisasterRecord]) -> Vec<YearGroup> {
    let mut by_year: BTreeMap<i32, Vec<&DisasterRecord>> = BTreeMap::new();
    for record in records {
        by_year.entry(record.year).or_default().push(record);
    }

    by_year
        .into_iter()
        .rev()
        .map(|(year, records)| {
            let max_cost = records
                .iter()
                .map(|r| r.cost)
                .fold(f64::NEG_INFINITY, f64::max);
            let disasters = records
                .into_iter()
                .map(|record| RankedDisaster {
                    is_max_of_year: record.cost == max_cost,
                    record: record.clone(),
                })
                .collect();
            YearGroup { year, disasters }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use disaster_core::category::Category;

    fn record(name: &str, cost: f64, year: i32) -> DisasterRecord {
        DisasterRecord {
            name: name.to_string(),
            category: Category::SevereStorm,
            cost,
            year,
            date: NaiveDate::from_ymd_opt(year, 5, 1).unwrap(),
        }
    }

    #[test]
    fn groups_are_sorted_by_year_descending() {
        let records = vec![
            record("a", 1.0, 1999),
            record("b", 2.0, 2011),
            record("c", 3.0, 1980),
            record("d", 4.0, 2011),
        ];
        let groups = group_by_year(&records);
        let years: Vec<i32> = groups.iter().map(|g| g.year).collect();
        assert_eq!(years, vec![2011, 1999, 1980]);

        let names: Vec<&str> = groups[0]
            .disasters
            .iter()
            .map(|d| d.record.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "d"], "dataset order inside a year");
    }

    #[test]
    fn only_the_costliest_record_is_flagged() {
        let records = vec![
            record("Tornado Outbreak", 3.2, 2011),
            record("Joplin", 10.4, 2011),
            record("Texas Drought", 8.0, 2011),
        ];
        let groups = group_by_year(&records);
        let flags: Vec<(&str, bool)> = groups[0]
            .disasters
            .iter()
            .map(|d| (d.record.name.as_str(), d.is_max_of_year))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("Tornado Outbreak", false),
                ("Joplin", true),
                ("Texas Drought", false)
            ]
        );
    }

    #[test]
    fn ties_are_all_flagged() {
        let records = vec![record("x", 5.0, 1990), record("y", 5.0, 1990), record("z", 1.0, 1990)];
        let groups = group_by_year(&records);
        let flagged = groups[0].disasters.iter().filter(|d| d.is_max_of_year).count();
        assert_eq!(flagged, 2);
    }

    #[test]
    fn flag_follows_the_filtered_subset() {
        // with the costliest record gone, the next one becomes the max
        let records = vec![record("small", 1.0, 2000), record("medium", 2.0, 2000)];
        let groups = group_by_year(&records[..1]);
        assert!(groups[0].disasters[0].is_max_of_year);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_year(&[]).is_empty());
    }
}
