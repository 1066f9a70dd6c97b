//! Summary structs describing the whole (unfiltered) dataset.

/// Global minimum and maximum cost across all records, in billions USD.
///
/// Computed once from the unfiltered dataset; the radius scale keeps using it
/// while filters are applied so mark sizes stay comparable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostExtent {
    pub min: f64,
    pub max: f64,
}

/// What the loader exposes about the full dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub record_count: usize,
    /// `None` when the dataset has no records.
    pub cost_extent: Option<CostExtent>,
    /// Distinct years present, most recent first.
    pub years_desc: Vec<i32>,
}
