//! The timeline view: working dataset, scales, axes and the keyed scene.

use crate::arc::ArcGenerator;
use crate::axis::{month_axis, year_axis, Axis};
use crate::config::ChartConfig;
use crate::grouping::group_by_year;
use crate::scales::{BandScale, SqrtScale, TimeScale};
use crate::scene::{JoinStats, Projection, Scene};
use disaster_core::record::DisasterRecord;
use disaster_db::models::{CostExtent, DatasetSummary};
use disaster_utils::dates::reference_year_bounds;

/// Owns everything needed to draw the timeline for the current working dataset.
///
/// The working dataset is replaced wholesale on each filter change. The cost
/// extent and the list of years come from the unfiltered dataset and never
/// change, so neither mark sizes nor row positions move when filtering.
#[derive(Debug, Clone)]
pub struct TimelineView {
    config: ChartConfig,
    data: Vec<DisasterRecord>,
    cost_extent: CostExtent,
    x_scale: TimeScale,
    y_scale: BandScale<i32>,
    radius_scale: SqrtScale,
    arc: ArcGenerator,
    scene: Scene,
    x_axis: Axis,
    y_axis: Axis,
}

impl TimelineView {
    /// Build the view over the full dataset and render it once.
    pub fn new(config: ChartConfig, data: Vec<DisasterRecord>, summary: &DatasetSummary) -> Self {
        let cost_extent = summary
            .cost_extent
            .unwrap_or(CostExtent { min: 0.0, max: 0.0 });
        let x_scale = TimeScale::new(reference_year_bounds(), (0.0, config.width()));
        let y_scale = BandScale::new(summary.years_desc.iter().copied(), (0.0, config.height()));
        let radius_scale = SqrtScale::new(
            (cost_extent.min, cost_extent.max),
            (config.min_pixel, config.max_pixel),
        );
        let x_axis = month_axis(&x_scale);
        let y_axis = year_axis(&y_scale, config.width());

        let mut view = Self {
            config,
            data,
            cost_extent,
            x_scale,
            y_scale,
            radius_scale,
            arc: ArcGenerator::lower_half(),
            scene: Scene::new(),
            x_axis,
            y_axis,
        };
        view.update_vis();
        view
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Inner chart width.
    pub fn width(&self) -> f64 {
        self.config.width()
    }

    /// Inner chart height.
    pub fn height(&self) -> f64 {
        self.config.height()
    }

    pub fn data(&self) -> &[DisasterRecord] {
        &self.data
    }

    /// Replace the working dataset. Takes effect on the next [`update_vis`](Self::update_vis).
    pub fn set_data(&mut self, data: Vec<DisasterRecord>) {
        self.data = data;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    pub fn bandwidth(&self) -> f64 {
        self.y_scale.bandwidth()
    }

    /// Mark radius for a cost, from the unfiltered cost extent.
    pub fn radius(&self, cost: f64) -> f64 {
        self.radius_scale.scale(cost)
    }

    /// Prepare scales and grouped data, then render.
    pub fn update_vis(&mut self) -> JoinStats {
        self.radius_scale = SqrtScale::new(
            (self.cost_extent.min, self.cost_extent.max),
            (self.config.min_pixel, self.config.max_pixel),
        );
        self.render_vis()
    }

    fn render_vis(&mut self) -> JoinStats {
        let groups = group_by_year(&self.data);
        let projection = Projection {
            x: &self.x_scale,
            y: &self.y_scale,
            radius: &self.radius_scale,
            arc: &self.arc,
        };
        let stats = self.scene.join(&groups, projection);

        self.x_axis = month_axis(&self.x_scale);
        self.y_axis = year_axis(&self.y_scale, self.config.width());

        log::debug!(
            "[Disasters] render: {} records in {} years, years {:?}, disasters {:?}",
            self.data.len(),
            groups.len(),
            stats.years,
            stats.disasters
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use disaster_core::category::Category;

    fn record(name: &str, category: Category, cost: f64, year: i32) -> DisasterRecord {
        DisasterRecord {
            name: name.to_string(),
            category,
            cost,
            year,
            date: NaiveDate::from_ymd_opt(year, 3, 1).unwrap(),
        }
    }

    fn dataset() -> Vec<DisasterRecord> {
        vec![
            record("Big", Category::TropicalCyclone, 144.0, 2012),
            record("Small", Category::Flooding, 1.0, 2012),
            record("Medium", Category::Flooding, 36.0, 1998),
        ]
    }

    fn summary() -> DatasetSummary {
        DatasetSummary {
            record_count: 3,
            cost_extent: Some(CostExtent { min: 1.0, max: 144.0 }),
            years_desc: vec![2012, 1998],
        }
    }

    #[test]
    fn new_view_renders_full_dataset() {
        let view = TimelineView::new(ChartConfig::default(), dataset(), &summary());
        assert_eq!(view.scene().disasters().count(), 3);
        assert_eq!(view.x_axis().ticks.len(), 12);
        assert_eq!(view.y_axis().ticks.len(), 2);
        assert_eq!(view.bandwidth(), 380.0);
    }

    #[test]
    fn radius_uses_global_extent() {
        let view = TimelineView::new(ChartConfig::default(), dataset(), &summary());
        assert_eq!(view.radius(1.0), 4.0);
        assert_eq!(view.radius(144.0), 140.0);
    }

    #[test]
    fn filtering_does_not_rescale_marks() {
        let mut view = TimelineView::new(ChartConfig::default(), dataset(), &summary());
        let medium_before = view.scene().find_disaster("Medium").unwrap().mark.path.clone();

        let floods: Vec<DisasterRecord> = dataset()
            .into_iter()
            .filter(|r| r.category == Category::Flooding)
            .collect();
        view.set_data(floods);
        view.update_vis();

        let medium_after = &view.scene().find_disaster("Medium").unwrap().mark.path;
        assert_eq!(&medium_before, medium_after);
        assert_eq!(view.radius(144.0), 140.0);
    }

    #[test]
    fn y_axis_keeps_all_years_when_filtered() {
        let mut view = TimelineView::new(ChartConfig::default(), dataset(), &summary());
        view.set_data(Vec::new());
        let stats = view.update_vis();
        assert_eq!(stats.years.exited, 2);
        assert!(view.scene().years().is_empty());
        let labels: Vec<&str> = view.y_axis().ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["2012", "1998"]);
    }

    #[test]
    fn update_vis_is_idempotent() {
        let mut view = TimelineView::new(ChartConfig::default(), dataset(), &summary());
        let before = view.scene().clone();
        let stats = view.update_vis();
        assert_eq!(stats.disasters.entered + stats.disasters.exited, 0);
        assert_eq!(view.scene(), &before);
    }

    #[test]
    fn empty_dataset_renders_nothing() {
        let empty = DatasetSummary {
            record_count: 0,
            cost_extent: None,
            years_desc: Vec::new(),
        };
        let view = TimelineView::new(ChartConfig::default(), Vec::new(), &empty);
        assert_eq!(view.scene().disasters().count(), 0);
        assert!(view.y_axis().ticks.is_empty());
    }
}
