//! Top-level timeline state: dataset, category selection, view and dispatcher.

use crate::config::ChartConfig;
use crate::dispatch::{CategoryDispatcher, SelectionPublisher};
use crate::legend::{self, LabelStyle, DEFAULT_LABEL_STYLE};
use crate::view::TimelineView;
use disaster_core::category::Category;
use disaster_core::record::filter_by_categories;
use disaster_core::selection::SelectionState;
use disaster_db::models::DatasetSummary;
use disaster_db::Database;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Owns the state the timeline page needs for its whole lifetime.
///
/// The dispatcher's single listener holds the full dataset and the view: on
/// every "categories changed" event it swaps in the filtered records and
/// re-renders.
#[derive(Debug)]
pub struct TimelineController {
    summary: DatasetSummary,
    selection: SelectionState,
    /// Labels keep their default look until the first legend click.
    legend_clicked: bool,
    view: Rc<RefCell<TimelineView>>,
    dispatcher: CategoryDispatcher,
}

impl TimelineController {
    /// Build the view over the full dataset in `db` and wire the filter listener.
    ///
    /// The dataset is read once here; later filtering works on that snapshot.
    pub fn new(db: &Database, config: ChartConfig) -> anyhow::Result<Self> {
        let summary = db.query_summary()?;
        let all = db.query_disasters()?;
        let view = Rc::new(RefCell::new(TimelineView::new(config, all.clone(), &summary)));

        let mut dispatcher = CategoryDispatcher::new();
        let listener_view = Rc::clone(&view);
        dispatcher.on_filter_categories(move |selected| {
            let mut view = listener_view.borrow_mut();
            view.set_data(filter_by_categories(&all, selected));
            view.update_vis();
        });

        Ok(Self {
            summary,
            selection: SelectionState::new(),
            legend_clicked: false,
            view,
            dispatcher,
        })
    }

    /// Legend click on the entry at `index`; `None` when the index does not resolve.
    pub fn click_legend_entry(&mut self, index: usize) -> Option<bool> {
        let selected = legend::toggle_entry(&mut self.selection, index, &mut self.dispatcher)?;
        self.legend_clicked = true;
        Some(selected)
    }

    /// Current look of a legend label.
    pub fn legend_label_style(&self, category: Category) -> LabelStyle {
        if self.legend_clicked {
            legend::label_style(&self.selection, category)
        } else {
            DEFAULT_LABEL_STYLE
        }
    }

    /// Toggle a category directly and publish the new selection.
    pub fn toggle_category(&mut self, category: Category) -> bool {
        let selected = self.selection.toggle(category);
        self.dispatcher.publish(self.selection.categories());
        selected
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    pub fn view(&self) -> Ref<'_, TimelineView> {
        self.view.borrow()
    }
}
