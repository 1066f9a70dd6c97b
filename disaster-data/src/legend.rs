//! Legend layout and the category toggle behind a legend click.

use crate::config::ChartConfig;
use crate::dispatch::SelectionPublisher;
use disaster_core::category::Category;
use disaster_core::selection::SelectionState;

/// One clickable legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub index: usize,
    pub category: Category,
    /// Center of the color swatch
    pub circle: (f64, f64),
    /// Anchor of the title text
    pub text: (f64, f64),
}

/// Label look of a legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    pub fill: &'static str,
    pub font_weight: &'static str,
}

/// Look of every label until the legend is first clicked.
pub const DEFAULT_LABEL_STYLE: LabelStyle = LabelStyle {
    fill: "black",
    font_weight: "normal",
};

/// Entries for every category, two per row.
pub fn legend_entries(config: &ChartConfig) -> Vec<LegendEntry> {
    Category::ALL
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let x = (index % 2) as f64 * config.legend_column_width + config.legend_offset;
            let y = (index / 2) as f64 * config.legend_row_height + config.legend_offset;
            LegendEntry {
                index,
                category: *category,
                circle: (x, y),
                text: (x + config.legend_text_offset, y),
            }
        })
        .collect()
}

/// Bold and black when selected, normal and grey otherwise.
pub fn label_style(selection: &SelectionState, category: Category) -> LabelStyle {
    if selection.contains(category) {
        LabelStyle {
            fill: "black",
            font_weight: "bold",
        }
    } else {
        LabelStyle {
            fill: "grey",
            font_weight: "normal",
        }
    }
}

/// Handle a click on the legend entry at `index`.
///
/// Toggles the entry's category and publishes the full selection. An index
/// that does not resolve to a category leaves the selection untouched and
/// publishes nothing. Returns whether the category is selected afterwards.
pub fn toggle_entry(
    selection: &mut SelectionState,
    index: usize,
    publisher: &mut dyn SelectionPublisher,
) -> Option<bool> {
    let Some(category) = Category::from_index(index) else {
        log::warn!("[Disasters] legend: no category at index {}, ignoring click", index);
        return None;
    };
    let selected = selection.toggle(category);
    publisher.publish(selection.categories());
    Some(selected)
}
