//! Clickable category legend drawn in the SVG's top margin.

use crate::state::AppState;
use disaster_core::category::Category;
use disaster_data::legend::{legend_entries, LabelStyle};
use disaster_utils::svg::fmt_num;
use dioxus::prelude::*;

struct LegendItem {
    index: usize,
    category: Category,
    circle: (f64, f64),
    text: (f64, f64),
    style: LabelStyle,
}

/// One circle + title per category; a click toggles that category's filter.
#[component]
pub fn Legend() -> Element {
    let state = use_context::<AppState>();
    let mut controller = state.controller;

    let (items, radius) = {
        let guard = controller.read();
        let Some(timeline) = guard.as_ref() else {
            return rsx! {};
        };
        let radius = timeline.view().config().legend_circle_radius;
        let items: Vec<LegendItem> = legend_entries(timeline.view().config())
            .into_iter()
            .map(|entry| LegendItem {
                index: entry.index,
                category: entry.category,
                circle: entry.circle,
                text: entry.text,
                style: timeline.legend_label_style(entry.category),
            })
            .collect();
        (items, radius)
    };

    rsx! {
        g {
            class: "legend",
            for item in items {
                g {
                    key: "{item.index}",
                    class: "legend-entry",
                    style: "cursor: pointer;",
                    onclick: move |_| {
                        if let Some(timeline) = controller.write().as_mut() {
                            timeline.click_legend_entry(item.index);
                        }
                    },
                    circle {
                        cx: fmt_num(item.circle.0),
                        cy: fmt_num(item.circle.1),
                        r: fmt_num(radius),
                        fill: item.category.color(),
                        stroke: "grey",
                        opacity: "0.6",
                    }
                    text {
                        x: fmt_num(item.text.0),
                        y: fmt_num(item.text.1),
                        dy: "0.35em",
                        fill: item.style.fill,
                        "font-weight": item.style.font_weight,
                        "font-size": "12",
                        {item.category.title()}
                    }
                }
            }
        }
    }
}
