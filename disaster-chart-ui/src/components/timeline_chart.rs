//! The timeline SVG: axes, year rows, semicircle marks and their labels.

use super::Legend;
use crate::state::{AppState, TooltipInfo};
use disaster_data::axis::Axis;
use disaster_data::config::ChartConfig;
use disaster_data::scene::YearNode;
use disaster_utils::svg::{fmt_num, translate};
use dioxus::prelude::*;

const CLIP_ID: &str = "chart-mask";

/// Owned copy of what one render needs, taken so no borrow of the controller
/// outlives the read guard.
struct ChartSnapshot {
    config: ChartConfig,
    years: Vec<YearNode>,
    x_axis: Axis,
    y_axis: Axis,
}

#[component]
pub fn TimelineChart() -> Element {
    let state = use_context::<AppState>();
    let mut tooltip = state.tooltip;

    let snapshot = {
        let guard = state.controller.read();
        let Some(timeline) = guard.as_ref() else {
            return rsx! {};
        };
        let view = timeline.view();
        let snapshot = ChartSnapshot {
            config: view.config().clone(),
            years: view.scene().years().to_vec(),
            x_axis: view.x_axis().clone(),
            y_axis: view.y_axis().clone(),
        };
        snapshot
    };

    let ChartSnapshot {
        config,
        years,
        x_axis,
        y_axis,
    } = snapshot;
    let margin = config.margin;
    let width = config.width();
    let padding = config.tooltip_padding;
    let x_tick_end = x_axis.tick_line_end();
    let x_label = x_axis.label_offset();
    let y_tick_end = y_axis.tick_line_end();
    let y_label = y_axis.label_offset();

    rsx! {
        svg {
            width: fmt_num(config.container_width),
            height: fmt_num(config.container_height),
            "font-family": "sans-serif",

            Legend {}

            g {
                transform: translate(margin.left, margin.top),

                defs {
                    clipPath {
                        id: CLIP_ID,
                        rect {
                            x: "0",
                            y: fmt_num(-margin.top),
                            width: fmt_num(width),
                            height: fmt_num(config.container_height),
                        }
                    }
                }

                g {
                    class: "x axis",
                    for tick in x_axis.ticks {
                        g {
                            class: "tick",
                            transform: translate(tick.position, 0.0),
                            line { y2: fmt_num(x_tick_end), stroke: "currentColor" }
                            text {
                                y: fmt_num(x_label),
                                "text-anchor": "middle",
                                "font-size": "10",
                                {tick.label}
                            }
                        }
                    }
                }

                g {
                    class: "y axis",
                    for tick in y_axis.ticks {
                        g {
                            class: "tick",
                            transform: translate(0.0, tick.position),
                            line { x2: fmt_num(y_tick_end), stroke: "#eee" }
                            text {
                                x: fmt_num(y_label),
                                dy: "0.32em",
                                "text-anchor": "end",
                                "font-size": "10",
                                {tick.label}
                            }
                        }
                    }
                }

                g {
                    "clip-path": "url(#{CLIP_ID})",
                    for year in years {
                        g {
                            key: "{year.id}",
                            class: "year",
                            transform: translate(0.0, year.y),
                            for disaster in year.disasters {
                                g {
                                    key: "{disaster.id}",
                                    class: "disaster",
                                    transform: translate(disaster.x, 0.0),
                                    onmouseenter: move |evt: MouseEvent| {
                                        let page = evt.page_coordinates();
                                        tooltip.set(Some(TooltipInfo {
                                            name: disaster.record.name.clone(),
                                            cost: disaster.record.cost,
                                            left: page.x + padding,
                                            top: page.y + padding,
                                        }));
                                    },
                                    onmouseleave: move |_| tooltip.set(None),
                                    path {
                                        class: disaster.mark.class,
                                        fill: disaster.mark.fill,
                                        stroke: "#999",
                                        "stroke-width": "0.5",
                                        opacity: "0.8",
                                        d: disaster.mark.path,
                                    }
                                    text {
                                        dy: fmt_num(disaster.label.dy),
                                        "text-anchor": "middle",
                                        "font-size": "11",
                                        {disaster.label.text}
                                    }
                                }
                            }
                        }
                    }
                }

                text {
                    x: fmt_num(width),
                    y: fmt_num(-margin.top + 20.0),
                    "text-anchor": "end",
                    "font-size": "11px",
                    fill: "grey",
                    "Circles are sized proportional to"
                }
                text {
                    x: fmt_num(width),
                    y: fmt_num(-margin.top + 34.0),
                    "text-anchor": "end",
                    "font-size": "11px",
                    fill: "grey",
                    "their cost in 2017 dollars."
                }
            }
        }
    }
}
