use crate::state::AppState;
use disaster_utils::svg::fmt_num;
use dioxus::prelude::*;

/// Name and cost of the hovered disaster, placed next to the pointer.
#[component]
pub fn Tooltip() -> Element {
    let state = use_context::<AppState>();
    let Some(info) = (state.tooltip)() else {
        return rsx! {};
    };
    let cost = fmt_num(info.cost);

    rsx! {
        div {
            class: "tooltip",
            style: "position: absolute; left: {info.left}px; top: {info.top}px; padding: 6px 8px; background: white; border: 1px solid #ccc; border-radius: 3px; font-size: 12px; pointer-events: none;",
            strong { "{info.name}" }
            br {}
            "${cost} billion"
        }
    }
}
