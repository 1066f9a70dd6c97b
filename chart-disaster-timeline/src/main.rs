//! Billion-Dollar Disasters Timeline
//!
//! One row per year, one semicircle per disaster placed by day of year and
//! sized by cost. Clicking a legend entry toggles that category's filter.
//!
//! Data flow:
//! 1. On mount, `data/disaster_costs.csv` is fetched relative to the page.
//! 2. The CSV is loaded into an in-memory SQLite database.
//! 3. A `TimelineController` builds the view over the full dataset.
//! 4. Legend clicks republish the selection; the controller re-queries the
//!    database and re-renders, and the Signal write redraws the SVG.

use anyhow::Context;
use disaster_chart_ui::components::{ChartHeader, ErrorDisplay, LoadingSpinner, TimelineChart, Tooltip};
use disaster_chart_ui::fetch::fetch_text;
use disaster_chart_ui::state::AppState;
use disaster_data::config::ChartConfig;
use disaster_data::controller::TimelineController;
use disaster_db::Database;
use dioxus::prelude::*;

/// Dataset location, relative to the page.
const DATA_URL: &str = "data/disaster_costs.csv";

const ROOT_ID: &str = "disasters-root";

const CHART_HEIGHT: f64 = 900.0;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

async fn load_timeline() -> anyhow::Result<TimelineController> {
    let csv = fetch_text(DATA_URL).await?;
    let db = Database::new()?;
    let count = db
        .load_disasters(&csv)
        .with_context(|| format!("failed to load {}", DATA_URL))?;
    log::info!("[Disasters] loaded {} disasters", count);

    let config = ChartConfig {
        container_height: CHART_HEIGHT,
        ..ChartConfig::default()
    };
    TimelineController::new(&db, config)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        spawn(async move {
            match load_timeline().await {
                Ok(controller) => state.controller.set(Some(controller)),
                Err(e) => {
                    log::error!("[Disasters] {:#}", e);
                    state.error_msg.set(Some(format!("{:#}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    let subtitle = state
        .controller
        .read()
        .as_ref()
        .map(|timeline| {
            let summary = timeline.summary();
            match (summary.years_desc.last(), summary.years_desc.first()) {
                (Some(first), Some(last)) => format!(
                    "{} disasters, {}–{}",
                    summary.record_count, first, last
                ),
                _ => "No disasters in the dataset".to_string(),
            }
        })
        .unwrap_or_default();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Billion-Dollar Disasters".to_string(),
                subtitle,
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                TimelineChart {}
                Tooltip {}
            }
        }
    }
}
