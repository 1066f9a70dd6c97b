//! Data processing for the disasters timeline.
//!
//! This crate turns the loaded records into what the chart draws:
//! - `grouping`: per-year buckets with the max-of-year flag
//! - `scales`, `arc`, `axis`: d3-style scales, the semicircle path generator and axis ticks
//! - `scene`: keyed year → disaster → mark/label tree with enter/update/exit joins
//! - `view`: the timeline view owning scales, working dataset and scene
//! - `legend`, `dispatch`, `controller`: category selection and the filter event flow

pub mod arc;
pub mod axis;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod grouping;
pub mod legend;
pub mod scales;
pub mod scene;
pub mod view;
