//! Axis tick computation for the timeline.

use crate::scales::{BandScale, TimeScale};

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Tick count requested from the time scale for the month axis.
pub const MONTH_TICK_COUNT: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Top,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub label: String,
    /// Offset along the axis, in chart pixels
    pub position: f64,
}

/// A rendered axis: ticks plus the geometry of their lines and labels.
///
/// A negative `tick_size` draws the tick lines across the chart as gridlines.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    pub ticks: Vec<AxisTick>,
    pub tick_size: f64,
    pub tick_padding: f64,
}

impl Axis {
    /// Coordinate, perpendicular to the axis, where a tick line ends.
    pub fn tick_line_end(&self) -> f64 {
        -self.tick_size
    }

    /// Coordinate, perpendicular to the axis, of the tick labels.
    pub fn label_offset(&self) -> f64 {
        -(self.tick_size.max(0.0) + self.tick_padding)
    }
}

/// Top axis over the reference year, labelled with month abbreviations in tick order.
pub fn month_axis(scale: &TimeScale) -> Axis {
    let ticks = scale
        .ticks(MONTH_TICK_COUNT)
        .into_iter()
        .enumerate()
        .map(|(i, date)| AxisTick {
            label: MONTH_ABBREVIATIONS.get(i).copied().unwrap_or_default().to_string(),
            position: scale.scale(date),
        })
        .collect();
    Axis {
        orient: Orient::Top,
        ticks,
        tick_size: 6.0,
        tick_padding: 3.0,
    }
}

/// Left axis with one tick per year at the band center and gridlines spanning `width`.
pub fn year_axis(scale: &BandScale<i32>, width: f64) -> Axis {
    let half_band = scale.bandwidth() / 2.0;
    let ticks = scale
        .domain()
        .iter()
        .filter_map(|year| {
            scale.scale(year).map(|y| AxisTick {
                label: year.to_string(),
                position: y + half_band,
            })
        })
        .collect();
    Axis {
        orient: Orient::Left,
        ticks,
        tick_size: -width,
        tick_padding: 3.0,
    }
}
