//! Chart geometry configuration.

/// Space reserved around the inner chart area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Geometry of the timeline SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Fixed SVG width
    pub container_width: f64,
    pub container_height: f64,
    /// Offset of the tooltip from the pointer
    pub tooltip_padding: f64,
    /// The top margin also holds the legend and the corner annotation.
    pub margin: Margin,
    /// Radius of the smallest mark (global minimum cost)
    pub min_pixel: f64,
    /// Radius of the largest mark (global maximum cost)
    pub max_pixel: f64,
    pub legend_circle_radius: f64,
    pub legend_column_width: f64,
    pub legend_row_height: f64,
    pub legend_offset: f64,
    /// Gap between a legend circle and its label
    pub legend_text_offset: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            container_width: 800.0,
            container_height: 900.0,
            tooltip_padding: 15.0,
            margin: Margin {
                top: 120.0,
                right: 20.0,
                bottom: 20.0,
                left: 45.0,
            },
            min_pixel: 4.0,
            max_pixel: 140.0,
            legend_circle_radius: 7.0,
            legend_column_width: 140.0,
            legend_row_height: 20.0,
            legend_offset: 20.0,
            legend_text_offset: 15.0,
        }
    }
}

impl ChartConfig {
    /// Width of the inner chart area.
    pub fn width(&self) -> f64 {
        self.container_width - self.margin.left - self.margin.right
    }

    /// Height of the inner chart area.
    pub fn height(&self) -> f64 {
        self.container_height - self.margin.top - self.margin.bottom
    }
}
