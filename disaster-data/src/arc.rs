//! SVG path generator for solid circular sectors.
//!
//! Angles follow the d3 convention: radians, 0 at twelve o'clock, increasing
//! clockwise (on screen, with the SVG y axis pointing down).

use disaster_utils::svg::fmt_num;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

const EPSILON: f64 = 1e-9;

/// Sector generator with an inner radius of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGenerator {
    start_angle: f64,
    end_angle: f64,
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

impl ArcGenerator {
    pub fn new(start_angle: f64, end_angle: f64) -> Self {
        Self {
            start_angle,
            end_angle,
        }
    }

    /// Half-disc with the flat edge up and the curved edge down.
    pub fn lower_half() -> Self {
        Self::new(FRAC_PI_2, 3.0 * FRAC_PI_2)
    }

    /// Path data for a sector of the given radius centered on the origin.
    pub fn path(&self, radius: f64) -> String {
        if !radius.is_finite() || radius <= 0.0 {
            return "M0,0Z".to_string();
        }
        let r = fmt_num(radius);
        let sweep = if self.end_angle > self.start_angle { 1 } else { 0 };
        let da = (self.end_angle - self.start_angle).abs();

        if da >= TAU - EPSILON {
            // full circle: two half arcs through the opposite point
            let (x0, y0) = point(radius, self.start_angle);
            let (x1, y1) = point(radius, self.start_angle + PI);
            return format!(
                "M{x0},{y0}A{r},{r},0,1,{sweep},{x1},{y1}A{r},{r},0,1,{sweep},{x0},{y0}Z",
                x0 = fmt_num(x0),
                y0 = fmt_num(y0),
                x1 = fmt_num(x1),
                y1 = fmt_num(y1),
            );
        }

        let large_arc = if da >= PI - EPSILON { 1 } else { 0 };
        let (x0, y0) = point(radius, self.start_angle);
        let (x1, y1) = point(radius, self.end_angle);
        format!(
            "M{},{}A{r},{r},0,{large_arc},{sweep},{},{}L0,0Z",
            fmt_num(x0),
            fmt_num(y0),
            fmt_num(x1),
            fmt_num(y1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_half_curves_below_the_origin() {
        let arc = ArcGenerator::lower_half();
        assert_eq!(arc.path(10.0), "M10,0A10,10,0,1,1,-10,0L0,0Z");
    }

    #[test]
    fn upper_half_for_comparison() {
        let arc = ArcGenerator::new(-FRAC_PI_2, FRAC_PI_2);
        assert_eq!(arc.path(4.0), "M-4,0A4,4,0,1,1,4,0L0,0Z");
    }

    #[test]
    fn quarter_sector_uses_small_arc() {
        let arc = ArcGenerator::new(0.0, FRAC_PI_2);
        assert_eq!(arc.path(2.5), "M0,-2.5A2.5,2.5,0,0,1,2.5,0L0,0Z");
    }

    #[test]
    fn full_circle_closes_on_itself() {
        let arc = ArcGenerator::new(0.0, TAU);
        assert_eq!(arc.path(1.0), "M0,-1A1,1,0,1,1,0,1A1,1,0,1,1,0,-1Z");
    }

    #[test]
    fn zero_or_invalid_radius_draws_nothing() {
        let arc = ArcGenerator::lower_half();
        assert_eq!(arc.path(0.0), "M0,0Z");
        assert_eq!(arc.path(f64::NAN), "M0,0Z");
    }
}
