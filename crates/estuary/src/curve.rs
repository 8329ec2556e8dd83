//! Link curve geometry.

use crate::model::{LinkLayout, NodeLayout};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Point = euclid::Point2D<f64, euclid::UnknownUnit>;

pub const DEFAULT_CURVATURE: f64 = 0.5;

/// A cubic Bezier from the source node's right edge to the target node's left edge.
///
/// Both control points share the vertical level of their endpoint, so the curve leaves and
/// enters horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathGeometry {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl fmt::Display for PathGeometry {
    /// SVG path data, e.g. `M24,5C57,5 57,45 90,45`. Coordinates print at full precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M{},{}C{},{} {},{} {},{}",
            Num(self.start.x),
            Num(self.start.y),
            Num(self.control1.x),
            Num(self.control1.y),
            Num(self.control2.x),
            Num(self.control2.y),
            Num(self.end.x),
            Num(self.end.y),
        )
    }
}

/// Round-trippable decimal; `-0` prints as `0`. Non-finite values print as-is.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{v}")
    }
}

fn clamp_curvature(curvature: f64) -> f64 {
    if curvature.is_finite() {
        curvature.clamp(0.0, 1.0)
    } else {
        DEFAULT_CURVATURE
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Curve for `link` between its laid-out endpoints.
///
/// Pure: depends only on the arguments, so it can run on every redraw without touching the
/// solver.
pub fn curve_for(
    source: &NodeLayout,
    target: &NodeLayout,
    link: &LinkLayout,
    curvature: f64,
) -> PathGeometry {
    let curvature = clamp_curvature(curvature);
    let x0 = source.x + source.dx;
    let x1 = target.x;
    let x2 = lerp(x0, x1, curvature);
    let x3 = lerp(x0, x1, 1.0 - curvature);
    let y0 = source.y + link.sy + link.dy / 2.0;
    let y1 = target.y + link.ty + link.dy / 2.0;

    PathGeometry {
        start: euclid::point2(x0, y0),
        control1: euclid::point2(x2, y0),
        control2: euclid::point2(x3, y1),
        end: euclid::point2(x1, y1),
    }
}
