use serde::{Deserialize, Serialize};
use spine_math::{Point2, Vector2};

use super::bernstein;

/// A single cubic Bezier arc, parameterized over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub control_points: [Point2; 4],
}

impl CubicBezier {
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self {
            control_points: [p0, p1, p2, p3],
        }
    }

    pub fn start(&self) -> Point2 {
        self.control_points[0]
    }

    pub fn end(&self) -> Point2 {
        self.control_points[3]
    }

    /// Position at local parameter `t`.
    pub fn point_at(&self, t: f64) -> Point2 {
        let [p0, p1, p2, p3] = self.control_points;
        let [b0, b1, b2, b3] = bernstein::cubic(t);
        b0 * p0 + b1 * p1 + b2 * p2 + b3 * p3
    }

    /// First derivative at local parameter `t`. Not normalized: its
    /// length is the parametric speed.
    pub fn tangent_at(&self, t: f64) -> Vector2 {
        let [p0, p1, p2, p3] = self.control_points;
        let [c0, c1, c2] = bernstein::quadratic(t);
        3.0 * (c0 * (p1 - p0) + c1 * (p2 - p1) + c2 * (p3 - p2))
    }
}
