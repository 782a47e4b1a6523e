//! The road spine: a piecewise cubic Bezier spline with a constant width.

use serde::{Deserialize, Serialize};
use spine_core::traits::{BoundingBox, Validate};
use spine_core::{Result, SpineError, Tolerance};
use spine_math::{Aabb2, Point2, Vector2};

use crate::bezier::CubicBezier;

/// A road centerline made of cubic Bezier segments over a flat control
/// point sequence.
///
/// Segment `k` uses control points `3k..=3k+3`, so neighbouring segments
/// share their boundary point. Global parameter `t` in `[k, k+1)` lands on
/// segment `k` at local parameter `t - k`.
///
/// The control points are fixed at construction. Malformed sequences are
/// accepted and only fail when a query reaches past the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    width: f64,
    points: Vec<Point2>,
}

impl Road {
    pub fn new(width: f64, spine: Vec<Point2>) -> Self {
        let len = spine.len();
        if len < 4 || len % 3 != 1 {
            log::debug!(
                "road spine with {} control points is not a whole number of cubic segments",
                len
            );
        }
        Self {
            width,
            points: spine,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Number of unit parameter intervals, `len / 3`.
    pub fn segment_count(&self) -> usize {
        self.points.len() / 3
    }

    /// Parameter range `(0, segment_count)`. The upper bound itself is
    /// outside the range accepted by [`Road::point_at`].
    pub fn domain(&self) -> (f64, f64) {
        (0.0, self.segment_count() as f64)
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.points
    }

    /// Control point at raw index `i` into the spine.
    pub fn control_point(&self, i: usize) -> Result<Point2> {
        self.points
            .get(i)
            .copied()
            .ok_or(SpineError::IndexOutOfRange {
                index: isize::try_from(i).unwrap_or(isize::MAX),
                len: self.points.len(),
            })
    }

    /// The four-point record of segment `k`.
    pub fn segment(&self, k: usize) -> Result<CubicBezier> {
        let k = isize::try_from(k).unwrap_or(isize::MAX);
        self.fetch_segment(k.saturating_mul(3))
    }

    /// All complete segments in order.
    pub fn segments(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        self.points
            .windows(4)
            .step_by(3)
            .map(|w| CubicBezier::new(w[0], w[1], w[2], w[3]))
    }

    /// Upper end of the last complete segment, the one point of the spine
    /// that [`Road::point_at`] never returns.
    pub fn end_point(&self) -> Result<Point2> {
        self.segments()
            .last()
            .map(|segment| segment.end())
            .ok_or(SpineError::IndexOutOfRange {
                index: isize::try_from(self.points.len()).unwrap_or(isize::MAX),
                len: self.points.len(),
            })
    }

    /// Position on the spine at global parameter `t`.
    ///
    /// Fails with [`SpineError::IndexOutOfRange`] when `t` lies outside
    /// `[0, segment_count)` for a well-formed spine.
    pub fn point_at(&self, t: f64) -> Result<Point2> {
        let (segment, local_t) = self.locate(t)?;
        Ok(segment.point_at(local_t))
    }

    /// Unnormalized derivative of the spine at global parameter `t`.
    pub fn tangent_at(&self, t: f64) -> Result<Vector2> {
        let (segment, local_t) = self.locate(t)?;
        Ok(segment.tangent_at(local_t))
    }

    /// Scale `p` to unit length.
    ///
    /// A zero vector yields NaN components; guarding against that (for
    /// example a tangent taken at a cusp) is up to the caller. See
    /// [`Road::try_normalize`] for a checked variant.
    pub fn normalize(p: Vector2) -> Vector2 {
        let length = (p.x * p.x + p.y * p.y).sqrt();
        Vector2::new(p.x / length, p.y / length)
    }

    /// Like [`Road::normalize`], but fails with
    /// [`SpineError::DegenerateVector`] when `p` is shorter than the linear
    /// tolerance.
    pub fn try_normalize(p: Vector2, tolerance: Tolerance) -> Result<Vector2> {
        let length = p.length();
        if tolerance.is_degenerate_length(length) {
            return Err(SpineError::DegenerateVector { length });
        }
        Ok(Self::normalize(p))
    }

    /// Bounds of the control polygon grown by half the road width.
    pub fn footprint(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.points).map(|aabb| aabb.expand(0.5 * self.width))
    }

    /// Split `t` into a segment and a local parameter.
    fn locate(&self, t: f64) -> Result<(CubicBezier, f64)> {
        if !t.is_finite() {
            return Err(SpineError::NonFiniteParameter(t));
        }
        let index = t.floor();
        let local_t = t - index;
        let segment = self.fetch_segment((index as isize).saturating_mul(3))?;
        Ok((segment, local_t))
    }

    fn fetch_segment(&self, base: isize) -> Result<CubicBezier> {
        let mut control_points = [Point2::ZERO; 4];
        for (offset, cp) in (0..).zip(control_points.iter_mut()) {
            *cp = self.point_by_signed_index(base.saturating_add(offset))?;
        }
        Ok(CubicBezier { control_points })
    }

    fn point_by_signed_index(&self, index: isize) -> Result<Point2> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.points.get(i))
            .copied()
            .ok_or(SpineError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }
}

impl Validate for Road {
    fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(SpineError::InvalidWidth(self.width));
        }
        let len = self.points.len();
        if len < 4 || len % 3 != 1 {
            return Err(SpineError::InvalidControlPoints(format!(
                "expected 3n + 1 control points with n >= 1, got {}",
                len
            )));
        }
        if let Some(i) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(SpineError::InvalidControlPoints(format!(
                "control point {} is not finite",
                i
            )));
        }
        Ok(())
    }
}

impl BoundingBox for Road {
    type Point = Point2;

    /// Bounds of the control polygon, which contain the curve. An empty
    /// spine reports a zero-sized box at the origin.
    fn bounding_box(&self) -> (Point2, Point2) {
        Aabb2::from_points(&self.points)
            .map(|aabb| (aabb.min, aabb.max))
            .unwrap_or((Point2::ZERO, Point2::ZERO))
    }
}
