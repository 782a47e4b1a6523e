//! Uniform sampling of a road spine into frames a mesh builder can extrude.

use spine_core::{Result, Tolerance};
use spine_math::{Point2, Vector2};

use crate::road::Road;

/// A sampled position on the spine with its unit direction of travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpineFrame {
    /// Global curve parameter of the sample.
    pub t: f64,
    pub point: Point2,
    /// Unit tangent.
    pub tangent: Vector2,
    /// Unit normal, a quarter turn counter-clockwise from the tangent.
    pub normal: Vector2,
}

impl SpineFrame {
    /// Left and right road edge points for a road of the given width.
    pub fn edges(&self, width: f64) -> (Point2, Point2) {
        let offset = 0.5 * width * self.normal;
        (self.point + offset, self.point - offset)
    }
}

/// Sample every complete segment of `road` at `steps_per_segment` evenly
/// spaced parameters, followed by the spine's end point.
///
/// A spine with no complete segment yields no frames. Fails with
/// [`spine_core::SpineError::DegenerateVector`] if the tangent vanishes at
/// a sample.
///
/// # Arguments
/// * `road` - The spine to sample
/// * `steps_per_segment` - Samples per segment, at least 1
/// * `tolerance` - Tangent length below which a sample is degenerate
pub fn sample_spine(
    road: &Road,
    steps_per_segment: usize,
    tolerance: Tolerance,
) -> Result<Vec<SpineFrame>> {
    let steps = steps_per_segment.max(1);
    let segments: Vec<_> = road.segments().collect();
    let Some(last) = segments.last().copied() else {
        log::debug!("road spine has no complete segment to sample");
        return Ok(Vec::new());
    };

    let mut frames = Vec::with_capacity(segments.len() * steps + 1);
    for (k, segment) in segments.iter().enumerate() {
        for i in 0..steps {
            let local_t = i as f64 / steps as f64;
            frames.push(frame(
                k as f64 + local_t,
                segment.point_at(local_t),
                segment.tangent_at(local_t),
                tolerance,
            )?);
        }
    }
    frames.push(frame(
        segments.len() as f64,
        last.end(),
        last.tangent_at(1.0),
        tolerance,
    )?);

    log::trace!(
        "sampled {} frames over {} spine segments",
        frames.len(),
        segments.len()
    );
    Ok(frames)
}

fn frame(t: f64, point: Point2, derivative: Vector2, tolerance: Tolerance) -> Result<SpineFrame> {
    let tangent = Road::try_normalize(derivative, tolerance)?;
    Ok(SpineFrame {
        t,
        point,
        tangent,
        normal: tangent.perp(),
    })
}
