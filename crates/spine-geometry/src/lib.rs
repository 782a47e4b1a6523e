//! Road spine geometry: cubic Bezier segments, the `Road` spline, and
//! uniform spine sampling for mesh extrusion.

pub mod bezier;
pub mod road;
pub mod tessellate;

pub use bezier::CubicBezier;
pub use road::Road;
pub use tessellate::{sample_spine, SpineFrame};
