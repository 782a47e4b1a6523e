//! Cubic Bezier building blocks: Bernstein basis weights and the
//! four-point segment record.

pub mod bernstein;
mod segment;

pub use segment::CubicBezier;
