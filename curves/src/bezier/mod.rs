//!
//! # Cubic bezier curves
//!
//! A cubic bezier curve is defined by a start point, two control points and an end point. The
//! `BezierCurve` trait describes anything that can be read as one; `Curve` is the simple
//! implementation used throughout this library.
//!
//! `bezier_coord` evaluates a curve directly from its four points, and `bezier_tangents` estimates
//! the two control points of a curve that passes near two extra 'through' points.
//!

mod basis;
mod curve;
mod solve;
mod sample;
mod tangents;

pub use self::basis::*;
pub use self::curve::*;
pub use self::solve::*;
pub use self::sample::*;
pub use self::tangents::*;
