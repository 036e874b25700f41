//!
//! # Cubic bezier easing curves
//!
//! Small geometry library for the curves used as easing (timing) functions. A curve is described by
//! two end points and two control points. This library can evaluate the curve, remap points into
//! the unit square that CSS timing functions use, write out `cubic-bezier()` strings and estimate
//! control points for a curve that passes near two extra points.
//!
//! All of the operations are pure functions over `Copy` values. The unchecked functions (`normalise_point`,
//! `css_cubic_bezier`, `bezier_tangents`) let non-finite values propagate when the input is degenerate:
//! use the `try_` variants to get a `CurveError` instead.
//!

#![warn(bare_trait_objects)]

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

extern crate roots;
extern crate serde;

pub mod bezier;
pub mod geo;
pub mod fit;

pub mod coordinate;
pub use self::coordinate::*;

mod consts;
mod error;
mod rounding;
mod timing_function;

pub use self::consts::*;
pub use self::error::*;
pub use self::rounding::*;
pub use self::timing_function::*;
pub use self::geo::*;

pub use self::bezier::{BezierCurve, BezierCurveFactory, Curve, bezier_coord, bezier_tangents, try_bezier_tangents};
