//!
//! # Basic geometric definitions
//!
//! The `Geo` trait can be implemented by any type that has a particular type of coordinate: implementations
//! of `BezierCurve` implement `Geo` to describe what type they use for coordinates.
//!
//! The domain functions remap points between the rectangle with two curve end points as its opposite
//! corners and the unit square used by timing functions.
//!

mod geo;
mod domain;

pub use self::geo::*;
pub use self::domain::*;
pub use super::coordinate::*;
