use super::coordinate::*;

use std::fmt;
use std::error::Error;

///
/// Errors from the checked curve operations
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CurveError {
    /// The end points of a curve share an x or y coordinate, so there is no domain to normalise into
    DegenerateDomain(Coord2, Coord2),

    /// Two consecutive points passed to the tangent solver are in the same place
    CoincidentPoints(Coord2, Coord2),

    /// A string could not be read as a `cubic-bezier()` timing function
    InvalidTimingFunction(String),

    /// At least two samples are needed to describe a range
    InvalidResolution(usize)
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::CurveError::*;

        match self {
            DegenerateDomain(p0, p3)        => write!(f, "cannot normalise into the domain ({}, {})-({}, {}): it has no width or no height", p0.x, p0.y, p3.x, p3.y),
            CoincidentPoints(a, b)          => write!(f, "consecutive points ({}, {}) and ({}, {}) coincide", a.x, a.y, b.x, b.y),
            InvalidTimingFunction(text)     => write!(f, "'{}' is not a cubic-bezier() timing function", text),
            InvalidResolution(resolution)   => write!(f, "need at least 2 samples (got {})", resolution)
        }
    }
}

impl Error for CurveError { }
