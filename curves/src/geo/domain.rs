use super::super::error::*;
use super::super::coordinate::*;

///
/// Remaps a point in the domain with `p0` and `p3` as opposite corners so that `p0` becomes `(0, 0)`
/// and `p3` becomes `(1, 1)`
///
/// Each axis is scaled independently. `p0` and `p3` must differ on both axes: if they do not, the
/// result will contain infinite or NaN components (see `try_normalise_point` for a version that
/// returns an error instead).
///
#[inline]
pub fn normalise_point(point: Coord2, p0: Coord2, p3: Coord2) -> Coord2 {
    Coord2::new((point.x - p0.x) / (p3.x - p0.x), (point.y - p0.y) / (p3.y - p0.y))
}

///
/// As for `normalise_point`, except that a domain with no width or height is reported as an error
///
pub fn try_normalise_point(point: Coord2, p0: Coord2, p3: Coord2) -> Result<Coord2, CurveError> {
    check_domain(p0, p3)?;

    Ok(normalise_point(point, p0, p3))
}

///
/// Reverses `normalise_point`, mapping a point in the unit square back into the domain defined by `p0` and `p3`
///
#[inline]
pub fn denormalise_point(point: Coord2, p0: Coord2, p3: Coord2) -> Coord2 {
    Coord2::new(p0.x + point.x * (p3.x - p0.x), p0.y + point.y * (p3.y - p0.y))
}

///
/// Returns an error if the domain defined by `p0` and `p3` has no width or no height
///
pub fn check_domain(p0: Coord2, p3: Coord2) -> Result<(), CurveError> {
    if p0.x == p3.x || p0.y == p3.y {
        Err(CurveError::DegenerateDomain(p0, p3))
    } else {
        Ok(())
    }
}
