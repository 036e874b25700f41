use super::curve::*;
use super::super::error::*;
use super::super::consts::*;
use super::super::coordinate::*;

///
/// Estimates the control points for a cubic bezier curve from `p0` to `p3` that passes near
/// `through1` and `through2`
///
/// The four points are treated as consecutive points on a centripetal spline (the distances
/// between them are raised to the power `CENTRIPETAL_ALPHA`), which is converted to bezier form.
/// `through1` should be the point nearer `p0` and `through2` the point nearer `p3`. This is a
/// closed-form estimate and not a best fit: the curve will usually not pass exactly through the
/// two points.
///
/// The control points are rounded to `CONTROL_POINT_DECIMAL_PLACES`. The end points are returned
/// unchanged.
///
/// If two consecutive points are in the same place, the control point next to them is infinite
/// or NaN. `try_bezier_tangents` reports this as an error instead.
///
pub fn bezier_tangents(p0: Coord2, p3: Coord2, through1: Coord2, through2: Coord2) -> Curve<Coord2> {
    let d1 = f64::powf(distance(through1, p0), CENTRIPETAL_ALPHA);
    let d2 = f64::powf(distance(through2, through1), CENTRIPETAL_ALPHA);
    let d3 = f64::powf(distance(p3, through2), CENTRIPETAL_ALPHA);

    // Weights for the first control point
    let a1 = d1*d1;
    let b1 = d2*d2;
    let c1 = 2.0*d1*d1 + 3.0*d1*d2 + d2*d2;
    let denominator1 = 3.0*d1*(d1+d2);

    // Weights for the second control point: same as the first with the ends swapped
    let a2 = d3*d3;
    let b2 = d2*d2;
    let c2 = 2.0*d3*d3 + 3.0*d3*d2 + d2*d2;
    let denominator2 = 3.0*d3*(d3+d2);

    let cp1 = Coord2::new(
        (a1*p3.x - b1*through1.x + c1*p0.x) / denominator1,
        (a1*p3.y - b1*through1.y + c1*p0.y) / denominator1
    ).round(CONTROL_POINT_DECIMAL_PLACES);

    let cp2 = Coord2::new(
        (a2*p0.x - b2*through2.x + c2*p3.x) / denominator2,
        (a2*p0.y - b2*through2.y + c2*p3.y) / denominator2
    ).round(CONTROL_POINT_DECIMAL_PLACES);

    if !cp1.is_finite() || !cp2.is_finite() {
        warn!("Control points for the curve through {:?}, {:?}, {:?}, {:?} are not finite", p0, through1, through2, p3);
    }

    Curve::from_points(p0, (cp1, cp2), p3)
}

///
/// As for `bezier_tangents`, except that consecutive points that coincide are reported as an error
/// instead of producing non-finite control points
///
pub fn try_bezier_tangents(p0: Coord2, p3: Coord2, through1: Coord2, through2: Coord2) -> Result<Curve<Coord2>, CurveError> {
    for (a, b) in [(p0, through1), (through1, through2), (through2, p3)].iter() {
        if a == b {
            return Err(CurveError::CoincidentPoints(*a, *b));
        }
    }

    Ok(bezier_tangents(p0, p3, through1, through2))
}
