use super::super::coordinate::*;

///
/// The cubic bezier weighted basis function
///
#[inline]
pub fn basis(t: f64, w1: f64, w2: f64, w3: f64, w4: f64) -> f64 {
    let t_squared           = t*t;
    let t_cubed             = t_squared*t;

    let one_minus_t         = 1.0-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;
    let one_minus_t_cubed   = one_minus_t_squared*one_minus_t;

    w1*one_minus_t_cubed
        + 3.0*w2*one_minus_t_squared*t
        + 3.0*w3*one_minus_t*t_squared
        + w4*t_cubed
}

///
/// Converts the weights of a cubic bezier into the coefficients `(a, b, c, d)` of the polynomial
/// `a*t^3 + b*t^2 + c*t + d`
///
#[inline]
pub fn cubic_coefficients(w1: f64, w2: f64, w3: f64, w4: f64) -> (f64, f64, f64, f64) {
    let d = w1;
    let c = 3.0*(w2-w1);
    let b = 3.0*(w3-w2)-c;
    let a = w4-w1-c-b;

    (a, b, c, d)
}

///
/// Returns the point at `t` on the cubic bezier curve with the end points `p0` and `p3` and the
/// control points `p1` and `p2`
///
/// The curve is converted to polynomial form rather than evaluated by repeated interpolation. `t`
/// is not checked: values outside of the range 0-1 extrapolate the curve.
///
#[inline]
pub fn bezier_coord<Point: Coordinate>(t: f64, p0: Point, p1: Point, p2: Point, p3: Point) -> Point {
    let c = (p1-p0)*3.0;
    let b = (p2-p1)*3.0 - c;
    let a = p3 - p0 - c - b;

    let t_squared   = t*t;
    let t_cubed     = t_squared*t;

    a*t_cubed + b*t_squared + c*t + p0
}
