use super::geo::*;
use super::error::*;
use super::consts::*;
use super::rounding::*;
use super::bezier::*;

use std::fmt;
use std::str::FromStr;

///
/// A cubic bezier easing curve in the form used by CSS: the curve runs from `(0, 0)` to `(1, 1)`
/// and only the two control points are stored
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingFunction {
    pub control_points: (Coord2, Coord2)
}

impl TimingFunction {
    ///
    /// Creates a timing function from its (already normalised) control points
    ///
    pub fn new(cp1: Coord2, cp2: Coord2) -> TimingFunction {
        TimingFunction {
            control_points: (cp1, cp2)
        }
    }

    ///
    /// Creates the timing function for a curve by normalising its control points into the domain
    /// defined by its start and end points
    ///
    /// The start and end point must differ on both axes, or the control points will not be finite.
    ///
    pub fn from_curve<C: BezierCurve<Point=Coord2>>(curve: &C) -> TimingFunction {
        let p0          = curve.start_point();
        let p3          = curve.end_point();
        let (cp1, cp2)  = curve.control_points();

        TimingFunction::new(normalise_point(cp1, p0, p3), normalise_point(cp2, p0, p3))
    }

    ///
    /// As for `from_curve` but returns an error if the curve's end points do not define a domain
    ///
    pub fn try_from_curve<C: BezierCurve<Point=Coord2>>(curve: &C) -> Result<TimingFunction, CurveError> {
        check_domain(curve.start_point(), curve.end_point())?;

        Ok(TimingFunction::from_curve(curve))
    }

    ///
    /// The curve described by this timing function, from `(0, 0)` to `(1, 1)`
    ///
    pub fn curve(&self) -> Curve<Coord2> {
        Curve::from_points(Coord2::new(0.0, 0.0), self.control_points, Coord2::new(1.0, 1.0))
    }

    ///
    /// Maps this timing function onto the domain between two points (the inverse of `from_curve`)
    ///
    pub fn curve_between(&self, p0: Coord2, p3: Coord2) -> Curve<Coord2> {
        let (cp1, cp2) = self.control_points;

        Curve::from_points(p0, (denormalise_point(cp1, p0, p3), denormalise_point(cp2, p0, p3)), p3)
    }

    ///
    /// Returns the CSS representation of this timing function, with each value rounded to `CSS_DECIMAL_PLACES`
    ///
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    ///
    /// Finds the progress (y value) of this timing function at a particular x position
    ///
    /// x values before 0 or after 1 are clamped to the end points. If the x polynomial has no root in
    /// the range 0-1 (which only happens when the control points have x coordinates outside of the
    /// unit range) the result is NaN.
    ///
    pub fn y_for_x(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        } else if x >= 1.0 {
            return 1.0;
        }

        let (cp1, cp2)  = self.control_points;
        let t_values    = solve_basis_for_t(0.0, cp1.x, cp2.x, 1.0, x);

        match t_values.first() {
            Some(t) => basis(*t, 0.0, cp1.y, cp2.y, 1.0),
            None    => f64::NAN
        }
    }
}

///
/// Formats a value for a CSS function, rounding to `CSS_DECIMAL_PLACES` (negative zero is written as `0`)
///
fn css_number(value: f64) -> f64 {
    round(value, CSS_DECIMAL_PLACES) + 0.0
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (cp1, cp2) = self.control_points;

        write!(f, "cubic-bezier({},{},{},{})", css_number(cp1.x), css_number(cp1.y), css_number(cp2.x), css_number(cp2.y))
    }
}

impl FromStr for TimingFunction {
    type Err = CurveError;

    ///
    /// Reads a timing function in the form `cubic-bezier(x1, y1, x2, y2)`
    ///
    fn from_str(text: &str) -> Result<TimingFunction, CurveError> {
        let invalid     = || CurveError::InvalidTimingFunction(text.to_string());
        let trimmed     = text.trim();

        // Expect 'cubic-bezier(' ... ')'
        let arguments   = trimmed.strip_prefix("cubic-bezier")
            .map(|remaining| remaining.trim_start())
            .and_then(|remaining| remaining.strip_prefix('('))
            .and_then(|remaining| remaining.strip_suffix(')'))
            .ok_or_else(invalid)?;

        // Four comma-separated numbers
        let values      = arguments.split(',')
            .map(|value| f64::from_str(value.trim()).map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match values[..] {
            [x1, y1, x2, y2]    => Ok(TimingFunction::new(Coord2::new(x1, y1), Coord2::new(x2, y2))),
            _                   => Err(invalid())
        }
    }
}

///
/// Returns the CSS `cubic-bezier()` timing function for a curve
///
/// The control points are normalised into the domain with `p0` and `p3` as opposite corners and each
/// value is rounded to two decimal places. The result has the form `cubic-bezier(x1,y1,x2,y2)`, with no
/// whitespace. `p0` and `p3` must differ on both axes, or the output will contain `NaN` or `inf`.
///
pub fn css_cubic_bezier(p0: Coord2, p1: Coord2, p2: Coord2, p3: Coord2) -> String {
    TimingFunction::from_curve(&Curve::from_points(p0, (p1, p2), p3)).to_css()
}

///
/// As for `css_cubic_bezier` but returns an error if `p0` and `p3` share an x or y coordinate
///
pub fn try_css_cubic_bezier(p0: Coord2, p1: Coord2, p2: Coord2, p3: Coord2) -> Result<String, CurveError> {
    Ok(TimingFunction::try_from_curve(&Curve::from_points(p0, (p1, p2), p3))?.to_css())
}
