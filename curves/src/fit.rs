//!
//! # Fitting an easing curve to a function
//!
//! An `EasingFit` describes a cubic bezier that approximates a target function `y = f(x)` between two
//! x positions. The end points of the curve come from the target function; the control points start
//! at a default position (one and two thirds of the way across the range) and can then be adjusted
//! by hand, or estimated from two points on the target using `bezier_tangents`.
//!
//! The target is assumed to be monotonic over the range.
//!

use super::geo::*;
use super::error::*;
use super::consts::*;
use super::rounding::*;
use super::bezier::*;
use super::timing_function::*;

///
/// Samples `resolution` points on a target function, evenly spaced from `x_min` to `x_max` (inclusive)
///
pub fn sample_function<TargetFn: Fn(f64) -> f64>(x_min: f64, x_max: f64, resolution: usize, target: TargetFn) -> Vec<Coord2> {
    trace!("Sampling target function at {} points between {} and {}", resolution, x_min, x_max);

    match resolution {
        0 => vec![],
        1 => vec![Coord2::new(x_min, target(x_min))],
        _ => {
            let last = (resolution-1) as f64;

            (0..resolution)
                .map(|index| x_min + (x_max-x_min) * (index as f64) / last)
                .map(|x| Coord2::new(x, target(x)))
                .collect()
        }
    }
}

///
/// The starting control points for fitting a curve to a target function: these are placed on the
/// target one third and two thirds of the way across the range, rounded to two decimal places
///
pub fn default_control_points<TargetFn: Fn(f64) -> f64>(x_min: f64, x_max: f64, target: TargetFn) -> (Coord2, Coord2) {
    let cp1_x = round(x_min + (x_max-x_min) * (1.0/3.0), CONTROL_POINT_DECIMAL_PLACES);
    let cp2_x = round(x_min + (x_max-x_min) * (2.0/3.0), CONTROL_POINT_DECIMAL_PLACES);

    (
        Coord2::new(cp1_x, round(target(cp1_x), CONTROL_POINT_DECIMAL_PLACES)),
        Coord2::new(cp2_x, round(target(cp2_x), CONTROL_POINT_DECIMAL_PLACES))
    )
}

///
/// The amount to move a control point by when nudging it along an axis that covers `range`
///
#[inline]
pub fn control_point_step(range: f64) -> f64 {
    round(0.1 * range, CONTROL_POINT_DECIMAL_PLACES)
}

///
/// A cubic bezier curve being fitted against a target function
///
pub struct EasingFit<TargetFn: Fn(f64) -> f64> {
    /// The function that the curve should follow
    target: TargetFn,

    /// The range of x values being fitted
    x_range: (f64, f64),

    /// The current control points for the curve
    control_points: (Coord2, Coord2)
}

impl<TargetFn: Fn(f64) -> f64> EasingFit<TargetFn> {
    ///
    /// Starts fitting a curve to a target function between two x positions, using the default control points
    ///
    pub fn for_function(x_min: f64, x_max: f64, target: TargetFn) -> EasingFit<TargetFn> {
        let control_points = default_control_points(x_min, x_max, &target);

        debug!("Fitting between x={} and x={}, initial control points {:?}", x_min, x_max, control_points);

        EasingFit {
            target:         target,
            x_range:        (x_min, x_max),
            control_points: control_points
        }
    }

    ///
    /// Replaces the control points of this fit
    ///
    pub fn with_control_points(self, cp1: Coord2, cp2: Coord2) -> EasingFit<TargetFn> {
        debug!("Control points set to {:?}, {:?}", cp1, cp2);

        EasingFit {
            control_points: (cp1, cp2),
            ..self
        }
    }

    ///
    /// Estimates the control points from the two points on the target one third and two thirds of
    /// the way across the range
    ///
    pub fn with_through_points(self) -> Result<EasingFit<TargetFn>, CurveError> {
        let (x_min, x_max)  = self.x_range;
        let through1_x      = x_min + (x_max-x_min) * (1.0/3.0);
        let through2_x      = x_min + (x_max-x_min) * (2.0/3.0);
        let through1        = Coord2::new(through1_x, (self.target)(through1_x));
        let through2        = Coord2::new(through2_x, (self.target)(through2_x));

        let (p0, p3)        = self.end_points();
        let curve           = try_bezier_tangents(p0, p3, through1, through2)?;
        let (cp1, cp2)      = curve.control_points();

        Ok(self.with_control_points(cp1, cp2))
    }

    ///
    /// The range of x values covered by this fit
    ///
    pub fn x_range(&self) -> (f64, f64) {
        self.x_range
    }

    ///
    /// The end points of the curve (the target function evaluated at each end of the range)
    ///
    pub fn end_points(&self) -> (Coord2, Coord2) {
        let (x_min, x_max) = self.x_range;

        (Coord2::new(x_min, (self.target)(x_min)), Coord2::new(x_max, (self.target)(x_max)))
    }

    ///
    /// The control points of the curve, in the target's coordinate system
    ///
    pub fn control_points(&self) -> (Coord2, Coord2) {
        self.control_points
    }

    ///
    /// The curve that is currently fitted to the target
    ///
    pub fn curve(&self) -> Curve<Coord2> {
        let (p0, p3) = self.end_points();

        Curve::from_points(p0, self.control_points, p3)
    }

    ///
    /// The timing function for the current curve (fails if the target has the same value at both ends of the range)
    ///
    pub fn timing_function(&self) -> Result<TimingFunction, CurveError> {
        TimingFunction::try_from_curve(&self.curve())
    }

    ///
    /// The control points normalised into the unit square
    ///
    pub fn normalised_control_points(&self) -> Result<(Coord2, Coord2), CurveError> {
        Ok(self.timing_function()?.control_points)
    }

    ///
    /// The CSS `cubic-bezier()` string for the current curve
    ///
    pub fn css(&self) -> Result<String, CurveError> {
        Ok(self.timing_function()?.to_css())
    }

    ///
    /// Samples the target function over the range
    ///
    pub fn sample_target(&self, resolution: usize) -> Result<Vec<Coord2>, CurveError> {
        if resolution < 2 { return Err(CurveError::InvalidResolution(resolution)); }

        let (x_min, x_max) = self.x_range;
        Ok(sample_function(x_min, x_max, resolution, &self.target))
    }

    ///
    /// Samples the fitted curve
    ///
    pub fn sample_curve(&self, resolution: usize) -> Result<Vec<Coord2>, CurveError> {
        if resolution < 2 { return Err(CurveError::InvalidResolution(resolution)); }

        Ok(sample_curve(&self.curve(), resolution))
    }
}
