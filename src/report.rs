use super::error::*;
use super::options::*;
use super::target::*;

use flo_easing_curves::*;
use flo_easing_curves::fit::*;

use std::fmt;

/// Number of decimal places used when showing points
const DISPLAY_DECIMAL_PLACES: u32 = 2;

///
/// The curve found for a target function, along with the CSS timing function that describes it
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub target:                     TargetFunction,
    pub scale:                      f64,
    pub curve:                      Curve<Coord2>,
    pub normalised_control_points:  (Coord2, Coord2),
    pub css:                        String,
    pub control_point_step:         Coord2,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_samples:             Option<Vec<Coord2>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_samples:              Option<Vec<Coord2>>
}

impl FitReport {
    ///
    /// Fits a curve according to a set of options
    ///
    pub fn fit(options: &FitOptions) -> Result<FitReport, FitError> {
        let (x_min, x_max)  = options.x_range;
        let fit             = EasingFit::for_function(x_min, x_max, options.target.scaled(options.scale));

        let fit = match &options.control_points {
            ControlPointSource::Default             => fit,
            ControlPointSource::Points(cp1, cp2)    => fit.with_control_points(*cp1, *cp2),
            ControlPointSource::ThroughPoints       => fit.with_through_points()?,
            ControlPointSource::Css(timing)         => {
                let (p0, p3)    = fit.end_points();
                let curve       = timing.curve_between(p0, p3);
                let (cp1, cp2)  = curve.control_points();

                fit.with_control_points(cp1, cp2)
            }
        };

        let timing          = fit.timing_function()?;
        let (p0, p3)        = fit.end_points();

        let (target_samples, curve_samples) = if options.show_samples {
            (Some(fit.sample_target(options.resolution)?), Some(fit.sample_curve(options.resolution)?))
        } else {
            (None, None)
        };

        Ok(FitReport {
            target:                     options.target,
            scale:                      options.scale,
            curve:                      fit.curve(),
            normalised_control_points:  timing.control_points,
            css:                        timing.to_css(),
            control_point_step:         Coord2::new(control_point_step(p3.x - p0.x), control_point_step(p3.y - p0.y)),
            target_samples:             target_samples,
            curve_samples:              curve_samples
        })
    }
}

///
/// Writes a point as `[x, y]`, rounded for display
///
fn display_point(point: &Coord2) -> String {
    format!("[{}, {}]", round(point.x, DISPLAY_DECIMAL_PLACES), round(point.y, DISPLAY_DECIMAL_PLACES))
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (cp1, cp2) = self.curve.control_points;

        writeln!(f, "P0={}", display_point(&self.curve.start_point))?;
        writeln!(f, "P1={}", display_point(&cp1))?;
        writeln!(f, "P2={}", display_point(&cp2))?;
        writeln!(f, "P3={}", display_point(&self.curve.end_point))?;
        writeln!(f)?;
        writeln!(f, "{}", self.css)?;

        if let (Some(target_samples), Some(curve_samples)) = (&self.target_samples, &self.curve_samples) {
            writeln!(f)?;
            writeln!(f, "{:>10} {:>10}   {:>10} {:>10}", "target x", "target y", "curve x", "curve y")?;

            for (target, curve) in target_samples.iter().zip(curve_samples.iter()) {
                writeln!(f, "{:>10.4} {:>10.4}   {:>10.4} {:>10.4}", target.x, target.y, curve.x, curve.y)?;
            }
        }

        Ok(())
    }
}
