/// Number of decimal places used when writing out a CSS timing function
pub const CSS_DECIMAL_PLACES: u32 = 2;

/// Number of decimal places that generated control points are rounded to
pub const CONTROL_POINT_DECIMAL_PLACES: u32 = 2;

/// Exponent applied to the distances between points when estimating control points (0.5 is the centripetal parameterisation)
pub const CENTRIPETAL_ALPHA: f64 = 0.5;

/// Length we consider a small distance (t values this far outside of the 0-1 range are clipped back into it)
pub const SMALL_DISTANCE: f64 = 0.001;
