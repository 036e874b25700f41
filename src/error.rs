use flo_easing_curves::*;

use std::fmt;
use std::error::Error;

///
/// Errors that stop the tool from producing a curve
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FitError {
    /// A command line argument could not be understood (argument name, value)
    InvalidArgument(String, String),

    /// The curve could not be generated
    Curve(CurveError),

    /// The result could not be written out
    Output(String)
}

impl From<CurveError> for FitError {
    fn from(error: CurveError) -> FitError {
        FitError::Curve(error)
    }
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FitError::InvalidArgument(name, value)  => write!(f, "invalid value '{}' for --{}", value, name),
            FitError::Curve(error)                  => write!(f, "{}", error),
            FitError::Output(message)               => write!(f, "could not write the result: {}", message)
        }
    }
}

impl Error for FitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FitError::Curve(error)  => Some(error),
            _                       => None
        }
    }
}
