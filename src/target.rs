use super::error::*;

use std::str::FromStr;
use std::f64::consts::FRAC_PI_2;

///
/// The functions that a curve can be fitted against
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TargetFunction {
    /// y = x
    Linear,

    /// y = x^n
    Power(f64),

    /// y = sin(x * pi/2)
    Sine,

    /// y = e^x
    Exponential
}

impl TargetFunction {
    ///
    /// Evaluates this function at a particular x position
    ///
    pub fn evaluate(&self, x: f64) -> f64 {
        use self::TargetFunction::*;

        match self {
            Linear          => x,
            Power(exponent) => x.powf(*exponent),
            Sine            => f64::sin(x * FRAC_PI_2),
            Exponential     => f64::exp(x)
        }
    }

    ///
    /// Returns a closure that evaluates this function multiplied by a scale factor
    ///
    pub fn scaled(self, scale: f64) -> impl Fn(f64) -> f64 {
        move |x| scale * self.evaluate(x)
    }
}

impl FromStr for TargetFunction {
    type Err = FitError;

    ///
    /// Reads a target function name: `linear`, `quadratic`, `cubic`, `quartic`, `sine`, `exponential` or `pow:<exponent>`
    ///
    fn from_str(name: &str) -> Result<TargetFunction, FitError> {
        use self::TargetFunction::*;

        let invalid = || FitError::InvalidArgument("target".to_string(), name.to_string());

        match name.trim() {
            "linear"        => Ok(Linear),
            "quadratic"     => Ok(Power(2.0)),
            "cubic"         => Ok(Power(3.0)),
            "quartic"       => Ok(Power(4.0)),
            "sine"          => Ok(Sine),
            "exponential"   => Ok(Exponential),

            other           => {
                let exponent = other.strip_prefix("pow:").ok_or_else(invalid)?;
                let exponent = f64::from_str(exponent.trim()).map_err(|_| invalid())?;

                Ok(Power(exponent))
            }
        }
    }
}
