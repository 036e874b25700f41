use super::error::*;
use super::target::*;

use flo_easing_curves::*;
use clap::{App, Arg, ArgMatches};

use std::str::FromStr;

/// Number of points sampled along the target and the curve when nothing else is requested
pub const DEFAULT_RESOLUTION: usize = 30;

///
/// Where the control points of the curve come from
///
#[derive(Clone, Debug, PartialEq)]
pub enum ControlPointSource {
    /// One and two thirds of the way along the target function
    Default,

    /// Specified directly, in the target's coordinates
    Points(Coord2, Coord2),

    /// Estimated from the points on the target function one and two thirds of the way across the range
    ThroughPoints,

    /// Read from a CSS timing function and mapped onto the target's end points
    Css(TimingFunction)
}

///
/// The settings for a single run of the tool
///
#[derive(Clone, Debug, PartialEq)]
pub struct FitOptions {
    pub target:         TargetFunction,
    pub scale:          f64,
    pub x_range:        (f64, f64),
    pub resolution:     usize,
    pub control_points: ControlPointSource,
    pub show_samples:   bool,
    pub json:           bool
}

///
/// Describes the command line arguments
///
pub fn command_line<'a, 'b>() -> App<'a, 'b> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author("Copyright 2017-2020 Andrew Hunter <andrew@logicalshift.io>")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help(concat!("Logging can be enabled by setting RUST_LOG (eg: RUST_LOG=debug)\n",
            "\n",
            "Licensed under the Apache License, Version 2.0 (the \"License\");\n",
            "you may not use this file except in compliance with the License.\n",
            "You may obtain a copy of the License at\n",
            "\n",
            "http://www.apache.org/licenses/LICENSE-2.0\n\n"))
        .arg(Arg::with_name("target")
            .long("target")
            .short("t")
            .takes_value(true)
            .default_value("quartic")
            .help("The function to fit: linear, quadratic, cubic, quartic, sine, exponential or pow:<exponent>"))
        .arg(Arg::with_name("scale")
            .long("scale")
            .short("s")
            .takes_value(true)
            .default_value("2")
            .help("Multiplies the target function by this amount"))
        .arg(Arg::with_name("x-min")
            .long("x-min")
            .takes_value(true)
            .allow_hyphen_values(true)
            .default_value("0")
            .help("The start of the range to fit"))
        .arg(Arg::with_name("x-max")
            .long("x-max")
            .takes_value(true)
            .allow_hyphen_values(true)
            .default_value("1")
            .help("The end of the range to fit"))
        .arg(Arg::with_name("resolution")
            .long("resolution")
            .short("r")
            .takes_value(true)
            .help("The number of points to sample along the target and the curve (default 30)"))
        .arg(Arg::with_name("control-points")
            .long("control-points")
            .short("c")
            .takes_value(true)
            .allow_hyphen_values(true)
            .conflicts_with_all(&["through-points", "css"])
            .help("The two control points of the curve, in the same coordinates as the target (eg: -c 0.4,0.1,0.8,0.6)"))
        .arg(Arg::with_name("through-points")
            .long("through-points")
            .conflicts_with("css")
            .help("Estimates the control points from the points on the target one and two thirds of the way across the range"))
        .arg(Arg::with_name("css")
            .long("css")
            .takes_value(true)
            .help("Uses an existing CSS timing function (eg: 'cubic-bezier(0.42,0,0.58,1)') as the curve"))
        .arg(Arg::with_name("samples")
            .long("samples")
            .help("Shows the points sampled along the target and the curve"))
        .arg(Arg::with_name("json")
            .long("json")
            .help("Writes the result as JSON"))
}

///
/// Reads a number from a command line argument
///
fn parse_number(name: &str, value: &str) -> Result<f64, FitError> {
    f64::from_str(value.trim()).map_err(|_| FitError::InvalidArgument(name.to_string(), value.to_string()))
}

///
/// Reads a pair of points written as `x1,y1,x2,y2`
///
pub fn parse_points(name: &str, value: &str) -> Result<(Coord2, Coord2), FitError> {
    let numbers = value.split(',')
        .map(|number| parse_number(name, number))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| FitError::InvalidArgument(name.to_string(), value.to_string()))?;

    match numbers[..] {
        [x1, y1, x2, y2]    => Ok((Coord2::new(x1, y1), Coord2::new(x2, y2))),
        _                   => Err(FitError::InvalidArgument(name.to_string(), value.to_string()))
    }
}

impl FitOptions {
    ///
    /// Reads the options from the parsed command line
    ///
    pub fn from_matches(params: &ArgMatches) -> Result<FitOptions, FitError> {
        let target      = TargetFunction::from_str(params.value_of("target").unwrap_or("quartic"))?;
        let scale       = parse_number("scale", params.value_of("scale").unwrap_or("2"))?;
        let x_min       = parse_number("x-min", params.value_of("x-min").unwrap_or("0"))?;
        let x_max       = parse_number("x-max", params.value_of("x-max").unwrap_or("1"))?;

        let resolution  = match params.value_of("resolution") {
            Some(resolution)    => usize::from_str(resolution.trim()).map_err(|_| FitError::InvalidArgument("resolution".to_string(), resolution.to_string()))?,
            None                => DEFAULT_RESOLUTION
        };

        let control_points = if let Some(points) = params.value_of("control-points") {
            let (cp1, cp2) = parse_points("control-points", points)?;
            ControlPointSource::Points(cp1, cp2)
        } else if let Some(css) = params.value_of("css") {
            ControlPointSource::Css(TimingFunction::from_str(css)?)
        } else if params.is_present("through-points") {
            ControlPointSource::ThroughPoints
        } else {
            ControlPointSource::Default
        };

        Ok(FitOptions {
            target:         target,
            scale:          scale,
            x_range:        (x_min, x_max),
            resolution:     resolution,
            control_points: control_points,
            show_samples:   params.is_present("samples"),
            json:           params.is_present("json")
        })
    }
}
