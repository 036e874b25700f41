//!
//! # Easing curve fitter
//!
//! Finds the cubic bezier curve (and the CSS timing function) that follows a target function between
//! two x positions.
//!

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

mod error;
mod target;
mod report;
mod options;

use self::error::*;
use self::report::*;
use self::options::*;

use std::process;

///
/// Runs the tool with a set of options, returning the text to write to standard output
///
fn run(options: &FitOptions) -> Result<String, FitError> {
    info!("Fitting {:?} (scale {}) between x={} and x={}", options.target, options.scale, options.x_range.0, options.x_range.1);

    let report = FitReport::fit(options)?;
    debug!("Fitted curve {:?}", report.curve);

    if options.json {
        serde_json::to_string_pretty(&report)
            .map_err(|err| FitError::Output(err.to_string()))
    } else {
        Ok(report.to_string())
    }
}

fn main() {
    env_logger::init();

    let params  = command_line().get_matches();
    let result  = FitOptions::from_matches(&params)
        .and_then(|options| run(&options));

    match result {
        Ok(output)  => println!("{}", output),
        Err(err)    => {
            error!("{:?}", err);
            eprintln!("{}: {}", env!("CARGO_PKG_NAME"), err);
            process::exit(1);
        }
    }
}
