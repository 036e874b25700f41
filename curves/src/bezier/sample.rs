use super::curve::*;

///
/// Samples `resolution` points along a curve, evenly spaced in t from the start point to the end point
///
pub fn sample_curve<C: BezierCurve>(curve: &C, resolution: usize) -> Vec<C::Point> {
    trace!("Sampling curve at {} points", resolution);

    match resolution {
        0 => vec![],
        1 => vec![curve.start_point()],
        _ => {
            let last = (resolution-1) as f64;

            (0..resolution)
                .map(|index| curve.point_at_pos((index as f64) / last))
                .collect()
        }
    }
}
