use flo_easing_curves::*;
use flo_easing_curves::bezier;

mod basis;
mod sample;
mod tangents;

pub fn approx_equal(a: f64, b: f64) -> bool {
    f64::floor(f64::abs(a-b)*10000.0) == 0.0
}

#[test]
fn read_curve_control_points() {
    let curve = bezier::Curve::from_points(Coord2::new(1.0, 1.0), (Coord2::new(3.0, 3.0), Coord2::new(4.0, 4.0)), Coord2::new(2.0, 2.0));

    assert!(curve.start_point() == Coord2::new(1.0, 1.0));
    assert!(curve.end_point() == Coord2::new(2.0, 2.0));
    assert!(curve.control_points() == (Coord2::new(3.0, 3.0), Coord2::new(4.0, 4.0)));
}

#[test]
fn read_curve_points() {
    let curve = bezier::Curve::from_points(Coord2::new(1.0, 1.0), (Coord2::new(3.0, 3.0), Coord2::new(4.0, 4.0)), Coord2::new(2.0, 2.0));

    for x in 0..100 {
        let t = (x as f64)/100.0;

        let point           = curve.point_at_pos(t);
        let another_point   = bezier::bezier_coord(t, Coord2::new(1.0, 1.0), Coord2::new(3.0, 3.0), Coord2::new(4.0, 4.0), Coord2::new(2.0, 2.0));

        assert!(point.distance_to(&another_point) < 0.001);
    }
}

#[test]
fn reversed_curve_runs_backwards() {
    let curve           = bezier::Curve::from_points(Coord2::new(0.0, 0.0), (Coord2::new(0.2, 0.7), Coord2::new(0.4, 0.9)), Coord2::new(1.0, 1.0));
    let reversed: bezier::Curve<_> = curve.reverse();

    assert!(reversed.start_point() == Coord2::new(1.0, 1.0));
    assert!(reversed.end_point() == Coord2::new(0.0, 0.0));
    assert!(reversed.control_points() == (Coord2::new(0.4, 0.9), Coord2::new(0.2, 0.7)));

    for x in 0..=10 {
        let t = (x as f64)/10.0;

        assert!(curve.point_at_pos(t).distance_to(&reversed.point_at_pos(1.0-t)) < 0.0001);
    }
}

#[test]
fn curve_with_nan_is_not_finite() {
    let curve = bezier::Curve::from_points(Coord2::new(0.0, 0.0), (Coord2::new(f64::NAN, 0.7), Coord2::new(0.4, 0.9)), Coord2::new(1.0, 1.0));

    assert!(!curve.is_finite());
}
