use flo_easing_curves::*;
use flo_easing_curves::bezier::*;

#[test]
fn tangents_for_evenly_spaced_line() {
    let curve = bezier_tangents(Coord2::new(0.0, 0.0), Coord2::new(3.0, 3.0), Coord2::new(1.0, 1.0), Coord2::new(2.0, 2.0));

    assert!(curve.start_point() == Coord2::new(0.0, 0.0));
    assert!(curve.end_point() == Coord2::new(3.0, 3.0));
    assert!(curve.control_points().0.distance_to(&Coord2::new(0.33, 0.33)) < 1e-9);
    assert!(curve.control_points().1.distance_to(&Coord2::new(2.67, 2.67)) < 1e-9);
}

#[test]
fn tangents_for_easing_curve() {
    let curve       = bezier_tangents(Coord2::new(0.0, 0.0), Coord2::new(1.0, 1.0), Coord2::new(0.25, 0.1), Coord2::new(0.75, 0.6));
    let (cp1, cp2)  = curve.control_points();

    assert!(cp1.distance_to(&Coord2::new(0.04, 0.09)) < 1e-9);
    assert!(cp2.distance_to(&Coord2::new(0.91, 0.94)) < 1e-9);
}

#[test]
fn control_points_are_rounded() {
    let curve       = bezier_tangents(Coord2::new(0.0, 0.0), Coord2::new(1.0, 16.0), Coord2::new(0.25, 0.0625), Coord2::new(0.5, 1.0));
    let (cp1, cp2)  = curve.control_points();

    for value in vec![cp1.x, cp1.y, cp2.x, cp2.y] {
        assert!((value*100.0 - f64::round(value*100.0)).abs() < 1e-6);
    }
}

#[test]
fn end_points_are_unchanged() {
    let p0      = Coord2::new(0.123456, -7.654321);
    let p3      = Coord2::new(9.87654, 3.14159);
    let curve   = bezier_tangents(p0, p3, Coord2::new(2.0, -4.0), Coord2::new(6.0, 1.0));

    assert!(curve.start_point() == p0);
    assert!(curve.end_point() == p3);
}

#[test]
fn reversed_points_swap_control_points() {
    let p0          = Coord2::new(1.0, 2.0);
    let through1    = Coord2::new(2.5, 2.2);
    let through2    = Coord2::new(4.0, 5.5);
    let p3          = Coord2::new(6.0, 6.0);

    let forward     = bezier_tangents(p0, p3, through1, through2);
    let backward    = bezier_tangents(p3, p0, through2, through1);

    assert!(forward.control_points().0 == backward.control_points().1);
    assert!(forward.control_points().1 == backward.control_points().0);
}

#[test]
fn coincident_start_point_is_not_finite() {
    let curve = bezier_tangents(Coord2::new(0.0, 0.0), Coord2::new(1.0, 1.0), Coord2::new(0.0, 0.0), Coord2::new(0.75, 0.6));

    assert!(!curve.control_points().0.is_finite());
    assert!(curve.control_points().1.is_finite());
    assert!(!curve.is_finite());
}

#[test]
fn coincident_end_point_is_not_finite() {
    let curve = bezier_tangents(Coord2::new(0.0, 0.0), Coord2::new(1.0, 1.0), Coord2::new(0.25, 0.1), Coord2::new(1.0, 1.0));

    assert!(curve.control_points().0.is_finite());
    assert!(!curve.control_points().1.is_finite());
}

#[test]
fn checked_tangents_reject_coincident_points() {
    let p0 = Coord2::new(0.0, 0.0);
    let p3 = Coord2::new(1.0, 1.0);

    assert!(try_bezier_tangents(p0, p3, p0, Coord2::new(0.75, 0.6)) == Err(CurveError::CoincidentPoints(p0, p0)));
    assert!(try_bezier_tangents(p0, p3, Coord2::new(0.5, 0.5), Coord2::new(0.5, 0.5)) == Err(CurveError::CoincidentPoints(Coord2::new(0.5, 0.5), Coord2::new(0.5, 0.5))));
    assert!(try_bezier_tangents(p0, p3, Coord2::new(0.25, 0.1), p3) == Err(CurveError::CoincidentPoints(p3, p3)));
}

#[test]
fn checked_tangents_match_unchecked() {
    let p0          = Coord2::new(0.0, 0.0);
    let p3          = Coord2::new(1.0, 1.0);
    let through1    = Coord2::new(0.25, 0.1);
    let through2    = Coord2::new(0.75, 0.6);

    assert!(try_bezier_tangents(p0, p3, through1, through2) == Ok(bezier_tangents(p0, p3, through1, through2)));
}
