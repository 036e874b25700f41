use super::*;
use flo_easing_curves::bezier::*;

#[test]
fn basis_at_t0_is_w1() {
    assert!(basis(0.0, 2.0, 3.0, 4.0, 5.0) == 2.0);
}

#[test]
fn basis_at_t1_is_w4() {
    assert!(basis(1.0, 2.0, 3.0, 4.0, 5.0) == 5.0);
}

#[test]
fn coefficients_for_weights() {
    let (a, b, c, d) = cubic_coefficients(0.0, 0.33, 0.67, 1.0);

    assert!(approx_equal(a, -0.02));
    assert!(approx_equal(b, 0.03));
    assert!(approx_equal(c, 0.99));
    assert!(d == 0.0);
}

#[test]
fn coord_at_t0_is_start_point() {
    let p0 = Coord2::new(2.0, -3.0);
    let p1 = Coord2::new(5.5, 1.25);
    let p2 = Coord2::new(-4.0, 8.0);
    let p3 = Coord2::new(10.0, 12.0);

    assert!(bezier_coord(0.0, p0, p1, p2, p3) == p0);
}

#[test]
fn coord_at_t1_is_end_point() {
    let p0 = Coord2::new(2.0, -3.0);
    let p1 = Coord2::new(5.5, 1.25);
    let p2 = Coord2::new(-4.0, 8.0);
    let p3 = Coord2::new(10.0, 12.0);

    assert!(bezier_coord(1.0, p0, p1, p2, p3) == p3);
}

#[test]
fn coord_at_midpoint() {
    let point = bezier_coord(0.5, Coord2::new(0.0, 0.0), Coord2::new(0.33, 0.11), Coord2::new(0.67, 0.44), Coord2::new(1.0, 1.0));

    // x = -0.02/8 + 0.03/4 + 0.99/2, y = 0.01/8 + 0.66/4 + 0.33/2
    assert!((point.x - 0.5).abs() < 1e-12);
    assert!((point.y - 0.33125).abs() < 1e-12);
}

#[test]
fn coord_matches_basis_function() {
    let p0 = Coord2::new(1.0, 4.0);
    let p1 = Coord2::new(2.5, -1.0);
    let p2 = Coord2::new(3.0, 7.0);
    let p3 = Coord2::new(6.0, 2.0);

    for x in 0..=20 {
        let t       = (x as f64)/20.0;
        let point   = bezier_coord(t, p0, p1, p2, p3);

        assert!((point.x - basis(t, p0.x, p1.x, p2.x, p3.x)).abs() < 1e-9);
        assert!((point.y - basis(t, p0.y, p1.y, p2.y, p3.y)).abs() < 1e-9);
    }
}

#[test]
fn coord_extrapolates_outside_unit_range() {
    let p0 = Coord2::new(0.0, 0.0);
    let p1 = Coord2::new(1.0, 1.0);
    let p2 = Coord2::new(2.0, 2.0);
    let p3 = Coord2::new(3.0, 3.0);

    // Evenly spaced points make the curve a straight line with x = 3t
    let before  = bezier_coord(-1.0, p0, p1, p2, p3);
    let after   = bezier_coord(2.0, p0, p1, p2, p3);

    assert!(before.distance_to(&Coord2::new(-3.0, -3.0)) < 1e-9);
    assert!(after.distance_to(&Coord2::new(6.0, 6.0)) < 1e-9);
}

#[test]
fn coord_in_one_dimension() {
    assert!((bezier_coord(0.25, 2.0, 3.0, 4.0, 5.0) - basis(0.25, 2.0, 3.0, 4.0, 5.0)).abs() < 1e-12);
}
