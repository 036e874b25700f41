use flo_easing_curves::*;
use flo_easing_curves::bezier::*;

#[test]
fn sample_curve_from_start_to_end() {
    let curve   = Curve::from_points(Coord2::new(0.0, 0.0), (Coord2::new(0.25, 0.1), Coord2::new(0.75, 0.9)), Coord2::new(1.0, 1.0));
    let samples = sample_curve(&curve, 30);

    assert!(samples.len() == 30);
    assert!(samples[0] == Coord2::new(0.0, 0.0));
    assert!(samples[29].distance_to(&Coord2::new(1.0, 1.0)) < 1e-9);
}

#[test]
fn samples_are_evenly_spaced_in_t() {
    let curve   = Curve::from_points(Coord2::new(0.0, 0.0), (Coord2::new(0.25, 0.1), Coord2::new(0.75, 0.9)), Coord2::new(1.0, 1.0));
    let samples = sample_curve(&curve, 5);

    for (index, sample) in samples.iter().enumerate() {
        let t = (index as f64)/4.0;
        assert!(sample.distance_to(&curve.point_at_pos(t)) < 1e-12);
    }
}

#[test]
fn sample_single_point() {
    let curve = Curve::from_points(Coord2::new(2.0, 3.0), (Coord2::new(0.25, 0.1), Coord2::new(0.75, 0.9)), Coord2::new(1.0, 1.0));

    assert!(sample_curve(&curve, 1) == vec![Coord2::new(2.0, 3.0)]);
    assert!(sample_curve(&curve, 0).len() == 0);
}
