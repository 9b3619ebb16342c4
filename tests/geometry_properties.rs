//! Property tests for the globe model
//!
//! The "for all" properties are checked over seeded random sweeps so that
//! failures are reproducible.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use globe::constants::{EARTH_RADIUS, HALF_PI, TAU};
use globe::{CartesianPoint, GeographicPoint, GlobeError, ReferenceSphere};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use std::f64::consts::PI;

const SWEEP: usize = 500;

fn random_cartesian(rng: &mut StdRng) -> CartesianPoint {
    CartesianPoint::new(
        rng.gen_range(-1e7..1e7),
        rng.gen_range(-1e7..1e7),
        rng.gen_range(-1e7..1e7),
    )
}

fn random_geographic(rng: &mut StdRng) -> GeographicPoint {
    GeographicPoint::new(
        rng.gen_range(-PI..PI),
        rng.gen_range(-HALF_PI..=HALF_PI),
        rng.gen_range(-0.5 * EARTH_RADIUS..1e7),
    )
}

#[test]
fn test_distance_to_self_is_zero() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..SWEEP {
        let cart = random_cartesian(&mut rng);
        assert_eq!(cart.distance(&cart), 0.0);

        let geo = random_geographic(&mut rng);
        assert_eq!(geo.distance(&geo), 0.0);
    }
}

#[test]
fn test_distances_are_symmetric() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..SWEEP {
        let (p, q) = (random_cartesian(&mut rng), random_cartesian(&mut rng));
        assert_eq!(p.distance(&q), q.distance(&p));

        let (a, b) = (random_geographic(&mut rng), random_geographic(&mut rng));
        assert_eq!(a.distance(&b), b.distance(&a));
        assert!((0.0..=PI).contains(&a.distance(&b)));
    }
}

#[test]
fn test_cross_product_is_anti_commutative() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SWEEP {
        let (p, q) = (random_cartesian(&mut rng), random_cartesian(&mut rng));
        let pq = p.cross(&q);
        let qp = q.cross(&p);
        assert_eq!(pq.x(), -qp.x());
        assert_eq!(pq.y(), -qp.y());
        assert_eq!(pq.z(), -qp.z());

        assert_eq!(p.cross(&p), CartesianPoint::default());
    }
}

#[test]
fn test_geographic_round_trip() {
    let sphere = ReferenceSphere::EARTH;
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..SWEEP {
        // Stay clear of the poles, where longitude is not recoverable
        let geo = GeographicPoint::new(
            rng.gen_range(-PI..PI),
            rng.gen_range(-1.5..1.5),
            rng.gen_range(-0.5 * EARTH_RADIUS..1e7),
        );
        let back = sphere.to_geographic(&sphere.to_cartesian(&geo));

        assert_abs_diff_eq!(back.longitude(), geo.longitude(), epsilon = 1e-9);
        assert_abs_diff_eq!(back.latitude(), geo.latitude(), epsilon = 1e-9);
        assert_abs_diff_eq!(back.altitude(), geo.altitude(), epsilon = 1e-6);
    }
}

#[test]
fn test_cartesian_round_trip() {
    let sphere = ReferenceSphere::EARTH;
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SWEEP {
        let cart = random_cartesian(&mut rng);
        let back = CartesianPoint::from_geographic(&GeographicPoint::from_cartesian(&cart));
        assert!(back.distance(&cart) < 1e-6, "{} came back as {}", cart, back);
        assert_eq!(
            back,
            sphere.to_cartesian(&sphere.to_geographic(&cart)),
            "default sphere must be the Earth"
        );
    }
}

#[test]
fn test_rotation_preserves_distances() {
    let mut rng = StdRng::seed_from_u64(6);
    let origin = CartesianPoint::default();
    for _ in 0..SWEEP {
        let point = random_cartesian(&mut rng);
        let axis = random_cartesian(&mut rng);
        let theta = rng.gen_range(-10.0..10.0);

        let mut rotated = point;
        rotated.rotate(&axis, theta).unwrap();

        assert_relative_eq!(
            rotated.distance(&origin),
            point.distance(&origin),
            max_relative = 1e-12
        );

        // Distance to the axis line is |p × k̂|
        let unit_axis = axis.normalize().unwrap();
        assert_relative_eq!(
            rotated.cross(&unit_axis).magnitude(),
            point.cross(&unit_axis).magnitude(),
            epsilon = 1e-6,
            max_relative = 1e-9
        );
    }
}

#[rstest]
#[case(0.0)]
#[case(TAU)]
#[case(-TAU)]
fn test_full_turns_return_to_start(#[case] theta: f64) {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let point = random_cartesian(&mut rng);
        let mut rotated = point;
        rotated.rotate(&random_cartesian(&mut rng), theta).unwrap();
        assert!(
            rotated.distance(&point) < 1e-7,
            "{} turned by {} ended at {}",
            point,
            theta,
            rotated
        );
    }
}

#[rstest]
#[case(CartesianPoint::new(1.0, 2.0, 3.0))]
#[case(CartesianPoint::new(-4.0, 0.0, 1e-3))]
#[case(CartesianPoint::new(f64::NAN, 1.0, 1.0))]
fn test_degenerate_axis_rejected(#[case] point: CartesianPoint) {
    let mut rotated = point;
    let result = rotated.rotate(&CartesianPoint::new(0.0, 0.0, 0.0), 0.8);
    assert_eq!(result, Err(GlobeError::DegenerateAxis));
    // Compare bit patterns so a NaN component counts as unchanged
    assert_eq!(rotated.x().to_bits(), point.x().to_bits());
    assert_eq!(rotated.y().to_bits(), point.y().to_bits());
    assert_eq!(rotated.z().to_bits(), point.z().to_bits());
}

#[test]
fn test_longitude_overflow_example() {
    let mut point = GeographicPoint::default();
    point.set_longitude(PI + 1.0);
    assert_abs_diff_eq!(point.longitude(), -PI + 1.0, epsilon = 1e-14);
}

#[test]
fn test_latitude_overflow_example() {
    let mut point = GeographicPoint::default();
    point.set_latitude(-5.0 * PI / 4.0);
    assert_abs_diff_eq!(point.latitude(), PI / 4.0, epsilon = 1e-14);
    assert_abs_diff_eq!(point.longitude(), -PI, epsilon = 1e-14);
}

#[test]
fn test_unit_axes_examples() {
    let x_axis = CartesianPoint::new(1.0, 0.0, 0.0);
    let y_axis = CartesianPoint::new(0.0, 1.0, 0.0);
    assert_eq!(x_axis.distance(&y_axis), 2f64.sqrt());
    assert_eq!(x_axis.cross(&y_axis), CartesianPoint::new(0.0, 0.0, 1.0));
}

#[rstest]
#[case(0.0, 0.0)]
#[case(1.0, 0.5)]
#[case(-2.5, -1.2)]
#[case(3.0, HALF_PI)]
fn test_antipodes_are_pi_apart(#[case] longitude: f64, #[case] latitude: f64) {
    let point = GeographicPoint::new(longitude, latitude, 0.0);
    let antipode = GeographicPoint::new(longitude + PI, -latitude, 0.0);
    assert_eq!(point.distance(&point), 0.0);
    assert_abs_diff_eq!(point.distance(&antipode), PI, epsilon = 1e-12);
}

#[test]
fn test_invariants_hold_after_any_mutation() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut point = GeographicPoint::default();
    for _ in 0..SWEEP {
        match rng.gen_range(0..3) {
            0 => point.set_longitude(rng.gen_range(-100.0..100.0)),
            1 => point.set_latitude(rng.gen_range(-100.0..100.0)),
            _ => point = point.with_altitude(rng.gen_range(-1e7..1e7)),
        }
        assert!((-PI..PI).contains(&point.longitude()));
        assert!((-HALF_PI..=HALF_PI).contains(&point.latitude()));
        assert!((-1.0..1.0).contains(&point.long_ratio()));
        assert!((-1.0..=1.0).contains(&point.lat_ratio()));
    }
}
