#![allow(clippy::float_cmp)]

use std::f32::consts::PI;

use approx::abs_diff_eq;
use proptest::prelude::*;
use vgkernel::math::{point_segment_distance_squared, triangle_signed_area_2x, Point2};
use vgkernel::tessellation::curve_subdivisions;
use vgkernel::transform::{flatten, widen_to_3x4};
use vgkernel::Affine2D;

fn coefficient() -> impl Strategy<Value = f32> {
    -100.0_f32..100.0
}

fn affine() -> impl Strategy<Value = Affine2D> {
    prop::array::uniform6(coefficient()).prop_map(Affine2D::from_array)
}

/// Transforms whose linear part is comfortably away from singular.
fn well_conditioned_affine() -> impl Strategy<Value = Affine2D> {
    (0.5_f32..10.0, 0.5_f32..10.0, -PI..PI, coefficient(), coefficient()).prop_map(
        |(sx, sy, rads, tx, ty)| {
            // A conventional rotation keeps det = sx * sy.
            let (sn, cs) = rads.sin_cos();
            let rotation = Affine2D::new(cs, sn, -sn, cs, 0.0, 0.0);
            let linear = Affine2D::compose(rotation, Affine2D::scale(sx, sy));
            Affine2D::compose(Affine2D::translate(tx, ty), linear)
        },
    )
}

/// Integer-valued points, so signed areas are computed without rounding.
fn lattice_point() -> impl Strategy<Value = Point2> {
    (-100_i16..100, -100_i16..100).prop_map(|(x, y)| Point2::new(f32::from(x), f32::from(y)))
}

fn point() -> impl Strategy<Value = Point2> {
    (coefficient(), coefficient()).prop_map(|(x, y)| Point2::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_identity_is_neutral(t in affine()) {
        prop_assert_eq!(Affine2D::compose(t, Affine2D::IDENTITY), t);
        prop_assert_eq!(Affine2D::compose(Affine2D::IDENTITY, t), t);
    }

    #[test]
    fn prop_inverse_composes_to_identity(t in well_conditioned_affine()) {
        let round = Affine2D::compose(t, t.inverse());
        prop_assert!(
            abs_diff_eq!(round, Affine2D::IDENTITY, epsilon = 1e-3),
            "round={:?}", round
        );
    }

    #[test]
    fn prop_near_singular_inverse_is_identity(
        a in -1e-4_f32..1e-4,
        b in -1e-4_f32..1e-4,
        tx in coefficient(),
        ty in coefficient(),
    ) {
        // |det| <= 2e-8, far below the singular threshold.
        let t = Affine2D::new(a, b, b, a, tx, ty);
        prop_assert_eq!(t.inverse(), Affine2D::IDENTITY);
    }

    #[test]
    fn prop_signed_area_is_antisymmetric(
        a in lattice_point(),
        b in lattice_point(),
        c in lattice_point(),
    ) {
        let abc = triangle_signed_area_2x(&a, &b, &c);
        prop_assert_eq!(triangle_signed_area_2x(&b, &a, &c), -abc);
        prop_assert_eq!(triangle_signed_area_2x(&c, &b, &a), -abc);
        prop_assert_eq!(triangle_signed_area_2x(&a, &c, &b), -abc);
    }

    #[test]
    fn prop_segment_distance_bounded_by_endpoints(
        x in coefficient(), y in coefficient(),
        p in point(), q in point(),
    ) {
        let d = point_segment_distance_squared(x, y, p.x, p.y, q.x, q.y);
        let to_p = (x - p.x).powi(2) + (y - p.y).powi(2);
        let to_q = (x - q.x).powi(2) + (y - q.y).powi(2);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= to_p.min(to_q) * (1.0 + 1e-4) + 1e-3, "d={} p={} q={}", d, to_p, to_q);
    }

    #[test]
    fn prop_subdivisions_monotonic_in_tolerance(
        radius in 0.1_f32..1000.0,
        span in 0.0_f32..(2.0 * PI),
        tol in 0.01_f32..10.0,
        extra in 0.0_f32..10.0,
    ) {
        let tight = curve_subdivisions(radius, span, tol);
        let loose = curve_subdivisions(radius, span, tol + extra);
        prop_assert!(tight >= 2 && loose >= 2);
        prop_assert!(loose <= tight, "tight={} loose={}", tight, loose);
    }

    #[test]
    fn prop_flatten_layout(t in affine()) {
        let flat = flatten(&widen_to_3x4(&t));
        let m = t.to_array();
        prop_assert_eq!([flat[0], flat[1], flat[4], flat[5], flat[8], flat[9]], m);
        prop_assert_eq!([flat[2], flat[3], flat[6], flat[7], flat[10], flat[11]], [0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }
}
