use bauwerk_geom::Vec3;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn vapprox_abs_rel(a: Vec3, b: Vec3, atol: f32, rtol: f32) -> bool {
    approx_abs_rel(a.x, b.x, atol, rtol)
        && approx_abs_rel(a.y, b.y, atol, rtol)
        && approx_abs_rel(a.z, b.z, atol, rtol)
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    proptest::num::f32::NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e6)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Addition commutativity: a + b == b + a (element-wise)
    #[test]
    fn add_commutes(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox_abs_rel(a + b, b + a, 1e-6, 1e-6));
    }

    // Subtraction undoes addition, up to rounding in the intermediate sum
    #[test]
    fn sub_inverts_add(a in arb_vec3(), b in arb_vec3()) {
        let r = (a + b) - b;
        for (got, want, other) in [(r.x, a.x, b.x), (r.y, a.y, b.y), (r.z, a.z, b.z)] {
            let tol = 1e-3 + 1e-6 * (want.abs() + other.abs());
            prop_assert!((got - want).abs() <= tol);
        }
    }

    // Dot product is symmetric
    #[test]
    fn dot_symmetric(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(approx_abs_rel(a.dot(b), b.dot(a), 1e-6, 1e-6));
    }

    // Normalizing a nonzero vector yields unit length
    #[test]
    fn normalized_unit_length(a in arb_vec3()) {
        prop_assume!(a.length() > 1e-3);
        prop_assert!(approx(a.normalized().length(), 1.0, 1e-3));
    }

    // Rounding an exact axis normal is lossless
    #[test]
    fn rounded_exact_on_axis_normals(axis in 0usize..3, sign in prop::bool::ANY) {
        let s = if sign { 1.0f32 } else { -1.0 };
        let v = match axis {
            0 => Vec3::new(s, 0.0, 0.0),
            1 => Vec3::new(0.0, s, 0.0),
            _ => Vec3::new(0.0, 0.0, s),
        };
        let si = if sign { 1i32 } else { -1 };
        let expect = match axis {
            0 => (si, 0, 0),
            1 => (0, si, 0),
            _ => (0, 0, si),
        };
        prop_assert_eq!(v.rounded(), expect);
    }
}
