use bauwerk_geom::Vec3;

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::UP, Vec3::new(0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn vec3_add_sub() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(vec3_approx_eq(c, Vec3::new(-3.0, 7.0, -3.0), 1e-6));

    let d = c - a;
    assert!(vec3_approx_eq(d, b, 1e-6));
}

#[test]
fn vec3_add_assign_sub_assign() {
    let mut v = Vec3::new(1.0, 1.0, 1.0);
    v += Vec3::new(2.0, 3.0, 4.0);
    assert!(vec3_approx_eq(v, Vec3::new(3.0, 4.0, 5.0), 1e-6));

    v -= Vec3::new(1.0, 2.0, 3.0);
    assert!(vec3_approx_eq(v, Vec3::new(2.0, 2.0, 2.0), 1e-6));
}

#[test]
fn vec3_scalar_mul_div() {
    let v = Vec3::new(1.5, -2.0, 4.0);
    let m = v * 2.0;
    assert!(vec3_approx_eq(m, Vec3::new(3.0, -4.0, 8.0), 1e-6));
    let d = m / 2.0;
    assert!(vec3_approx_eq(d, v, 1e-6));
}

#[test]
fn vec3_dot_and_length() {
    let a = Vec3::new(1.0, 2.0, 2.0);
    assert!(approx_eq(a.dot(a), 9.0, 1e-6));
    assert!(approx_eq(a.length(), 3.0, 1e-6));
    assert!(approx_eq(a.dot(Vec3::UP), 2.0, 1e-6));
}

#[test]
fn vec3_normalized_unit_or_zero() {
    let a = Vec3::new(0.0, 0.0, 5.0);
    let n = a.normalized();
    assert!(vec3_approx_eq(n, Vec3::new(0.0, 0.0, 1.0), 1e-6));
    // Zero vector stays zero instead of dividing by zero.
    assert!(vec3_approx_eq(Vec3::ZERO.normalized(), Vec3::ZERO, 1e-6));
}

#[test]
fn vec3_rounded_snaps_noisy_normals() {
    assert_eq!(Vec3::new(0.9999, 0.0001, -0.0001).rounded(), (1, 0, 0));
    assert_eq!(Vec3::new(-1.0001, 0.0, 0.0).rounded(), (-1, 0, 0));
    assert_eq!(Vec3::new(0.0, -0.9998, 0.0).rounded(), (0, -1, 0));
}
