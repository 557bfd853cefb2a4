//! Property tests for the algebraic laws the vector operations are expected to uphold.

use approx::{assert_relative_eq, relative_eq};
use graphics_math::{vec3, Vec3, Vec3f, Vector};
use proptest::prelude::*;

prop_compose! {
    fn int_vec3_strategy()(
        x in -1000..1000,
        y in -1000..1000,
        z in -1000..1000,
    ) -> Vec3<i32> {
        vec3(x, y, z)
    }
}

prop_compose! {
    fn float_vec3_strategy()(
        x in -1.0e3_f32..1.0e3,
        y in -1.0e3_f32..1.0e3,
        z in -1.0e3_f32..1.0e3,
    ) -> Vec3f {
        vec3(x, y, z)
    }
}

proptest! {
    #[test]
    fn addition_commutes(a in int_vec3_strategy(), b in int_vec3_strategy()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn elementwise_multiplication_commutes(a in int_vec3_strategy(), b in int_vec3_strategy()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn dot_product_commutes(a in int_vec3_strategy(), b in int_vec3_strategy()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn zero_is_additive_identity(a in int_vec3_strategy()) {
        prop_assert_eq!(a + Vector::ZERO, a);
    }

    #[test]
    fn one_is_multiplicative_identity(a in int_vec3_strategy()) {
        prop_assert_eq!(a * 1, a);
    }

    #[test]
    fn negation_is_an_involution(a in int_vec3_strategy()) {
        prop_assert_eq!(-(-a), a);
    }

    #[test]
    fn subtraction_undoes_addition(a in int_vec3_strategy(), b in int_vec3_strategy()) {
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn assign_ops_match_their_pure_forms(a in int_vec3_strategy(), b in int_vec3_strategy()) {
        let mut v = a;
        v += b;
        prop_assert_eq!(v, a + b);
        let mut v = a;
        v -= b;
        prop_assert_eq!(v, a - b);
        let mut v = a;
        v *= b;
        prop_assert_eq!(v, a * b);
        let mut v = a;
        v *= 3;
        prop_assert_eq!(v, a * 3);
    }

    #[test]
    fn normalized_has_unit_length(a in float_vec3_strategy()) {
        prop_assume!(a.length() > 1.0e-3);
        prop_assert!(relative_eq!(a.normalized().length(), 1.0, max_relative = 1.0e-5));
    }

    #[test]
    fn normalized_is_idempotent(a in float_vec3_strategy()) {
        prop_assume!(a.length() > 1.0e-3);
        let unit = a.normalized();
        prop_assert!(relative_eq!(unit.normalized(), unit, max_relative = 1.0e-5));
    }

    #[test]
    fn cross_product_is_orthogonal_to_both_inputs(
        a in float_vec3_strategy(),
        b in float_vec3_strategy(),
    ) {
        prop_assume!(a.length() > 1.0e-3 && b.length() > 1.0e-3);
        let cross = a.normalized().cross(b.normalized());
        prop_assert!(cross.dot(a.normalized()).abs() < 1.0e-5);
        prop_assert!(cross.dot(b.normalized()).abs() < 1.0e-5);
    }

    #[test]
    fn indexed_writes_are_visible_through_named_fields(
        a in int_vec3_strategy(),
        value in -1000..1000,
        index in 0_usize..3,
    ) {
        let mut v = a;
        v[index] = value;
        prop_assert_eq!(v[index], value);
        let named = [v.x, v.y, v.z];
        prop_assert_eq!(named[index], value);
        let color = [v.r, v.g, v.b];
        prop_assert_eq!(color[index], value);
    }

    #[test]
    fn length_of_scaled_vector_scales(a in float_vec3_strategy(), k in 0.0_f32..100.0) {
        prop_assert!(relative_eq!(
            (a * k).length(),
            a.length() * k,
            max_relative = 1.0e-4
        ));
    }
}

#[test]
fn worked_example() {
    let a = vec3(1.0_f32, 2.0, 3.0);
    let b = vec3(4.0_f32, 5.0, 6.0);
    assert_eq!(a.dot(b), 32.0);
    assert_eq!(a.cross(b), vec3(-3.0, 6.0, -3.0));
    assert_relative_eq!(a.cross(b).dot(a), 0.0);
    assert_relative_eq!(a.cross(b).dot(b), 0.0);
}
