//! Property-based tests for fraction arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::Fraction;

    fn gcd(mut a: i64, mut b: i64) -> i64 {
        while b != 0 {
            let temp = b;
            b = a % b;
            a = temp;
        }
        a.abs()
    }

    fn hash_of(f: &Fraction) -> u64 {
        let mut hasher = DefaultHasher::new();
        f.hash(&mut hasher);
        hasher.finish()
    }

    // Small components keep chained arithmetic far away from overflow
    fn small_fraction() -> impl Strategy<Value = Fraction> {
        (-10_000i64..10_000, prop_oneof![(-10_000i64..=-1), (1i64..=10_000)])
            .prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    // Anything the constructor accepts
    fn any_fraction() -> impl Strategy<Value = Fraction> {
        (any::<i64>(), any::<i64>())
            .prop_filter_map("not representable", |(n, d)| Fraction::new(n, d).ok())
    }

    fn nonzero_fraction() -> impl Strategy<Value = Fraction> {
        any_fraction().prop_filter("zero", |f| !f.is_zero())
    }

    proptest! {
        #[test]
        fn normalized_form(n in any::<i64>(), d in any::<i64>()) {
            if let Ok(f) = Fraction::new(n, d) {
                prop_assert!(f.denominator() > 0);
                prop_assert_eq!(gcd(f.numerator(), f.denominator()), 1);
                if f.is_zero() {
                    prop_assert_eq!(f.denominator(), 1);
                }
            }
        }

        #[test]
        fn text_round_trip(f in any_fraction()) {
            prop_assert_eq!(f.to_string().parse::<Fraction>().unwrap(), f);
        }

        #[test]
        fn additive_inverse(f in any_fraction()) {
            prop_assert_eq!(f.plus(f.negate()).unwrap(), Fraction::ZERO);
        }

        #[test]
        fn multiplicative_inverse(f in nonzero_fraction()) {
            prop_assert_eq!(f.times(f.invert().unwrap()).unwrap(), Fraction::ONE);
        }

        #[test]
        fn compare_matches_equality(a in any_fraction(), b in any_fraction()) {
            prop_assert_eq!(a.compare(&b) == Ordering::Equal, a == b);
            prop_assert_eq!(a.compare(&a), Ordering::Equal);
        }

        #[test]
        fn equal_fractions_hash_alike(
            n in -10_000i64..10_000,
            d in prop_oneof![(-10_000i64..=-1), (1i64..=10_000)],
            k in prop_oneof![(-1_000i64..=-1), (1i64..=1_000)],
        ) {
            let a = Fraction::new(n, d).unwrap();
            let b = Fraction::new(n * k, d * k).unwrap();
            prop_assert_eq!(a, b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }

        #[test]
        fn compare_antisymmetric(a in any_fraction(), b in any_fraction()) {
            prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        }

        #[test]
        fn compare_transitive(a in any_fraction(), b in any_fraction(), c in any_fraction()) {
            let mut sorted = [a, b, c];
            sorted.sort();
            prop_assert!(sorted[0] <= sorted[1]);
            prop_assert!(sorted[1] <= sorted[2]);
            prop_assert!(sorted[0] <= sorted[2]);
        }

        #[test]
        fn compare_agrees_with_difference(a in small_fraction(), b in small_fraction()) {
            let difference = a.minus(b).unwrap();
            prop_assert_eq!(a.compare(&b), difference.signum().cmp(&0));
        }

        #[test]
        fn decomposition(f in any_fraction()) {
            let whole = Fraction::from_integer(f.integer_part()).unwrap();
            prop_assert_eq!(whole.plus(f.fraction_part()).unwrap(), f);
            prop_assert!(f.fraction_part().abs() < Fraction::ONE);
            prop_assert!(f.fraction_part().is_zero() || f.fraction_part().signum() == f.signum());
        }

        #[test]
        fn floor_and_ceil_bracket(f in any_fraction()) {
            let floor = Fraction::from_integer(f.floor()).unwrap();
            prop_assert!(floor <= f);
            prop_assert!(f.ceil() - f.floor() <= 1);
        }

        #[test]
        fn add_commutative(a in small_fraction(), b in small_fraction()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn add_associative(a in small_fraction(), b in small_fraction(), c in small_fraction()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn mul_distributive(a in small_fraction(), b in small_fraction(), c in small_fraction()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn divide_undoes_times(a in small_fraction(), b in small_fraction()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!((a * b) / b, a);
        }
    }
}
