use computor::{parse, simplify_fraction, sqrt};
use num_integer::Integer;
use proptest::prelude::*;

fn non_zero() -> impl Strategy<Value = i64> {
    prop_oneof![(-100_000i64..=-1i64), (1i64..=100_000i64)]
}

// Quarter steps keep sums exact, so a reduced form always re-parses to the
// same coefficients.
fn term() -> impl Strategy<Value = (f64, u64)> {
    ((-400i32..400).prop_map(|q| f64::from(q) / 4.0), 0u64..5)
}

fn side(terms: &[(f64, u64)]) -> String {
    if terms.is_empty() {
        return "0".to_string();
    }
    terms
        .iter()
        .map(|(coeff, exp)| format!("{coeff} * X^{exp}"))
        .collect::<Vec<_>>()
        .join(" + ")
}

proptest! {
    #[test]
    fn fraction_is_reduced_with_positive_denominator(n in -100_000i64..100_000, d in non_zero()) {
        let fraction = simplify_fraction(n, d).unwrap();
        let (num, den) = (*fraction.numer(), *fraction.denom());
        prop_assert!(den > 0);
        prop_assert_eq!(num.gcd(&den), 1);
        prop_assert_eq!(num * d, n * den);
    }

    #[test]
    fn sqrt_squares_back(x in 0.0f64..1e12) {
        let root = sqrt(x);
        prop_assert!((root * root - x).abs() <= 1e-9 * x.max(1.0), "sqrt({}) = {}", x, root);
    }

    #[test]
    fn reduced_form_is_canonical(
        left in prop::collection::vec(term(), 0..6),
        right in prop::collection::vec(term(), 0..6),
    ) {
        let input = format!("{} = {}", side(&left), side(&right));
        let mut equation = parse(&input).unwrap();
        let reduced = equation.reduce();

        prop_assert!(reduced.ends_with(" = 0"), "{}", reduced);
        prop_assert!(!reduced.contains("+ -"), "{}", reduced);

        let mut reparsed = parse(&reduced).unwrap();
        prop_assert_eq!(reparsed.reduce(), reduced.clone());
        prop_assert_eq!(reparsed.degree(), equation.degree());
    }

    #[test]
    fn integer_roots_are_recovered(r1 in -20i64..20, r2 in -20i64..20, a in 1i64..6) {
        let b = -a * (r1 + r2);
        let c = a * r1 * r2;
        let input = format!("{a} * X^2 + {b} * X + {c} = 0");
        let mut equation = parse(&input).unwrap();
        equation.reduce();

        let mut roots = equation.solve().real_roots();
        roots.sort_by(f64::total_cmp);
        let mut expected = vec![r1 as f64, r2 as f64];
        expected.sort_by(f64::total_cmp);
        expected.dedup();

        prop_assert_eq!(roots.len(), expected.len());
        for (root, want) in roots.iter().zip(&expected) {
            prop_assert!((root - want).abs() < 1e-9, "{}: {:?}", input, roots);
        }
    }
}
