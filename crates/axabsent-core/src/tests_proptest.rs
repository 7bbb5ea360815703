// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Core Algebra Property Tests
// ─────────────────────────────────────────────────────────────────────

use nalgebra::{DMatrix, DVector};
use proptest::prelude::*;

use axabsent_types::AxError;

use crate::{Absolute, Interaction};

fn square(n: usize) -> impl Strategy<Value = DMatrix<f64>> {
    prop::collection::vec(-10.0f64..10.0, n * n)
        .prop_map(move |data| DMatrix::from_row_slice(n, n, &data))
}

fn symmetric(n: usize) -> impl Strategy<Value = DMatrix<f64>> {
    square(n).prop_map(|a| (&a + a.transpose()) * 0.5)
}

fn vector(n: usize) -> impl Strategy<Value = DVector<f64>> {
    prop::collection::vec(-10.0f64..10.0, n).prop_map(DVector::from_vec)
}

fn rectangular(rows: usize, cols: usize) -> impl Strategy<Value = DMatrix<f64>> {
    prop::collection::vec(-10.0f64..10.0, rows * cols)
        .prop_map(move |data| DMatrix::from_row_slice(rows, cols, &data))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_symmetric_signature_entropy(m in (1usize..6).prop_flat_map(symmetric)) {
        let mut abs = Absolute::new();
        prop_assert!(abs.set_signature(m.clone()).is_ok());
        let expected = (&m * m.transpose()).trace();
        prop_assert!(
            (abs.entropy_signature() - expected).abs() <= 1e-9 * expected.max(1.0),
            "entropy {} != {}", abs.entropy_signature(), expected
        );
        prop_assert!(abs.entropy_signature() >= 0.0);
    }

    #[test]
    fn test_asymmetric_signature_rejected(
        m in (2usize..6).prop_flat_map(square),
        bump in 1.0f64..5.0,
    ) {
        let mut sig = (&m + m.transpose()) * 0.5;
        sig[(0, 1)] += bump;

        let mut abs = Absolute::with_signature_and_state(
            DMatrix::identity(2, 2),
            DVector::from_vec(vec![0.25, -0.5]),
        ).unwrap();
        let before = abs.clone();
        let err = abs.set_signature(sig).unwrap_err();
        prop_assert!(matches!(err, AxError::InvalidArgument(_)));
        prop_assert_eq!(abs, before);
    }

    #[test]
    fn test_non_square_signature_rejected(rows in 1usize..5, extra in 1usize..3) {
        let mut abs = Absolute::new();
        let before = abs.clone();
        prop_assert!(abs.set_signature(DMatrix::zeros(rows, rows + extra)).is_err());
        prop_assert_eq!(abs, before);
    }

    #[test]
    fn test_projection_is_linear(
        (p, s1, s2) in (1usize..5, 1usize..5).prop_flat_map(|(m, n)| {
            (rectangular(m, n), vector(n), vector(n))
        }),
        c in -3.0f64..3.0,
    ) {
        let n = s1.len();
        let mut abs = Absolute::new();
        abs.set_signature(DMatrix::identity(n, n)).unwrap();

        abs.set_state(s1.clone()).unwrap();
        let p1 = abs.project_state(&p).unwrap();
        abs.set_state(s2.clone()).unwrap();
        let p2 = abs.project_state(&p).unwrap();
        abs.set_state(&s1 * c + &s2).unwrap();
        let combined = abs.project_state(&p).unwrap();

        let expected = p1 * c + p2;
        let scale = expected.norm().max(1.0);
        prop_assert!((combined - expected).norm() <= 1e-9 * scale);
    }

    #[test]
    fn test_compose_is_operator_product(
        (op1, op2, sa) in (1usize..5, 1usize..5, 1usize..5).prop_flat_map(|(a, b, c)| {
            (rectangular(b, a), rectangular(c, b), vector(a))
        }),
    ) {
        let (da, db, dc) = (op1.ncols(), op1.nrows(), op2.nrows());
        let a = Absolute::with_signature_and_state(DMatrix::identity(da, da), sa).unwrap();
        let b = Absolute::with_signature_and_state(DMatrix::identity(db, db), DVector::zeros(db)).unwrap();
        let c = Absolute::with_signature_and_state(DMatrix::identity(dc, dc), DVector::zeros(dc)).unwrap();

        let ab = Interaction::new(&a, &b, op1.clone()).unwrap();
        let bc = Interaction::new(&b, &c, op2.clone()).unwrap();
        let ac = bc.compose(&ab).unwrap();

        prop_assert_eq!(ac.operator(), &(&op2 * &op1));
        prop_assert_eq!(ac.source().id(), a.id());
        prop_assert_eq!(ac.target().id(), c.id());
        prop_assert!(ac.action_cost() >= 0.0);
    }
}
