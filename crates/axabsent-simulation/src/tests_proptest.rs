// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Simulation Property Tests
// ─────────────────────────────────────────────────────────────────────

use nalgebra::{DMatrix, DVector};
use proptest::prelude::*;

use axabsent_core::{Absolute, Interaction};

use crate::{DynamicSimulator, EntityRole, QuantumFieldSimulator};

fn system(n: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<f64>)> {
    (
        prop::collection::vec(-5.0f64..5.0, n),
        prop::collection::vec(-5.0f64..5.0, n),
        prop::collection::vec(-2.0f64..2.0, n * n),
    )
}

fn build(source: &[f64], target: &[f64], op: &[f64]) -> DynamicSimulator {
    let n = source.len();
    let a = Absolute::with_signature_and_state(
        DMatrix::identity(n, n),
        DVector::from_vec(source.to_vec()),
    )
    .unwrap();
    let b = Absolute::with_signature_and_state(
        DMatrix::identity(n, n),
        DVector::from_vec(target.to_vec()),
    )
    .unwrap();
    let inter = Interaction::new(&a, &b, DMatrix::from_row_slice(n, n, op)).unwrap();
    DynamicSimulator::new(&[a, b], &inter).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_dynamics_deterministic(
        (source, target, op) in (1usize..5).prop_flat_map(system),
        steps in 0usize..40,
    ) {
        let mut first = build(&source, &target, &op);
        let mut second = build(&source, &target, &op);
        first.run(steps).unwrap();
        second.run(steps).unwrap();
        prop_assert_eq!(first.get_state(EntityRole::Target), second.get_state(EntityRole::Target));
        prop_assert_eq!(
            first.get_resonance_signature(EntityRole::Target).unwrap(),
            second.get_resonance_signature(EntityRole::Target).unwrap()
        );
        prop_assert_eq!(first.step_count(), steps);
    }

    #[test]
    fn test_resonance_positive_when_moving(
        (source, target, op) in (1usize..5).prop_flat_map(system),
    ) {
        let mut sim = build(&source, &target, &op);
        sim.run(2).unwrap();
        let history = sim.history();
        let moved = (&history[1] - &history[0]).norm() > 0.0;
        let r = sim.get_resonance_signature(EntityRole::Target).unwrap();
        if moved {
            prop_assert!(r > 0.0);
        } else {
            prop_assert_eq!(r, 0.0);
        }
    }

    #[test]
    fn test_field_boundary_never_mutated(
        (nx, ny, real, imag) in (3usize..9, 3usize..9).prop_flat_map(|(nx, ny)| {
            (
                Just(nx),
                Just(ny),
                prop::collection::vec(-1.0f64..1.0, nx * ny),
                prop::collection::vec(-1.0f64..1.0, nx * ny),
            )
        }),
        steps in 1usize..20,
        dt in 0.0f64..0.05,
    ) {
        let real = DMatrix::from_row_slice(nx, ny, &real);
        let imag = DMatrix::from_row_slice(nx, ny, &imag);
        let mut sim = QuantumFieldSimulator::new();
        sim.configure_grid(nx, ny, 1.0, 1.0).unwrap();
        sim.set_initial_conditions(real.clone(), imag.clone()).unwrap();
        sim.evolve(steps, dt).unwrap();

        for i in 0..nx {
            for j in 0..ny {
                if i == 0 || j == 0 || i == nx - 1 || j == ny - 1 {
                    prop_assert_eq!(sim.field_real()[(i, j)], real[(i, j)]);
                    prop_assert_eq!(sim.field_imag()[(i, j)], imag[(i, j)]);
                }
            }
        }
    }
}
