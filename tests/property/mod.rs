//! # Properties
//!
//! Generated problems are kept small and have integer data, such that the expected outcome is
//! known without solving them.
use proptest::collection::vec;
use proptest::prelude::*;
use relp_num::RationalBig;

use bigm_lp::{ConstraintSystem, ConstraintType, Objective};

use crate::{number, numbers};

type Row = (Vec<i32>, ConstraintType, i32);

/// Constraints that the origin satisfies: `<=` with a nonnegative, `>=` with a nonpositive and
/// `=` with a zero right-hand side.
fn origin_feasible() -> impl Strategy<Value = (usize, Vec<Row>)> {
    (1..=3_usize).prop_flat_map(|nr_variables| {
        let relation = prop_oneof![
            Just(ConstraintType::Less),
            Just(ConstraintType::Greater),
            Just(ConstraintType::Equal),
        ];
        let row = (vec(-5..=5_i32, nr_variables), relation, 0..=10_i32)
            .prop_map(|(coefficients, relation, magnitude)| {
                let rhs = match relation {
                    ConstraintType::Less => magnitude,
                    ConstraintType::Greater => -magnitude,
                    ConstraintType::Equal => 0,
                };
                (coefficients, relation, rhs)
            });

        (Just(nr_variables), vec(row, 0..=4))
    })
}

/// Upper bounds for each variable, extra `<=` rows and a cost vector.
fn box_bounded() -> impl Strategy<Value = (Vec<i32>, Vec<(Vec<i32>, i32)>, Vec<i32>)> {
    (1..=3_usize).prop_flat_map(|nr_variables| (
        vec(1..=10_i32, nr_variables),
        vec((vec(-5..=5_i32, nr_variables), 0..=20_i32), 0..=3),
        vec(-5..=5_i32, nr_variables),
    ))
}

fn box_bounded_system(bounds: &[i32], rows: &[(Vec<i32>, i32)]) -> ConstraintSystem<f64> {
    let nr_variables = bounds.len();
    let mut system = ConstraintSystem::with_variables(nr_variables);
    for (j, &bound) in bounds.iter().enumerate() {
        let mut coefficients = vec![0f64; nr_variables];
        coefficients[j] = 1f64;
        system.add_constraint(coefficients, f64::from(bound), ConstraintType::Less).unwrap();
    }
    for (coefficients, rhs) in rows {
        system.add_constraint(numbers(coefficients), f64::from(*rhs), ConstraintType::Less).unwrap();
    }
    system
}

proptest! {
    /// The origin is a solution, so the system is feasible
    #[test]
    fn origin_is_feasible((nr_variables, rows) in origin_feasible()) {
        let mut system = ConstraintSystem::<RationalBig>::with_variables(nr_variables);
        for (coefficients, relation, rhs) in &rows {
            system.add_constraint(numbers(coefficients), number(*rhs), *relation).unwrap();
        }

        prop_assert_eq!(system.is_feasible(), Ok(true));
        prop_assert!(system.is_feasibility_verified());
    }

    /// Maximizing `c` is minimizing `-c`
    #[test]
    fn maximize_is_negated_minimize((bounds, rows, cost) in box_bounded()) {
        let system = box_bounded_system(&bounds, &rows);
        let cost = numbers::<f64>(&cost);
        let negated = cost.iter().map(|&c| -c).collect::<Vec<_>>();

        let maximum = system.optimize(&cost, Objective::Maximize).unwrap().into_solution().unwrap();
        let minimum = system.optimize(&negated, Objective::Minimize).unwrap().into_solution().unwrap();
        prop_assert_eq!(maximum.values(), minimum.values());
        prop_assert_eq!(*maximum.objective_value(), -*minimum.objective_value());
    }

    /// Solving doesn't change the system
    #[test]
    fn optimize_is_idempotent((bounds, rows, cost) in box_bounded()) {
        let system = box_bounded_system(&bounds, &rows);
        let constraints = system.constraints().to_vec();
        let cost = numbers::<f64>(&cost);

        let first = system.optimize(&cost, Objective::Minimize);
        let second = system.optimize(&cost, Objective::Minimize);
        prop_assert_eq!(first, second);
        prop_assert_eq!(system.constraints(), constraints.as_slice());
    }

    /// A bounded region gives a finite optimum, which satisfies all constraints
    #[test]
    fn optimum_is_feasible((bounds, rows, cost) in box_bounded()) {
        let system = box_bounded_system(&bounds, &rows);
        let cost = numbers::<f64>(&cost);

        let result = system.optimize(&cost, Objective::Maximize).unwrap();
        prop_assert!(result.is_bounded());
        let solution = result.into_solution().unwrap();

        let values = solution.values();
        prop_assert!(values.iter().all(|&value| value >= -1e-9));
        for constraint in system.constraints() {
            let lhs = constraint.coefficients().iter().zip(values).map(|(a, x)| a * x).sum::<f64>();
            prop_assert!(lhs <= constraint.rhs() + 1e-9);
        }
        let objective_value = cost.iter().zip(values).map(|(c, x)| c * x).sum::<f64>();
        prop_assert!((objective_value - solution.objective_value()).abs() < 1e-9);
    }
}
