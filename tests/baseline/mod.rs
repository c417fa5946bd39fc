//! # Regression baselines
//!
//! Small problems of which the outcome is known, solved through the public interface only.
use std::sync::Arc;
use std::thread;

use approx::assert_abs_diff_eq;
use relp_num::{RationalBig, RB};

use bigm_lp::{ConstraintSystem, ConstraintType, Objective, OptimizationResult, SystemError};
use bigm_lp::algorithm::simplex::observer::Logging;
use bigm_lp::algorithm::simplex::strategy::pivot_rule::FirstProfitable;

use crate::numbers;

/// Build a system from rows `(coefficients, relation, rhs)`.
fn build(rows: &[(&[i32], &str, i32)]) -> ConstraintSystem<f64> {
    let mut system = ConstraintSystem::new();
    for &(coefficients, relation, rhs) in rows {
        system.add_constraint(
            numbers(coefficients),
            f64::from(rhs),
            relation.parse().unwrap(),
        ).unwrap();
    }
    system
}

fn assert_optimum(result: OptimizationResult<f64>, values: &[f64], objective_value: f64) {
    let solution = result.into_solution().expect("expected a finite optimum");
    assert_eq!(solution.len(), values.len());
    for (computed, expected) in solution.values().iter().zip(values) {
        assert_abs_diff_eq!(*computed, *expected, epsilon = 1e-6);
    }
    assert_abs_diff_eq!(*solution.objective_value(), objective_value, epsilon = 1e-6);
}

fn production_mix() -> ConstraintSystem<f64> {
    build(&[
        (&[2, 1], "<=", 8),
        (&[1, 2], "<=", 9),
        (&[1, 1], "<=", 5),
    ])
}

#[test]
fn bounded() {
    let system = production_mix();
    assert_eq!(system.is_feasible(), Ok(true));

    let result = system.optimize(&[-5f64, -7f64], Objective::Minimize).unwrap();
    assert!(result.is_bounded());
    assert_optimum(result, &[1f64, 4f64], -33f64);
}

#[test]
fn unbounded() {
    let system = build(&[(&[1, -4], "<=", 8)]);
    assert_eq!(system.is_feasible(), Ok(true));
    assert_eq!(system.optimize(&[2f64, 5f64], Objective::Maximize), Ok(OptimizationResult::Unbounded));

    let system = build(&[
        (&[1, -4], "<=", 8),
        (&[-1, 1], "<=", 6),
        (&[-3, 2], "<=", 5),
    ]);
    let result = system.optimize(&[2f64, 5f64], Objective::Maximize).unwrap();
    assert!(!result.is_bounded());
    assert_eq!(result.solution(), None);
}

#[test]
fn infeasible() {
    let system = build(&[
        (&[1, 1], "<=", 2),
        (&[1, -3], ">=", 3),
    ]);
    assert_eq!(system.is_feasible(), Err(SystemError::Infeasible));
    assert_eq!(system.optimize(&[-2f64, -1f64], Objective::Minimize), Err(SystemError::Infeasible));
    assert!(!system.is_feasibility_verified());
}

#[test]
fn mixed_relations() {
    let system = build(&[
        (&[1, 0, 1], "=", 5),
        (&[0, 1, 1], ">=", 10),
        (&[1, 1, 0], "<=", 20),
    ]);
    let result = system.optimize(&[1f64, -1f64, 3f64], Objective::Maximize).unwrap();
    assert_optimum(result, &[0f64, 5f64, 5f64], 10f64);
}

#[test]
fn negative_right_hand_side() {
    let system = build(&[
        (&[1, -1, 2, -1], "GE", -2),
        (&[2, 2, 1, -4], "LE", 4),
        (&[1, -1, 2, 0], "LE", 2),
    ]);
    let result = system.optimize(&[2f64, 3f64, -1f64, -3f64], Objective::Maximize).unwrap();
    assert_optimum(result, &[6f64, 4f64, 0f64, 4f64], 12f64);
}

#[test]
fn equalities() {
    let system = build(&[
        (&[2, 0, 3], "EQ", 1),
        (&[3, 2, -1], "EQ", 5),
    ]);
    let result = system.optimize(&[1f64, -2f64, 0f64], Objective::Minimize).unwrap();
    assert_optimum(result, &[0f64, 8f64 / 3f64, 1f64 / 3f64], -16f64 / 3f64);
}

#[test]
fn all_relations() {
    let rows: [(&[i32], &str, i32); 4] = [
        (&[2, -1, 3], ">=", 4),
        (&[1, 2, 0], ">=", 6),
        (&[3, -1, 2], "<=", 7),
        (&[-1, 5, 1], "=", 6),
    ];
    let cost = [2, -3, 5];

    // The penalty dominates the rounding error of floating point numbers
    let result = build(&rows).optimize(&numbers::<f64>(&cost), Objective::Maximize).unwrap();
    assert_optimum(result, &[8f64 / 3f64, 5f64 / 3f64, 1f64 / 3f64], 2f64);

    // Exact with rational numbers
    let mut system = ConstraintSystem::<RationalBig>::new();
    for (coefficients, relation, rhs) in rows {
        system.add_constraint(numbers(coefficients), crate::number(rhs), relation.parse().unwrap()).unwrap();
    }
    let result = system.optimize(&numbers::<RationalBig>(&cost), Objective::Maximize).unwrap();
    assert_eq!(
        result.into_solution().map(|s| s.into_vec()),
        Some(vec![RB!(8, 3), RB!(5, 3), RB!(1, 3), RB!(2)]),
    );
}

#[test]
fn pivot_rule_and_observer() {
    let system = production_mix();
    let result = system
        .optimize_with::<FirstProfitable, _>(&[-5f64, -7f64], Objective::Minimize, &mut Logging)
        .unwrap();
    assert_optimum(result, &[1f64, 4f64], -33f64);
}

#[test]
fn parsing_tags() {
    assert_eq!("<=".parse(), Ok(ConstraintType::Less));
    assert_eq!("max".parse(), Ok(Objective::Maximize));
    assert_eq!(
        "=>".parse::<ConstraintType>(),
        Err(SystemError::InvalidRelation("=>".to_string())),
    );
}

#[test]
fn shared_between_threads() {
    let system = Arc::new(production_mix());

    let handles = (0..4)
        .map(|_| {
            let system = Arc::clone(&system);
            thread::spawn(move || system.optimize(&[-5f64, -7f64], Objective::Minimize))
        })
        .collect::<Vec<_>>();
    for handle in handles {
        assert_optimum(handle.join().unwrap().unwrap(), &[1f64, 4f64], -33f64);
    }
    assert!(system.is_feasibility_verified());
}
