//! # Feasibility
//!
//! Whether a constraint system has any solution is decided by optimizing a surrogate problem: an
//! extra variable that is fixed at zero is maximized. The Big-M penalty makes that optimum
//! negative exactly when no basis without artificial variables can be reached.
use std::iter::once;

use log::{debug, warn};

use crate::algorithm::simplex::{primal, Termination};
use crate::algorithm::simplex::observer::Observer;
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::constraint_system::Constraint;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::error::SystemError;
use crate::data::number_types::traits::{Field, FieldRef};

/// Constraints of the surrogate problem.
///
/// Every constraint gets a zero coefficient for one extra variable, and one constraint is added
/// that fixes the extra variable at zero.
///
/// # Arguments
///
/// * `constraints`: Constraints with `nr_variables` coefficients each.
/// * `nr_variables`: Number of decision variables, excluding the extra one.
pub fn surrogate_constraints<F: Field>(
    constraints: Vec<Constraint<F>>,
    nr_variables: usize,
) -> Vec<Constraint<F>> {
    constraints.into_iter()
        .map(Constraint::widened)
        .chain(once(Constraint::new(unit_cost(nr_variables), F::zero(), ConstraintType::Equal)))
        .collect()
}

/// Coefficients that select only the extra variable of the surrogate problem.
fn unit_cost<F: Field>(nr_variables: usize) -> Vec<F> {
    (0..nr_variables).map(|_| F::zero()).chain(once(F::one())).collect()
}

/// Decide whether any point satisfies all constraints.
///
/// # Arguments
///
/// * `constraints`: A copy of the constraints, which is consumed.
/// * `nr_variables`: Number of coefficients of each constraint.
/// * `big_m`: Penalty of the artificial variables.
/// * `observer`: Sees the tableaus of the surrogate problem.
///
/// # Return value
///
/// `SystemError::Infeasible` if the surrogate optimum is negative.
pub fn check_feasibility<F, PR, O>(
    constraints: Vec<Constraint<F>>,
    nr_variables: usize,
    big_m: F,
    observer: &mut O,
) -> Result<(), SystemError>
where
    F: Field,
    for<'r> &'r F: FieldRef<F>,
    PR: PivotRule,
    O: Observer<F>,
{
    let nr_constraints = constraints.len();
    let constraints = surrogate_constraints(constraints, nr_variables);
    let mut tableau = Tableau::new(constraints, nr_variables + 1, big_m);
    observer.initial_tableau(&tableau);
    tableau.add_objective_row(&unit_cost(nr_variables), Objective::Maximize);
    observer.objective_row_added(&tableau);

    match primal::<_, PR, _>(&mut tableau, observer) {
        Termination::Optimal => {
            let value = tableau.objective_function_value();
            if value.is_negative() {
                debug!("Surrogate optimum is {}, {} constraints are infeasible", value, nr_constraints);
                Err(SystemError::Infeasible)
            } else {
                debug!("Surrogate optimum is {}, {} constraints are feasible", value, nr_constraints);
                Ok(())
            }
        },
        Termination::Unbounded => {
            // The extra variable is fixed at zero, so this only happens through rounding
            warn!("Surrogate problem of {} constraints is unbounded, taken as feasible", nr_constraints);
            Ok(())
        },
    }
}
