//! # The Simplex algorithm
//!
//! A dense tableau version of the primal Simplex method. No separate first phase is needed to find
//! a basic feasible solution: artificial variables start in the basis, and are driven out by a
//! large penalty in the objective function (the Big-M method).
use log::debug;

use crate::algorithm::simplex::observer::Observer;
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::number_types::traits::{Field, FieldRef};

pub mod feasibility;
pub mod observer;
pub mod strategy;
pub mod tableau;

/// Reason for the pivot loop to stop.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Termination {
    /// No column has a negative relative cost.
    Optimal,
    /// A column with negative relative cost has no positive entry.
    Unbounded,
}

/// Reduces the cost of the basic feasible solution to the optimum, or detects unboundedness.
///
/// # Arguments
///
/// * `tableau`: Tableau of which the objective row was already added.
/// * `observer`: Sees the tableau after every pivot.
///
/// # Return value
///
/// Whether the final basis is optimal. The tableau is left in its final state, such that the
/// solution can be read from it.
pub fn primal<F, PR, O>(tableau: &mut Tableau<F>, observer: &mut O) -> Termination
where
    F: Field,
    for<'r> &'r F: FieldRef<F>,
    PR: PivotRule,
    O: Observer<F>,
{
    debug_assert!(tableau.has_objective_row());

    let mut rule = PR::new();
    let mut nr_pivots = 0_usize;
    let termination = loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        match rule.select_primal_pivot_column(tableau) {
            Some(column) => match tableau.select_primal_pivot_row(column) {
                Some(row) => {
                    tableau.bring_into_basis(row, column);
                    nr_pivots += 1;
                    observer.after_pivot(tableau, row, column);
                },
                None => break Termination::Unbounded,
            },
            None => break Termination::Optimal,
        }
    };

    debug!("Pivot loop stopped after {} pivots: {:?}", nr_pivots, termination);
    observer.finished(tableau, termination);
    termination
}
