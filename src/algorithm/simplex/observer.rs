//! # Observing the Simplex method
//!
//! Hooks that are called with the intermediate tableaus, for diagnostics. Solving itself does no
//! output.
use log::trace;

use crate::algorithm::simplex::Termination;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::Field;

/// Receives the tableau at each stage of a solve.
///
/// All methods do nothing by default.
pub trait Observer<F> {
    /// Called once the constraint rows are built, before the objective row exists.
    fn initial_tableau(&mut self, _tableau: &Tableau<F>) {}
    /// Called after the objective row is added and the artificial columns are priced out.
    fn objective_row_added(&mut self, _tableau: &Tableau<F>) {}
    /// Called after each pivot.
    fn after_pivot(&mut self, _tableau: &Tableau<F>, _row: usize, _column: usize) {}
    /// Called when the pivot loop stops.
    fn finished(&mut self, _tableau: &Tableau<F>, _termination: Termination) {}
}

/// Ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoOp;
impl<F> Observer<F> for NoOp {}

/// Renders every tableau at `trace` level.
#[derive(Copy, Clone, Debug, Default)]
pub struct Logging;
impl<F: Field> Observer<F> for Logging {
    fn initial_tableau(&mut self, tableau: &Tableau<F>) {
        trace!("Initial tableau:\n{}", tableau);
    }

    fn objective_row_added(&mut self, tableau: &Tableau<F>) {
        trace!("With objective row:\n{}", tableau);
    }

    fn after_pivot(&mut self, tableau: &Tableau<F>, row: usize, column: usize) {
        trace!("After pivot on ({}, {}):\n{}", row, column, tableau);
    }

    fn finished(&mut self, tableau: &Tableau<F>, termination: Termination) {
        trace!("Finished ({:?}):\n{}", termination, tableau);
    }
}
