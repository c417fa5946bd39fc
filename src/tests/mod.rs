//! # Integration tests that require a look inside the crate.
//!
//! Each problem is taken through all stages of solving, and the intermediate tableaus are compared
//! to values that were computed by hand.
//!
//! Convention for function names:
//!
//! * `fn constraint_system()`
//! * `fn initial_tableau()`
//! * `fn objective_row()`
//! * `fn final_tableau()`
//! * `fn surrogate_*()` for the same stages of the feasibility check
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::Field;


/// Compare all rows of a tableau, including the objective row if it is present.
pub fn assert_rows<F: Field>(tableau: &Tableau<F>, expected: &[Vec<F>]) {
    let nr_rows = tableau.nr_rows() + if tableau.has_objective_row() { 1 } else { 0 };
    assert_eq!(nr_rows, expected.len());
    for (i, row) in expected.iter().enumerate() {
        assert_eq!(tableau.row(i), row.as_slice(), "row {}", i);
    }
}
