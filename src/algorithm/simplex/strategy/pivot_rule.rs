//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::{Field, FieldRef};

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;
    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A column with negative relative cost, or `None` if there is no such column. In that case,
    /// the current basis is optimal.
    fn select_primal_pivot_column<F>(&mut self, tableau: &Tableau<F>) -> Option<usize>
    where
        F: Field,
        for<'r> &'r F: FieldRef<F>;
}

/// Pivot on the column with the most negative relative cost.
///
/// When several columns share that cost, the one with the lowest index is chosen. There is no
/// protection against cycling on degenerate problems.
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F>(&mut self, tableau: &Tableau<F>) -> Option<usize>
    where
        F: Field,
        for<'r> &'r F: FieldRef<F>,
    {
        let mut smallest: Option<(usize, &F)> = None;
        for (column, cost) in tableau.relative_costs().iter().enumerate() {
            if cost.is_negative() {
                let is_smaller = match smallest {
                    Some((_, smallest_cost)) => cost < smallest_cost,
                    None => true,
                };
                if is_smaller {
                    smallest = Some((column, cost));
                }
            }
        }

        smallest.map(|(column, _)| column)
    }
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F>(&mut self, tableau: &Tableau<F>) -> Option<usize>
    where
        F: Field,
        for<'r> &'r F: FieldRef<F>,
    {
        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .find(|&column| tableau.relative_cost(column).is_negative())
    }
}
