//! # The Simplex tableau
//!
//! A dense matrix of which each row is a constraint, followed by a single objective row. The
//! columns are the auxiliary variables (slack, surplus and artificial), then the decision
//! variables, then the right-hand side.
//!
//! Auxiliary columns are handed out constraint by constraint in row order, so the layout follows
//! the order of the constraints:
//!
//! * `<=`: a slack column with coefficient `1`, basic in its row;
//! * `>=`: an artificial column with coefficient `1`, basic in its row, followed by a surplus
//!   column with coefficient `-1`;
//! * `=`: an artificial column with coefficient `1`, basic in its row.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::{repeat_n, Itertools};

use crate::data::linear_program::constraint_system::{Constraint, Counts};
use crate::data::linear_program::elements::{AuxiliaryKind, Objective};
use crate::data::number_types::traits::{Field, FieldRef};

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns its own copy of the constraints; building a tableau never changes the constraint system
/// it was built from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tableau<F> {
    /// Constraint rows, and once added, the objective row as the last element.
    rows: Vec<Vec<F>>,
    /// Maps the rows to the column which is basic in that row.
    basis_indices: Vec<usize>,
    /// The same values as `basis_indices`, for fast membership tests.
    basis_columns: HashSet<usize>,
    /// `(row, column)` for every artificial variable, in row order.
    artificial_positions: Vec<(usize, usize)>,
    /// Kind of each auxiliary column.
    auxiliary_kinds: Vec<AuxiliaryKind>,
    counts: Counts,
    big_m: F,
    has_objective_row: bool,
}

impl<F> Tableau<F>
where
    F: Field,
    for<'r> &'r F: FieldRef<F>,
{
    /// Create the initial tableau of a list of constraints.
    ///
    /// Constraints with a negative right-hand side are multiplied by `-1` first. The initial basis
    /// consists of the slack and artificial variables, which makes the right-hand side a basic
    /// feasible solution.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Each with exactly `nr_variables` coefficients.
    /// * `nr_variables`: Number of decision variables.
    /// * `big_m`: Penalty of the artificial variables, used once the objective row is added.
    pub fn new(constraints: Vec<Constraint<F>>, nr_variables: usize, big_m: F) -> Self {
        debug_assert!(constraints.iter().all(|c| c.coefficients().len() == nr_variables));

        let counts = Counts::derive(nr_variables, &constraints);
        let offset = counts.nr_auxiliary();
        let nr_columns = counts.nr_columns();

        let mut rows = Vec::with_capacity(constraints.len() + 1);
        let mut basis_indices = Vec::with_capacity(constraints.len());
        let mut artificial_positions = Vec::with_capacity(counts.auxiliary[AuxiliaryKind::Artificial]);
        let mut auxiliary_kinds = Vec::with_capacity(offset);
        let mut next_auxiliary = 0;
        for (i, constraint) in constraints.into_iter().map(Constraint::normalized).enumerate() {
            let mut row = vec![F::zero(); nr_columns];

            let kinds = AuxiliaryKind::required_by(constraint.constraint_type());
            for (column, &kind) in (next_auxiliary..).zip(kinds) {
                row[column] = match kind {
                    AuxiliaryKind::Surplus => -F::one(),
                    AuxiliaryKind::Slack | AuxiliaryKind::Artificial => F::one(),
                };
                if kind == AuxiliaryKind::Artificial {
                    artificial_positions.push((i, column));
                }
            }
            basis_indices.push(next_auxiliary);
            auxiliary_kinds.extend_from_slice(kinds);
            next_auxiliary += kinds.len();

            let (coefficients, rhs, _) = constraint.into_parts();
            for (value, coefficient) in row[offset..(offset + nr_variables)].iter_mut().zip_eq(coefficients) {
                *value = coefficient;
            }
            row[nr_columns - 1] = rhs;

            rows.push(row);
        }
        debug_assert_eq!(next_auxiliary, offset);

        let basis_columns = basis_indices.iter().copied().collect();

        Self {
            rows,
            basis_indices,
            basis_columns,
            artificial_positions,
            auxiliary_kinds,
            counts,
            big_m,
            has_objective_row: false,
        }
    }

    /// Append the objective row and price out the artificial variables.
    ///
    /// Maximization is done by minimizing the negated cost. Each artificial variable gets cost
    /// `big_m`, after which its row is subtracted to bring the relative cost of the basic
    /// artificial column back to zero.
    ///
    /// # Arguments
    ///
    /// * `cost`: One coefficient for each decision variable.
    /// * `direction`: Whether `cost` should be minimized or maximized.
    pub fn add_objective_row(&mut self, cost: &[F], direction: Objective) {
        debug_assert!(!self.has_objective_row);
        debug_assert_eq!(cost.len(), self.counts.nr_variables);

        let offset = self.decision_offset();
        let factor = direction.into_factor::<F>();

        let mut objective = vec![F::zero(); self.counts.nr_columns()];
        for (value, coefficient) in objective[offset..(offset + cost.len())].iter_mut().zip_eq(cost) {
            *value = &factor * coefficient;
        }
        for &(_, column) in &self.artificial_positions {
            objective[column] = self.big_m.clone();
        }
        for &(row, column) in &self.artificial_positions {
            let multiplier = objective[column].clone();
            for (value, constraint_value) in objective.iter_mut().zip_eq(&self.rows[row]) {
                *value -= &multiplier * constraint_value;
            }
        }

        self.rows.push(objective);
        self.has_objective_row = true;
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the positive but minimal ratio between the right-hand side and the
    /// column. Ties are broken by the lowest row index.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut min_values: Option<(usize, F)> = None;
        for (i, row) in self.constraint_rows().iter().enumerate() {
            let xij = &row[column];
            if xij.is_positive() {
                let ratio = self.rhs(i) / xij;
                let is_smaller = match &min_values {
                    Some((_, min_ratio)) => &ratio < min_ratio,
                    None => true,
                };
                if is_smaller {
                    min_values = Some((i, ratio));
                }
            }
        }

        min_values.map(|(row, _)| row)
    }

    /// Brings a column into the basis.
    ///
    /// Scales the pivot row such that the pivot element becomes `1`, and eliminates the column
    /// from all other rows, including the objective row.
    ///
    /// # Arguments
    ///
    /// * `pivot_row`: Row index, in range `0` until `self.nr_rows()`.
    /// * `pivot_column`: Column index, in range `0` until `self.nr_columns()`. Should not be in
    /// the basis yet.
    pub fn bring_into_basis(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(!self.rows[pivot_row][pivot_column].is_zero());

        self.update_basis_indices(pivot_row, pivot_column);

        let pivot_value = self.rows[pivot_row][pivot_column].clone();
        for value in &mut self.rows[pivot_row] {
            *value /= &pivot_value;
        }

        let pivot_values = self.rows[pivot_row].clone();
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i == pivot_row || row[pivot_column].is_zero() {
                continue;
            }

            let factor = row[pivot_column].clone();
            for (value, pivot_row_value) in row.iter_mut().zip_eq(&pivot_values) {
                *value -= &factor * pivot_row_value;
            }
        }
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(&mut self, pivot_row: usize, pivot_column: usize) {
        let leaving_column = self.basis_indices[pivot_row];
        self.basis_columns.remove(&leaving_column);
        self.basis_indices[pivot_row] = pivot_column;
        self.basis_columns.insert(pivot_column);
    }

    /// Value of the right-hand side of the objective row.
    ///
    /// This is the negated value of the objective function that is being minimized, see
    /// `add_objective_row`.
    pub fn objective_function_value(&self) -> F {
        debug_assert!(self.has_objective_row);

        self.objective_row()[self.nr_columns()].clone()
    }

    /// Values of the decision variables in the current basic solution.
    ///
    /// A decision variable that is basic in some row takes the right-hand side of that row, all
    /// others are zero.
    pub fn decision_values(&self) -> Vec<F> {
        let offset = self.decision_offset();
        let mut values = vec![F::zero(); self.counts.nr_variables];
        for (i, &column) in self.basis_indices.iter().enumerate() {
            if column >= offset {
                values[column - offset] = self.rhs(i).clone();
            }
        }

        values
    }

    /// Right-hand side of a constraint row.
    pub fn rhs(&self, row: usize) -> &F {
        debug_assert!(row < self.nr_rows());

        &self.rows[row][self.nr_columns()]
    }

    /// Relative cost of a column.
    pub fn relative_cost(&self, column: usize) -> &F {
        debug_assert!(column < self.nr_columns());

        &self.objective_row()[column]
    }

    /// Relative costs of all columns, excluding the right-hand side.
    pub fn relative_costs(&self) -> &[F] {
        &self.objective_row()[..self.nr_columns()]
    }

    /// The objective row, including the right-hand side.
    pub fn objective_row(&self) -> &[F] {
        debug_assert!(self.has_objective_row);

        &self.rows[self.nr_rows()]
    }
}

impl<F> Tableau<F> {
    /// All constraint rows, each including the right-hand side.
    pub fn constraint_rows(&self) -> &[Vec<F>] {
        &self.rows[..self.nr_rows()]
    }

    /// A single constraint row, or the objective row if `i == self.nr_rows()`.
    pub fn row(&self, i: usize) -> &[F] {
        &self.rows[i]
    }

    /// Column that is basic in each row.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Whether a column is currently basic.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.basis_columns.contains(&column)
    }

    /// Location of the coefficient `1` of each artificial variable, in row order.
    pub fn artificial_positions(&self) -> &[(usize, usize)] {
        &self.artificial_positions
    }

    /// Kind of each auxiliary column, these are the first `self.decision_offset()` columns.
    pub fn auxiliary_kinds(&self) -> &[AuxiliaryKind] {
        &self.auxiliary_kinds
    }

    /// Number of variables of each kind.
    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    /// Whether `add_objective_row` was called.
    pub fn has_objective_row(&self) -> bool {
        self.has_objective_row
    }

    /// Number of constraint rows, excluding the objective row.
    pub fn nr_rows(&self) -> usize {
        self.basis_indices.len()
    }

    /// Number of variable columns, excluding the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.counts.nr_columns() - 1
    }

    /// Index of the column of the first decision variable.
    pub fn decision_offset(&self) -> usize {
        self.counts.nr_auxiliary()
    }
}

/// Check whether the tableau currently has a valid basis.
///
/// Only used for debug purposes. The sign of the right-hand side is not checked: with inexact
/// number types, it may drift slightly below zero.
#[allow(clippy::nonminimal_bool)]
pub fn is_in_basic_feasible_solution_state<F>(tableau: &Tableau<F>) -> bool
where
    F: Field,
    for<'r> &'r F: FieldRef<F>,
{
    // Checking basis_columns
    // Correct number of basis columns (uniqueness is implied because it's a set)
    let nr_basis_columns = tableau.basis_columns.len() == tableau.nr_rows();

    // Checking basis_indices
    let as_set = tableau.basis_indices.iter().copied().collect::<HashSet<_>>();
    // Uniqueness of the basis columns
    let uniqueness = as_set.len() == tableau.nr_rows();
    // Same columns as in `basis_columns`
    let same = as_set == tableau.basis_columns;

    // Basis columns are unit vectors
    let unit = tableau.basis_indices.iter().enumerate().all(|(i, &column)| {
        tableau.constraint_rows().iter().enumerate().all(|(k, row)| {
            if k == i { row[column] == F::one() } else { row[column].is_zero() }
        })
    });
    // Basis columns have zero relative cost
    let priced_out = !tableau.has_objective_row
        || tableau.basis_indices.iter().all(|&column| tableau.relative_cost(column).is_zero());

    true
        && nr_basis_columns
        && uniqueness
        && same
        && unit
        && priced_out
}

impl<F: Field> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        let column_width = 10;
        let counter_width = 8;
        let total_width = counter_width + (1 + self.nr_columns()) * column_width + 1;

        // Column labels
        write!(f, "{0:width$}", "", width = counter_width)?;
        write!(f, "{0:^width$}", "b", width = column_width)?;
        write!(f, "|")?;
        let offset = self.decision_offset();
        for column in 0..self.nr_columns() {
            let label = match self.auxiliary_kinds.get(column) {
                Some(AuxiliaryKind::Slack) => format!("s{}", column),
                Some(AuxiliaryKind::Surplus) => format!("e{}", column),
                Some(AuxiliaryKind::Artificial) => format!("a{}", column),
                None => format!("x{}", column - offset + 1),
            };
            write!(f, "{0:^width$}", label, width = column_width)?;
        }
        writeln!(f)?;

        // Separator
        writeln!(f, "{}", repeat_n("-", total_width).collect::<String>())?;

        // Row counter and row data
        for (i, row) in self.constraint_rows().iter().enumerate() {
            self.write_row(f, &i.to_string(), row, counter_width, column_width)?;
        }
        if self.has_objective_row {
            writeln!(f, "{}", repeat_n("-", total_width).collect::<String>())?;
            self.write_row(f, "cost", &self.rows[self.nr_rows()], counter_width, column_width)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        writeln!(f, "[{}]", self.basis_indices.iter()
            .enumerate()
            .map(|(i, j)| format!("({}, {})", i, j))
            .join(", "))
    }
}

impl<F: Field> Tableau<F> {
    fn write_row(
        &self,
        f: &mut Formatter,
        name: &str,
        row: &[F],
        counter_width: usize,
        column_width: usize,
    ) -> FormatResult {
        let nr_columns = self.nr_columns();
        write!(f, "{0:>width$}", format!("{}  |", name), width = counter_width)?;
        write!(f, "{0:^width$}", row[nr_columns].to_string(), width = column_width)?;
        write!(f, "|")?;
        for value in &row[..nr_columns] {
            write!(f, "{0:^width$}", value.to_string(), width = column_width)?;
        }
        writeln!(f)
    }
}
