//! # Representation of optimal solutions
//!
//! Once a linear program is solved to optimality, the values of the decision variables are read
//! from the final basis. Non-basic decision variables have value zero.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::number_types::traits::Field;

/// Optimal values of the decision variables, together with the value of the objective function.
///
/// The objective value is expressed in the direction that the caller asked for: when maximizing,
/// it is the maximum of the objective function, not its negation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Solution<F> {
    /// Value of each decision variable, in the order of the constraint coefficients.
    values: Vec<F>,
    /// Value of the objective function at `values`.
    objective_value: F,
}

impl<F: Field> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(values: Vec<F>, objective_value: F) -> Self {
        Self { values, objective_value }
    }

    /// Values of the decision variables.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Number of decision variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no decision variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The solution as a flat sequence `[x_1, ..., x_n, z]`.
    ///
    /// The objective value is appended after the variable values.
    pub fn to_vec(&self) -> Vec<F> {
        self.clone().into_vec()
    }

    /// Like `to_vec`, but consuming.
    pub fn into_vec(self) -> Vec<F> {
        let mut sequence = self.values;
        sequence.push(self.objective_value);
        sequence
    }
}

impl<F: Field> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        for (j, value) in self.values.iter().enumerate() {
            writeln!(f, "x{} = {}", j + 1, value)?;
        }
        write!(f, "z = {}", self.objective_value)
    }
}
