//! # Algorithms
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Field;

pub mod simplex;

/// A feasible linear program either has a finite optimum or is unbounded.
///
/// Infeasibility is reported as an error instead, see `SystemError::Infeasible`.
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum OptimizationResult<F> {
    FiniteOptimum(Solution<F>),
    Unbounded,
}

impl<F> OptimizationResult<F> {
    /// Whether the optimum is finite.
    pub fn is_bounded(&self) -> bool {
        matches!(self, OptimizationResult::FiniteOptimum(_))
    }

    /// The optimal solution, if there is one.
    pub fn solution(&self) -> Option<&Solution<F>> {
        match self {
            OptimizationResult::FiniteOptimum(solution) => Some(solution),
            OptimizationResult::Unbounded => None,
        }
    }

    /// Like `solution`, but consuming.
    pub fn into_solution(self) -> Option<Solution<F>> {
        match self {
            OptimizationResult::FiniteOptimum(solution) => Some(solution),
            OptimizationResult::Unbounded => None,
        }
    }
}

impl<F: Field> Display for OptimizationResult<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            OptimizationResult::FiniteOptimum(solution) => write!(f, "{}", solution),
            OptimizationResult::Unbounded => write!(f, "unbounded"),
        }
    }
}
