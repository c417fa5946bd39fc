//! # Errors of a constraint system
//!
//! All of these are deterministic consequences of the data that was supplied. None of them are
//! transient; retrying with the same data gives the same error.
use thiserror::Error;

/// A `SystemError` is returned when a constraint system can not be built or optimized.
///
/// Note that an unbounded objective is not an error, see `OptimizationResult::Unbounded`.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SystemError {
    /// The number of coefficients of a constraint or objective function doesn't match the number
    /// of decision variables of the system.
    #[error("expected {expected} coefficients, found {found}")]
    ArityMismatch {
        /// Number of decision variables of the system.
        expected: usize,
        /// Number of coefficients that was supplied.
        found: usize,
    },
    /// Solving was requested before the number of decision variables was known.
    ///
    /// The number is fixed by the first constraint, or explicitly with
    /// `ConstraintSystem::with_variables`.
    #[error("the number of variables is not known before the first constraint is added")]
    ArityNotFixed,
    /// A relation tag could not be read as `=`, `<=` or `>=`.
    #[error("invalid relation: \"{0}\"")]
    InvalidRelation(String),
    /// A direction tag could not be read as minimization or maximization.
    #[error("invalid optimization direction: \"{0}\"")]
    InvalidDirection(String),
    /// No point satisfies all constraints.
    ///
    /// Terminal for the current constraint set: the constraints need to change before solving
    /// can succeed.
    #[error("the linear constraint system is infeasible")]
    Infeasible,
}
