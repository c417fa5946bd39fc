//! # A small linear program solver
//!
//! Systems of linear constraints over nonnegative variables are checked for feasibility, and
//! optimized for linear objective functions, using a dense tableau version of the Simplex Method.
//! Artificial variables are handled with the Big-M method, see `algorithm::simplex`.
//!
//! Computations are generic over the number type: floating point numbers are fast, the rational
//! numbers of `relp_num` are exact.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

pub use crate::algorithm::OptimizationResult;
pub use crate::data::linear_program::constraint_system::ConstraintSystem;
pub use crate::data::linear_program::elements::{ConstraintType, Objective};
pub use crate::data::linear_program::error::SystemError;
pub use crate::data::linear_program::solution::Solution;

#[cfg(test)]
mod tests;
