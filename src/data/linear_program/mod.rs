//! # Representing linear programs
//!
//! A linear program is stored as a list of constraints over nonnegative decision variables. The
//! objective function is not stored; it is supplied each time the program is optimized.
pub mod constraint_system;
pub mod elements;
pub mod error;
pub mod solution;
