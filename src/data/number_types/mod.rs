//! # Number types
//!
//! The tableau is defined over any type that behaves like a field. This module defines that space;
//! the implementations come from elsewhere.
//!
//! A benefit of this approach is that the algorithm can be tested well for correctness using
//! fractional numbers, while the same code is used without adaptation with floating point numbers.
//! The rational types of `relp_num` are re-exported for convenience.
pub mod traits;

pub use relp_num::{Rational64, RationalBig};
