//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
use bigm_lp::data::number_types::traits::Field;

mod baseline;
mod property;

/// Convert a small integer into any field, using only its identities.
pub fn number<F: Field>(value: i32) -> F {
    let magnitude = (0..value.unsigned_abs()).map(|_| F::one()).sum::<F>();
    if value < 0 { -magnitude } else { magnitude }
}

/// Convert a row of small integers.
pub fn numbers<F: Field>(values: &[i32]) -> Vec<F> {
    values.iter().map(|&value| number(value)).collect()
}
