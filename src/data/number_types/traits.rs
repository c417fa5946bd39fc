//! # Traits
//!
//! The tableau is defined over a field. The hierarchy is "mathematically exact", but the
//! implementations aren't: floating point numbers only approximate the contracts that these traits
//! describe. This is due to finite representation of these numbers and is a fundamental problem
//! that cannot be avoided, only be dealt with differently (e.g. by using rationals).
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

/// Basic field operations with Self and with references to Self.
///
/// Automatically implemented for all types satisfying the trait's bounds; this includes the
/// primitive floats and the rational types of `relp_num`.
pub trait Field:
    PartialEq + // Equivalence relation
    PartialOrd + // The simplex method needs to compare
    Zero + // Additive identity
    Neg<Output=Self> + // Additive inverse
    One + // Multiplicative identity
    // First operation
    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    AddAssign<Self> +
    for<'r> AddAssign<&'r Self> +
    Sum +
    // First operation inverse
    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    SubAssign<Self> +
    for<'r> SubAssign<&'r Self> +
    // Second operation
    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    MulAssign<Self> +
    for<'r> MulAssign<&'r Self> +
    // Second operation inverse
    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +
    DivAssign<Self> +
    for<'r> DivAssign<&'r Self> +
    // Practicalities
    Clone +
    Display +
    Debug +
{
    /// Whether this value is strictly smaller than the additive identity.
    fn is_negative(&self) -> bool {
        self < &Self::zero()
    }

    /// Whether this value is strictly larger than the additive identity.
    fn is_positive(&self) -> bool {
        self > &Self::zero()
    }
}

impl<T> Field for T
where
    T: PartialEq + PartialOrd + Zero + Neg<Output=T> + One +
        Add<T, Output=T> + for<'r> Add<&'r T, Output=T> + AddAssign<T> + for<'r> AddAssign<&'r T> + Sum +
        Sub<T, Output=T> + for<'r> Sub<&'r T, Output=T> + SubAssign<T> + for<'r> SubAssign<&'r T> +
        Mul<T, Output=T> + for<'r> Mul<&'r T, Output=T> + MulAssign<T> + for<'r> MulAssign<&'r T> +
        Div<T, Output=T> + for<'r> Div<&'r T, Output=T> + DivAssign<T> + for<'r> DivAssign<&'r T> +
        Clone + Display + Debug,
{
}

/// A reference to a variable that is in a `Field`.
///
/// Used as `for<'r> &'r F: FieldRef<F>` to compute with borrowed tableau entries without cloning
/// them first.
pub trait FieldRef<Deref>:
    Neg<Output=Deref> + // Additive inverse
    Add<Output=Deref> +
    Sub<Output=Deref> +
    Mul<Output=Deref> +
    Div<Output=Deref> +
    // Practicalities
    Copy +
    Clone +
    Display +
    Debug +
    // Necessary for the operator traits. References are sized anyways.
    Sized +
{
}

impl<T, Deref> FieldRef<Deref> for T
where
    T: Neg<Output=Deref> + Add<Output=Deref> + Sub<Output=Deref> + Mul<Output=Deref> +
        Div<Output=Deref> + Copy + Clone + Display + Debug + Sized,
{
}

/// The default penalty for artificial variables in the Big-M method: `10^9`.
///
/// Computed from the multiplicative identity only, such that it is exact for rational types.
pub fn big_m<F: Field>() -> F {
    let ten = (0..10).map(|_| F::one()).sum::<F>();
    (0..9).fold(F::one(), |power, _| power * &ten)
}
