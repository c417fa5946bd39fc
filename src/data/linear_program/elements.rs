//! # Building blocks to describe linear programs.
use std::ops::Not;
use std::str::FromStr;

use enum_map::Enum;

use crate::data::linear_program::error::SystemError;
use crate::data::number_types::traits::Field;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// Symbol used when rendering a constraint.
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        }
    }
}

/// Multiplying both sides of a constraint with `-1`.
///
/// An equality stays an equality, the inequalities swap direction.
impl Not for ConstraintType {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            ConstraintType::Equal => ConstraintType::Equal,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Less => ConstraintType::Greater,
        }
    }
}

/// Relation tags as they are commonly written.
///
/// Symbols are matched exactly, the abbreviations `EQ`, `GE` and `LE` case insensitively.
impl FromStr for ConstraintType {
    type Err = SystemError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim() {
            "=" | "==" => Ok(ConstraintType::Equal),
            ">=" => Ok(ConstraintType::Greater),
            "<=" => Ok(ConstraintType::Less),
            other if other.eq_ignore_ascii_case("eq") => Ok(ConstraintType::Equal),
            other if other.eq_ignore_ascii_case("ge") => Ok(ConstraintType::Greater),
            other if other.eq_ignore_ascii_case("le") => Ok(ConstraintType::Less),
            other => Err(SystemError::InvalidRelation(other.to_string())),
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Factor with which the cost of the caller is multiplied to get a minimization problem.
    pub fn into_factor<F: Field>(self) -> F {
        match self {
            Objective::Maximize => -F::one(),
            Objective::Minimize => F::one(),
        }
    }
}

impl FromStr for Objective {
    type Err = SystemError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("min") || tag.eq_ignore_ascii_case("minimize") {
            Ok(Objective::Minimize)
        } else if tag.eq_ignore_ascii_case("max") || tag.eq_ignore_ascii_case("maximize") {
            Ok(Objective::Maximize)
        } else {
            Err(SystemError::InvalidDirection(tag.to_string()))
        }
    }
}

/// Variables that are added to the decision variables to bring a constraint into canonical form.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AuxiliaryKind {
    /// Added with coefficient `1` to a `<=` row; starts in the basis.
    Slack,
    /// Added with coefficient `-1` to a `>=` row.
    Surplus,
    /// Added with coefficient `1` to `>=` and `=` rows; starts in the basis and is penalized.
    Artificial,
}

impl AuxiliaryKind {
    /// Auxiliary columns that a constraint contributes, in column order.
    ///
    /// # Arguments
    ///
    /// * `constraint_type`: Relation of the constraint, after any sign flip.
    ///
    /// # Return value
    ///
    /// The kinds of the columns, of which the first one is the initial basis column of the row.
    pub fn required_by(constraint_type: ConstraintType) -> &'static [AuxiliaryKind] {
        match constraint_type {
            ConstraintType::Less => &[AuxiliaryKind::Slack],
            ConstraintType::Greater => &[AuxiliaryKind::Artificial, AuxiliaryKind::Surplus],
            ConstraintType::Equal => &[AuxiliaryKind::Artificial],
        }
    }
}
