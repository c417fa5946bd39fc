//! # Constraint systems
//!
//! A list of linear constraints over nonnegative decision variables. The system is built up one
//! constraint at a time, after which it can be checked for feasibility and optimized for any
//! number of objective functions.
//!
//! Solving never changes the stored constraints: every call builds a fresh tableau from its own
//! copy of the constraint list. The only state shared between calls is whether feasibility was
//! already verified for the current list of constraints.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::sync::atomic::{AtomicBool, Ordering};

use enum_map::EnumMap;
use log::debug;

use crate::algorithm::OptimizationResult;
use crate::algorithm::simplex::{primal, Termination};
use crate::algorithm::simplex::feasibility::check_feasibility;
use crate::algorithm::simplex::observer::{NoOp, Observer};
use crate::algorithm::simplex::strategy::pivot_rule::{MostNegative, PivotRule};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::elements::{AuxiliaryKind, ConstraintType, Objective};
use crate::data::linear_program::error::SystemError;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::{big_m, Field, FieldRef};

/// A single linear (in)equality `a x ~ b`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint<F> {
    /// One coefficient per decision variable.
    coefficients: Vec<F>,
    /// Right-hand side.
    rhs: F,
    constraint_type: ConstraintType,
}

impl<F: Field> Constraint<F> {
    /// Create a new constraint.
    pub fn new(coefficients: Vec<F>, rhs: F, constraint_type: ConstraintType) -> Self {
        Self { coefficients, rhs, constraint_type }
    }

    /// Coefficients of the decision variables.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Right-hand side.
    pub fn rhs(&self) -> &F {
        &self.rhs
    }

    /// Relation as it was supplied.
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    /// Relation of the constraint once the right-hand side is made nonnegative.
    ///
    /// This decides which auxiliary variables the constraint needs in the tableau.
    pub fn canonical_type(&self) -> ConstraintType {
        if self.rhs.is_negative() {
            !self.constraint_type
        } else {
            self.constraint_type
        }
    }

    /// Multiply both sides with `-1` if the right-hand side is negative.
    ///
    /// # Return value
    ///
    /// An equivalent constraint with a nonnegative right-hand side.
    pub fn normalized(self) -> Self {
        if self.rhs.is_negative() {
            Self {
                coefficients: self.coefficients.into_iter().map(|value| -value).collect(),
                rhs: -self.rhs,
                constraint_type: !self.constraint_type,
            }
        } else {
            self
        }
    }

    /// Append a zero coefficient for one extra variable.
    pub fn widened(mut self) -> Self {
        self.coefficients.push(F::zero());
        self
    }

    /// Split into coefficients, right-hand side and relation.
    pub fn into_parts(self) -> (Vec<F>, F, ConstraintType) {
        (self.coefficients, self.rhs, self.constraint_type)
    }
}

impl<F: Field> Display for Constraint<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        for (j, coefficient) in self.coefficients.iter().enumerate() {
            match (j, coefficient.is_negative()) {
                (0, _) => write!(f, "{} x{}", coefficient, j + 1)?,
                (_, true) => write!(f, " - {} x{}", -coefficient.clone(), j + 1)?,
                (_, false) => write!(f, " + {} x{}", coefficient, j + 1)?,
            }
        }
        write!(f, " {} {}", self.constraint_type.symbol(), self.rhs)
    }
}

/// Number of variables of each kind in the tableau of a list of constraints.
///
/// Derived once from the constraint list; classification happens after the sign flip of
/// constraints with a negative right-hand side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Counts {
    /// Number of decision variables.
    pub nr_variables: usize,
    /// Number of constraints, equal to the number of rows excluding the objective row.
    pub nr_constraints: usize,
    /// Number of slack, surplus and artificial variables.
    pub auxiliary: EnumMap<AuxiliaryKind, usize>,
}

impl Counts {
    /// Classify each constraint.
    ///
    /// # Arguments
    ///
    /// * `nr_variables`: Number of decision variables.
    /// * `constraints`: All constraints, not necessarily normalized.
    pub fn derive<F: Field>(nr_variables: usize, constraints: &[Constraint<F>]) -> Self {
        let mut auxiliary = EnumMap::default();
        for constraint in constraints {
            for &kind in AuxiliaryKind::required_by(constraint.canonical_type()) {
                auxiliary[kind] += 1;
            }
        }

        Self {
            nr_variables,
            nr_constraints: constraints.len(),
            auxiliary,
        }
    }

    /// Total number of slack, surplus and artificial variables.
    pub fn nr_auxiliary(&self) -> usize {
        self.auxiliary.values().sum()
    }

    /// Number of columns in the tableau, including the right-hand side column.
    pub fn nr_columns(&self) -> usize {
        self.nr_auxiliary() + self.nr_variables + 1
    }
}

/// A list of constraints that all have the same number of decision variables.
///
/// The number of variables is fixed by the first constraint that is added, or up front with
/// `with_variables`. Constraints with a different number of coefficients are rejected when they
/// are added.
#[derive(Debug)]
pub struct ConstraintSystem<F> {
    constraints: Vec<Constraint<F>>,
    /// `None` until the arity is fixed.
    nr_variables: Option<usize>,
    /// Penalty of the artificial variables in the objective function.
    big_m: F,
    /// Set once the feasibility of the current constraints has been shown.
    feasibility_verified: AtomicBool,
}

impl<F: Field> ConstraintSystem<F>
where
    for<'r> &'r F: FieldRef<F>,
{
    /// Create an empty system of which the number of variables is not yet known.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            nr_variables: None,
            big_m: big_m(),
            feasibility_verified: AtomicBool::new(false),
        }
    }

    /// Create an empty system with a fixed number of decision variables.
    pub fn with_variables(nr_variables: usize) -> Self {
        Self {
            nr_variables: Some(nr_variables),
            ..Self::new()
        }
    }

    /// Use a different penalty for the artificial variables.
    ///
    /// It should dominate all other coefficients that appear during solving. The default is
    /// `10^9`.
    #[must_use]
    pub fn with_big_m(mut self, big_m: F) -> Self {
        debug_assert!(big_m.is_positive());

        self.big_m = big_m;
        *self.feasibility_verified.get_mut() = false;
        self
    }

    /// Add the constraint `coefficients * x ~ rhs`.
    ///
    /// # Arguments
    ///
    /// * `coefficients`: One value per decision variable.
    /// * `rhs`: Right-hand side, may be negative.
    /// * `constraint_type`: Relation between the two sides.
    ///
    /// # Return value
    ///
    /// The system itself for chaining, or an `ArityMismatch` if the number of coefficients is
    /// wrong. In that case, the system is not changed.
    pub fn add_constraint(
        &mut self,
        coefficients: Vec<F>,
        rhs: F,
        constraint_type: ConstraintType,
    ) -> Result<&mut Self, SystemError> {
        let expected = *self.nr_variables.get_or_insert(coefficients.len());
        if coefficients.len() != expected {
            return Err(SystemError::ArityMismatch { expected, found: coefficients.len() });
        }

        self.constraints.push(Constraint::new(coefficients, rhs, constraint_type));
        *self.feasibility_verified.get_mut() = false;
        Ok(self)
    }

    /// All constraints, in insertion order.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Number of decision variables, if already known.
    pub fn nr_variables(&self) -> Option<usize> {
        self.nr_variables
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Penalty of the artificial variables.
    pub fn big_m(&self) -> &F {
        &self.big_m
    }

    /// Whether `is_feasible` succeeded since the last constraint was added.
    pub fn is_feasibility_verified(&self) -> bool {
        self.feasibility_verified.load(Ordering::Acquire)
    }

    /// Number of variables of each kind the tableau of this system has.
    pub fn counts(&self) -> Result<Counts, SystemError> {
        let nr_variables = self.nr_variables.ok_or(SystemError::ArityNotFixed)?;
        Ok(Counts::derive(nr_variables, &self.constraints))
    }

    /// Check whether any point satisfies all constraints.
    ///
    /// # Return value
    ///
    /// Always `true` when `Ok`; an infeasible system gives `SystemError::Infeasible`.
    pub fn is_feasible(&self) -> Result<bool, SystemError> {
        self.verify_feasibility::<MostNegative, _>(&mut NoOp)
    }

    /// Optimize a linear objective function over the constraints.
    ///
    /// Checks feasibility first, unless that was already done for the current constraints.
    ///
    /// # Arguments
    ///
    /// * `cost`: One coefficient per decision variable.
    /// * `direction`: Whether to minimize or maximize.
    ///
    /// # Return value
    ///
    /// A finite optimum with the values of the decision variables and the objective function, or
    /// `Unbounded`.
    pub fn optimize(
        &self,
        cost: &[F],
        direction: Objective,
    ) -> Result<OptimizationResult<F>, SystemError> {
        self.optimize_with::<MostNegative, _>(cost, direction, &mut NoOp)
    }

    /// Like `optimize`, with an explicit pivot rule and an observer of the intermediate
    /// tableaus.
    ///
    /// The observer sees the tableaus of the feasibility check as well, if it runs.
    pub fn optimize_with<PR, O>(
        &self,
        cost: &[F],
        direction: Objective,
        observer: &mut O,
    ) -> Result<OptimizationResult<F>, SystemError>
    where
        PR: PivotRule,
        O: Observer<F>,
    {
        let nr_variables = self.nr_variables.ok_or(SystemError::ArityNotFixed)?;
        if !self.is_feasibility_verified() {
            self.verify_feasibility::<PR, _>(observer)?;
        }
        if cost.len() != nr_variables {
            return Err(SystemError::ArityMismatch { expected: nr_variables, found: cost.len() });
        }

        debug!(
            "Optimizing ({:?}) over {} constraints and {} variables",
            direction, self.constraints.len(), nr_variables,
        );
        let mut tableau = Tableau::new(self.constraints.clone(), nr_variables, self.big_m.clone());
        observer.initial_tableau(&tableau);
        tableau.add_objective_row(cost, direction);
        observer.objective_row_added(&tableau);

        let result = match primal::<_, PR, _>(&mut tableau, observer) {
            Termination::Optimal => {
                // The engine minimizes, undo the sign change of maximization
                let objective_value = -direction.into_factor::<F>() * tableau.objective_function_value();
                OptimizationResult::FiniteOptimum(Solution::new(tableau.decision_values(), objective_value))
            },
            Termination::Unbounded => OptimizationResult::Unbounded,
        };
        debug!("Optimization result: {}", result);

        Ok(result)
    }

    fn verify_feasibility<PR: PivotRule, O: Observer<F>>(
        &self,
        observer: &mut O,
    ) -> Result<bool, SystemError> {
        let nr_variables = self.nr_variables.ok_or(SystemError::ArityNotFixed)?;

        check_feasibility::<_, PR, _>(
            self.constraints.clone(),
            nr_variables,
            self.big_m.clone(),
            observer,
        )?;

        self.feasibility_verified.store(true, Ordering::Release);
        Ok(true)
    }
}

impl<F: Field> Default for ConstraintSystem<F>
where
    for<'r> &'r F: FieldRef<F>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> Clone for ConstraintSystem<F> {
    fn clone(&self) -> Self {
        Self {
            constraints: self.constraints.clone(),
            nr_variables: self.nr_variables,
            big_m: self.big_m.clone(),
            feasibility_verified: AtomicBool::new(self.feasibility_verified.load(Ordering::Acquire)),
        }
    }
}

impl<F: Field> Display for ConstraintSystem<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        for constraint in &self.constraints {
            writeln!(f, "{}", constraint)?;
        }
        Ok(())
    }
}
