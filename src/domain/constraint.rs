//! Linear constraint types for integer programming.
//!
//! These types describe a model independently of any solver backend:
//! variables are plain indices into the model's variable list and
//! expressions are sparse sums of `coefficient * variable` plus a constant.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Index of a decision variable within one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(usize);

impl VarId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Domain of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarKind {
    Continuous,
    Integer,
    Binary,
}

impl VarKind {
    /// True for variables the solver must keep integral.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(self, Self::Integer | Self::Binary)
    }
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<Decimal>,
    /// Upper bound (None = +infinity).
    pub upper: Option<Decimal>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Binary variable bounds [0, 1].
    #[must_use]
    pub const fn binary() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: Some(Decimal::ONE),
        }
    }

    /// Non-negative variable [0, +inf).
    #[must_use]
    pub fn non_negative() -> Self {
        Self::default()
    }

    /// Bounded variable [lower, upper].
    #[must_use]
    pub const fn bounded(lower: Decimal, upper: Decimal) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Variable pinned to a single value.
    #[must_use]
    pub const fn fixed(value: Decimal) -> Self {
        Self::bounded(value, value)
    }

    /// True if `value` lies within the bounds, allowing `tolerance` slack.
    #[must_use]
    pub fn contains(&self, value: Decimal, tolerance: Decimal) -> bool {
        self.lower.map_or(true, |lb| value >= lb - tolerance)
            && self.upper.map_or(true, |ub| value <= ub + tolerance)
    }
}

/// A named decision variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDef {
    pub name: String,
    pub kind: VarKind,
    pub bounds: VariableBounds,
}

/// Sparse affine expression: `sum(coeff * var) + constant`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinearExpr {
    terms: Vec<(VarId, Decimal)>,
    constant: Decimal,
}

impl LinearExpr {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A single `coeff * var` term.
    #[must_use]
    pub fn term(var: VarId, coeff: Decimal) -> Self {
        Self {
            terms: vec![(var, coeff)],
            constant: Decimal::ZERO,
        }
    }

    /// A constant with no variables.
    #[must_use]
    pub fn constant(value: Decimal) -> Self {
        Self {
            terms: Vec::new(),
            constant: value,
        }
    }

    /// Sum of variables with unit coefficients.
    pub fn sum<I: IntoIterator<Item = VarId>>(vars: I) -> Self {
        Self {
            terms: vars.into_iter().map(|v| (v, Decimal::ONE)).collect(),
            constant: Decimal::ZERO,
        }
    }

    /// Add `coeff * var` in place.
    pub fn add_term(&mut self, var: VarId, coeff: Decimal) {
        self.terms.push((var, coeff));
    }

    #[must_use]
    pub fn terms(&self) -> &[(VarId, Decimal)] {
        &self.terms
    }

    #[must_use]
    pub const fn constant_part(&self) -> Decimal {
        self.constant
    }

    /// Merge repeated variables and drop zero coefficients.
    #[must_use]
    pub fn simplified(mut self) -> Self {
        self.terms.sort_by_key(|(var, _)| *var);
        let mut merged: Vec<(VarId, Decimal)> = Vec::with_capacity(self.terms.len());
        for (var, coeff) in self.terms {
            match merged.last_mut() {
                Some((last, total)) if *last == var => *total += coeff,
                _ => merged.push((var, coeff)),
            }
        }
        merged.retain(|(_, coeff)| !coeff.is_zero());
        Self {
            terms: merged,
            constant: self.constant,
        }
    }

    /// Evaluate against a full assignment indexed by [`VarId`].
    ///
    /// # Panics
    ///
    /// Panics if the assignment is shorter than the largest variable index.
    #[must_use]
    pub fn evaluate(&self, values: &[Decimal]) -> Decimal {
        self.terms
            .iter()
            .fold(self.constant, |acc, (var, coeff)| acc + *coeff * values[var.index()])
    }
}

impl From<VarId> for LinearExpr {
    fn from(var: VarId) -> Self {
        Self::term(var, Decimal::ONE)
    }
}

impl From<Decimal> for LinearExpr {
    fn from(value: Decimal) -> Self {
        Self::constant(value)
    }
}

impl AddAssign for LinearExpr {
    fn add_assign(&mut self, rhs: Self) {
        self.terms.extend(rhs.terms);
        self.constant += rhs.constant;
    }
}

impl<T: Into<LinearExpr>> Add<T> for LinearExpr {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self {
        let rhs: LinearExpr = rhs.into();
        self += rhs;
        self
    }
}

impl<T: Into<LinearExpr>> Sub<T> for LinearExpr {
    type Output = Self;

    fn sub(mut self, rhs: T) -> Self {
        let rhs: LinearExpr = rhs.into();
        self += -rhs;
        self
    }
}

impl Neg for LinearExpr {
    type Output = Self;

    fn neg(self) -> Self {
        self * -Decimal::ONE
    }
}

impl Mul<Decimal> for LinearExpr {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        Self {
            terms: self.terms.into_iter().map(|(v, c)| (v, c * rhs)).collect(),
            constant: self.constant * rhs,
        }
    }
}

impl Mul<LinearExpr> for Decimal {
    type Output = LinearExpr;

    fn mul(self, rhs: LinearExpr) -> LinearExpr {
        rhs * self
    }
}

impl Mul<VarId> for Decimal {
    type Output = LinearExpr;

    fn mul(self, rhs: VarId) -> LinearExpr {
        LinearExpr::term(rhs, self)
    }
}

impl FromIterator<LinearExpr> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = LinearExpr>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |acc, expr| acc + expr)
    }
}

/// A single linear constraint: `sum(coeff * var) {>=, <=, =} rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Variable terms; the constant part is always folded into `rhs`.
    pub lhs: LinearExpr,
    /// Constraint sense (>=, <=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: Decimal,
}

impl Constraint {
    /// Create `lhs >= rhs`.
    pub fn geq(lhs: impl Into<LinearExpr>, rhs: impl Into<LinearExpr>) -> Self {
        Self::normalized(lhs.into(), ConstraintSense::GreaterEqual, rhs.into())
    }

    /// Create `lhs <= rhs`.
    pub fn leq(lhs: impl Into<LinearExpr>, rhs: impl Into<LinearExpr>) -> Self {
        Self::normalized(lhs.into(), ConstraintSense::LessEqual, rhs.into())
    }

    /// Create `lhs == rhs`.
    pub fn eq(lhs: impl Into<LinearExpr>, rhs: impl Into<LinearExpr>) -> Self {
        Self::normalized(lhs.into(), ConstraintSense::Equal, rhs.into())
    }

    fn normalized(lhs: LinearExpr, sense: ConstraintSense, rhs: LinearExpr) -> Self {
        let difference = (lhs - rhs).simplified();
        let rhs = -difference.constant;
        Self {
            lhs: LinearExpr {
                terms: difference.terms,
                constant: Decimal::ZERO,
            },
            sense,
            rhs,
        }
    }

    /// True if the assignment satisfies the constraint within `tolerance`.
    #[must_use]
    pub fn is_satisfied(&self, values: &[Decimal], tolerance: Decimal) -> bool {
        let lhs = self.lhs.evaluate(values);
        match self.sense {
            ConstraintSense::GreaterEqual => lhs >= self.rhs - tolerance,
            ConstraintSense::LessEqual => lhs <= self.rhs + tolerance,
            ConstraintSense::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
    /// Equal (=).
    Equal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn constraint_moves_constants_to_rhs() {
        let x = VarId::new(0);
        let y = VarId::new(1);
        // x + 3 >= 2y - 1  =>  x - 2y >= -4
        let c = Constraint::geq(LinearExpr::from(x) + dec!(3), dec!(2) * y - dec!(1));

        assert_eq!(c.sense, ConstraintSense::GreaterEqual);
        assert_eq!(c.rhs, dec!(-4));
        assert_eq!(c.lhs.terms(), &[(x, dec!(1)), (y, dec!(-2))]);
        assert_eq!(c.lhs.constant_part(), Decimal::ZERO);
    }

    #[test]
    fn simplified_merges_duplicate_terms() {
        let x = VarId::new(3);
        let expr = (LinearExpr::from(x) + LinearExpr::from(x) - dec!(2) * x).simplified();
        assert!(expr.terms().is_empty());
    }

    #[test]
    fn evaluate_uses_assignment() {
        let expr = dec!(2) * VarId::new(0) + LinearExpr::from(VarId::new(1)) + dec!(0.5);
        assert_eq!(expr.evaluate(&[dec!(3), dec!(4)]), dec!(10.5));
    }

    #[test]
    fn is_satisfied_honors_tolerance() {
        let c = Constraint::leq(VarId::new(0), dec!(1));
        assert!(c.is_satisfied(&[dec!(1.0000001)], dec!(0.000001)));
        assert!(!c.is_satisfied(&[dec!(1.1)], dec!(0.000001)));

        let eq = Constraint::eq(VarId::new(0), dec!(2));
        assert!(eq.is_satisfied(&[dec!(2)], Decimal::ZERO));
        assert!(!eq.is_satisfied(&[dec!(3)], Decimal::ZERO));
    }

    #[test]
    fn sum_collects_expressions() {
        let total: LinearExpr = (0..3).map(|i| LinearExpr::from(VarId::new(i))).collect();
        assert_eq!(total.evaluate(&[dec!(1), dec!(2), dec!(3)]), dec!(6));
    }

    #[test]
    fn bounds_contain_with_tolerance() {
        let bounds = VariableBounds::binary();
        assert!(bounds.contains(dec!(1.0000001), dec!(0.000001)));
        assert!(!bounds.contains(dec!(-0.5), dec!(0.000001)));
        assert!(VariableBounds::fixed(dec!(0)).contains(Decimal::ZERO, Decimal::ZERO));
    }
}
