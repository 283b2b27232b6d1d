use super::Assignment;
use super::BoolVar;

/// A weighted occurrence of a boolean variable in a linear expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Term {
    pub coefficient: i32,
    pub variable: BoolVar,
}

impl Term {
    pub fn new(coefficient: i32, variable: BoolVar) -> Term {
        Term {
            coefficient,
            variable,
        }
    }

    /// The term `1 * variable`.
    pub fn unit(variable: BoolVar) -> Term {
        Term::new(1, variable)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparator {
    LessThanOrEqual,
    GreaterThanOrEqual,
}

/// The constraint `\sum coefficient_i * variable_i <comparator> rhs`, where every variable takes
/// the value 0 or 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearConstraint {
    terms: Box<[Term]>,
    comparator: Comparator,
    rhs: i32,
}

impl LinearConstraint {
    /// Creates the constraint `\sum terms <= rhs`.
    pub fn less_than_or_equals(terms: impl Into<Box<[Term]>>, rhs: i32) -> LinearConstraint {
        LinearConstraint {
            terms: terms.into(),
            comparator: Comparator::LessThanOrEqual,
            rhs,
        }
    }

    /// Creates the constraint `\sum terms >= rhs`.
    pub fn greater_than_or_equals(terms: impl Into<Box<[Term]>>, rhs: i32) -> LinearConstraint {
        LinearConstraint {
            terms: terms.into(),
            comparator: Comparator::GreaterThanOrEqual,
            rhs,
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub fn rhs(&self) -> i32 {
        self.rhs
    }

    /// Returns the equivalent `<=` form of this constraint; a `>=` constraint is negated on both
    /// sides.
    pub fn as_less_than_or_equals(&self) -> (Vec<Term>, i32) {
        match self.comparator {
            Comparator::LessThanOrEqual => (self.terms.to_vec(), self.rhs),
            Comparator::GreaterThanOrEqual => (
                self.terms
                    .iter()
                    .map(|term| Term::new(-term.coefficient, term.variable))
                    .collect(),
                -self.rhs,
            ),
        }
    }

    /// The value of the left-hand side under the given assignment.
    pub fn evaluate(&self, assignment: &Assignment) -> i64 {
        self.terms
            .iter()
            .filter(|term| assignment.value(term.variable))
            .map(|term| i64::from(term.coefficient))
            .sum()
    }

    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        let lhs = self.evaluate(assignment);
        let rhs = i64::from(self.rhs);

        match self.comparator {
            Comparator::LessThanOrEqual => lhs <= rhs,
            Comparator::GreaterThanOrEqual => lhs >= rhs,
        }
    }
}

/// The constraint `premise -> !forbidden`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Implication {
    pub premise: BoolVar,
    pub forbidden: BoolVar,
}

impl Implication {
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        !(assignment.value(self.premise) && assignment.value(self.forbidden))
    }
}

/// A constraint of the boolean model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    Linear(LinearConstraint),
    Implication(Implication),
}

impl Constraint {
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        match self {
            Constraint::Linear(linear) => linear.is_satisfied_by(assignment),
            Constraint::Implication(implication) => implication.is_satisfied_by(assignment),
        }
    }
}

impl From<LinearConstraint> for Constraint {
    fn from(linear: LinearConstraint) -> Self {
        Constraint::Linear(linear)
    }
}

impl From<Implication> for Constraint {
    fn from(implication: Implication) -> Self {
        Constraint::Implication(implication)
    }
}
