//! An engine-neutral boolean model.
//!
//! The rule encoders describe the scheduling problem in terms of 0-1 variables, linear
//! inequalities over those variables and implications between pairs of them. A [`Model`] records
//! these constraints together with the [`Rule`] which produced each of them, so that a
//! [`SearchEngine`](crate::engine::SearchEngine) can compile it into its own representation and
//! tests can evaluate it against a hand-built [`Assignment`].
mod assignment;
mod constraint;

use std::fmt::Display;
use std::fmt::Formatter;

pub use assignment::Assignment;
pub use constraint::Comparator;
pub use constraint::Constraint;
pub use constraint::Implication;
pub use constraint::LinearConstraint;
pub use constraint::Term;

use crate::rule::Rule;

/// A boolean variable of a [`Model`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoolVar(usize);

impl BoolVar {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Where a variable of the model comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariableOrigin {
    /// Whether `resident` works during `hour`.
    Cell { resident: usize, hour: usize },
    /// Whether `resident` is off for the 24 hours starting at `start`, which lies in the week
    /// beginning at `week_start`.
    DayOff {
        resident: usize,
        week_start: usize,
        start: usize,
    },
}

impl Display for VariableOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableOrigin::Cell { resident, hour } => write!(f, "x_{resident}_{hour}"),
            VariableOrigin::DayOff {
                resident,
                week_start,
                start,
            } => write!(f, "day_off_{resident}_{week_start}_{start}"),
        }
    }
}

/// A set of boolean variables, constraints over them and a linear objective to minimise.
#[derive(Clone, Debug, Default)]
pub struct Model {
    variables: Vec<VariableOrigin>,
    constraints: Vec<(Rule, Constraint)>,
    objective: Vec<Term>,
}

impl Model {
    pub fn new_variable(&mut self, origin: VariableOrigin) -> BoolVar {
        let variable = BoolVar(self.variables.len());
        self.variables.push(origin);
        variable
    }

    /// Adds a linear constraint which enforces `rule`.
    pub fn add_linear(&mut self, rule: Rule, constraint: LinearConstraint) {
        self.constraints.push((rule, constraint.into()));
    }

    /// Adds the constraint `premise -> !forbidden`, which enforces `rule`.
    pub fn add_implication(&mut self, rule: Rule, premise: BoolVar, forbidden: BoolVar) {
        self.constraints.push((
            rule,
            Implication {
                premise,
                forbidden,
            }
            .into(),
        ));
    }

    /// Sets the objective to the minimisation of `\sum terms`.
    pub fn minimise(&mut self, terms: impl IntoIterator<Item = Term>) {
        self.objective = terms.into_iter().collect();
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn origin(&self, variable: BoolVar) -> VariableOrigin {
        self.variables[variable.index()]
    }

    /// All variables of the model, in creation order.
    pub fn variables(&self) -> impl Iterator<Item = (BoolVar, VariableOrigin)> + '_ {
        self.variables
            .iter()
            .enumerate()
            .map(|(index, &origin)| (BoolVar(index), origin))
    }

    pub fn constraints(&self) -> impl Iterator<Item = (Rule, &Constraint)> + '_ {
        self.constraints
            .iter()
            .map(|(rule, constraint)| (*rule, constraint))
    }

    pub fn constraints_for(&self, rule: Rule) -> impl Iterator<Item = &Constraint> + '_ {
        self.constraints()
            .filter(move |(constraint_rule, _)| *constraint_rule == rule)
            .map(|(_, constraint)| constraint)
    }

    pub fn constraint_count(&self, rule: Rule) -> usize {
        self.constraints_for(rule).count()
    }

    /// The terms of the minimisation objective; empty if no objective was set.
    pub fn objective(&self) -> &[Term] {
        &self.objective
    }

    /// The value of the objective under the given assignment.
    pub fn objective_value(&self, assignment: &Assignment) -> i64 {
        self.objective
            .iter()
            .filter(|term| assignment.value(term.variable))
            .map(|term| i64::from(term.coefficient))
            .sum()
    }

    /// Returns every constraint which the assignment does not satisfy.
    pub fn violated_constraints<'a>(
        &'a self,
        assignment: &'a Assignment,
    ) -> impl Iterator<Item = (Rule, &'a Constraint)> + 'a {
        self.constraints()
            .filter(move |(_, constraint)| !constraint.is_satisfied_by(assignment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_variable_model() -> (Model, BoolVar, BoolVar) {
        let mut model = Model::default();
        let a = model.new_variable(VariableOrigin::Cell {
            resident: 0,
            hour: 0,
        });
        let b = model.new_variable(VariableOrigin::Cell {
            resident: 0,
            hour: 1,
        });
        (model, a, b)
    }

    #[test]
    fn variables_are_numbered_in_creation_order() {
        let (model, a, b) = two_variable_model();

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(model.num_variables(), 2);
        assert_eq!(
            model.origin(b),
            VariableOrigin::Cell {
                resident: 0,
                hour: 1
            }
        );
    }

    #[test]
    fn linear_constraints_are_evaluated() {
        let (mut model, a, b) = two_variable_model();
        model.add_linear(
            Rule::Coverage,
            LinearConstraint::greater_than_or_equals([Term::unit(a), Term::unit(b)], 1),
        );
        model.add_linear(
            Rule::MaxWeekly,
            LinearConstraint::less_than_or_equals([Term::new(2, a), Term::unit(b)], 2),
        );

        let none = Assignment::new([false, false]);
        let only_b = Assignment::new([false, true]);
        let both = Assignment::new([true, true]);

        let violated = |assignment: &Assignment| {
            model
                .violated_constraints(assignment)
                .map(|(rule, _)| rule)
                .collect::<Vec<_>>()
        };

        assert_eq!(violated(&none), vec![Rule::Coverage]);
        assert!(violated(&only_b).is_empty());
        assert_eq!(violated(&both), vec![Rule::MaxWeekly]);
    }

    #[test]
    fn implication_forbids_only_both_true() {
        let (mut model, a, b) = two_variable_model();
        model.add_implication(Rule::MinDaysOff, a, b);

        assert_eq!(
            model
                .violated_constraints(&Assignment::new([true, true]))
                .count(),
            1
        );
        assert_eq!(
            model
                .violated_constraints(&Assignment::new([true, false]))
                .count(),
            0
        );
        assert_eq!(
            model
                .violated_constraints(&Assignment::new([false, true]))
                .count(),
            0
        );
    }

    #[test]
    fn empty_sum_is_a_constant_constraint() {
        let constraint = LinearConstraint::greater_than_or_equals(Vec::<Term>::new(), 1);

        assert!(!constraint.is_satisfied_by(&Assignment::all_false(0)));
        assert!(LinearConstraint::greater_than_or_equals(Vec::<Term>::new(), 0)
            .is_satisfied_by(&Assignment::all_false(0)));
    }

    #[test]
    fn greater_than_is_negated_into_less_than() {
        let (_, a, b) = two_variable_model();
        let constraint =
            LinearConstraint::greater_than_or_equals([Term::new(3, a), Term::new(-1, b)], 2);

        let (terms, rhs) = constraint.as_less_than_or_equals();

        assert_eq!(terms, vec![Term::new(-3, a), Term::new(1, b)]);
        assert_eq!(rhs, -2);
    }

    #[test]
    fn constraints_are_counted_per_rule() {
        let (mut model, a, b) = two_variable_model();
        model.add_implication(Rule::MinRest, a, b);
        model.add_implication(Rule::MinRest, b, a);
        model.add_linear(
            Rule::Coverage,
            LinearConstraint::less_than_or_equals([Term::unit(a)], 1),
        );

        assert_eq!(model.constraint_count(Rule::MinRest), 2);
        assert_eq!(model.constraint_count(Rule::Coverage), 1);
        assert_eq!(model.constraint_count(Rule::MinDaysOff), 0);
    }

    #[test]
    fn objective_value_sums_true_terms() {
        let (mut model, a, b) = two_variable_model();
        model.minimise([Term::unit(a), Term::unit(b)]);

        assert_eq!(model.objective_value(&Assignment::new([true, false])), 1);
        assert_eq!(model.objective_value(&Assignment::new([true, true])), 2);
    }
}
