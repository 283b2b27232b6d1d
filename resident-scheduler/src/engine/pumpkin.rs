use std::time::Duration;

use log::debug;
use log::info;
use pumpkin_solver::constraints;
use pumpkin_solver::constraints::Constraint as _;
use pumpkin_solver::optimisation::linear_sat_unsat::LinearSatUnsat;
use pumpkin_solver::optimisation::OptimisationDirection;
use pumpkin_solver::options::SolverOptions;
use pumpkin_solver::proof::ConstraintTag;
use pumpkin_solver::rand::rngs::SmallRng;
use pumpkin_solver::rand::SeedableRng;
use pumpkin_solver::results::OptimisationResult;
use pumpkin_solver::results::ProblemSolution;
use pumpkin_solver::results::SolutionReference;
use pumpkin_solver::termination::TimeBudget;
use pumpkin_solver::variables::DomainId;
use pumpkin_solver::variables::Literal;
use pumpkin_solver::DefaultBrancher;
use pumpkin_solver::Solver;

use super::SearchEngine;
use super::Verdict;
use crate::model::Assignment;
use crate::model::Constraint;
use crate::model::Implication;
use crate::model::Model;
use crate::model::Term;
use crate::rule::Rule;

/// A [`SearchEngine`] backed by the Pumpkin lazy clause generation solver.
///
/// Every model variable becomes a named literal, linear constraints are posted as boolean linear
/// inequalities and implications as binary clauses. The objective is bound to an integer variable
/// which is minimised with linear SAT-UNSAT search.
#[derive(Clone, Copy, Debug)]
pub struct PumpkinEngine {
    random_seed: u64,
}

impl Default for PumpkinEngine {
    fn default() -> Self {
        PumpkinEngine::with_seed(42)
    }
}

impl PumpkinEngine {
    /// Creates an engine whose search is driven by a random generator seeded with `random_seed`.
    pub fn with_seed(random_seed: u64) -> PumpkinEngine {
        PumpkinEngine { random_seed }
    }

    pub fn random_seed(&self) -> u64 {
        self.random_seed
    }
}

impl SearchEngine for PumpkinEngine {
    fn solve(&mut self, model: &Model, time_budget: Duration) -> Verdict {
        let mut solver = Solver::with_options(SolverOptions {
            random_generator: SmallRng::seed_from_u64(self.random_seed),
            ..Default::default()
        });

        let Some(compiled) = CompiledModel::compile(&mut solver, model) else {
            return Verdict::Infeasible;
        };

        let mut brancher = solver.default_brancher();
        let mut termination = TimeBudget::starting_now(time_budget);
        let callback: fn(&Solver, SolutionReference, &DefaultBrancher) = |_, _, _| {};

        let result = solver.optimise(
            &mut brancher,
            &mut termination,
            LinearSatUnsat::new(OptimisationDirection::Minimise, compiled.objective, callback),
        );

        match result {
            OptimisationResult::Optimal(solution) => {
                Verdict::Optimal(compiled.read_assignment(&solution))
            }
            OptimisationResult::Satisfiable(solution) => {
                Verdict::Feasible(compiled.read_assignment(&solution))
            }
            OptimisationResult::Unsatisfiable => Verdict::Infeasible,
            OptimisationResult::Unknown => Verdict::Unknown,
        }
    }
}

/// The solver-side counterpart of a [`Model`].
struct CompiledModel {
    literals: Vec<Literal>,
    objective: DomainId,
}

impl CompiledModel {
    /// Posts all constraints of `model` to `solver`.
    ///
    /// Returns `None` if the model is found to be unsatisfiable while posting.
    fn compile(solver: &mut Solver, model: &Model) -> Option<CompiledModel> {
        let literals = model
            .variables()
            .map(|(_, origin)| solver.new_named_literal(origin.to_string().as_str()))
            .collect::<Vec<_>>();

        let tags = Rule::ALL.map(|_| solver.new_constraint_tag());

        for (rule, constraint) in model.constraints() {
            let constraint_tag = tags[rule as usize];

            let is_satisfiable = match constraint {
                Constraint::Linear(linear) => {
                    let (terms, rhs) = linear.as_less_than_or_equals();
                    post_less_than_or_equals(solver, &literals, &terms, rhs, constraint_tag)
                }
                Constraint::Implication(Implication { premise, forbidden }) => {
                    constraints::clause(
                        [
                            !literals[premise.index()],
                            !literals[forbidden.index()],
                        ],
                        constraint_tag,
                    )
                    .post(solver)
                    .is_ok()
                }
            };

            if !is_satisfiable {
                info!("The model is unsatisfiable at the root, conflict in rule {rule}");
                return None;
            }
        }

        let objective_tag = solver.new_constraint_tag();
        let objective = bind_objective(solver, &literals, model.objective(), objective_tag)?;

        debug!(
            "Compiled {} literals and {} constraints",
            literals.len(),
            model.constraints().count()
        );

        Some(CompiledModel {
            literals,
            objective,
        })
    }

    fn read_assignment(&self, solution: &impl ProblemSolution) -> Assignment {
        Assignment::new(
            self.literals
                .iter()
                .map(|&literal| solution.get_literal_value(literal))
                .collect::<Vec<_>>(),
        )
    }
}

/// Posts `\sum terms <= rhs`; a constraint without terms is decided immediately.
fn post_less_than_or_equals(
    solver: &mut Solver,
    literals: &[Literal],
    terms: &[Term],
    rhs: i32,
    constraint_tag: ConstraintTag,
) -> bool {
    if terms.is_empty() {
        return rhs >= 0;
    }

    let (weights, bools): (Vec<i32>, Vec<Literal>) = terms
        .iter()
        .map(|term| (term.coefficient, literals[term.variable.index()]))
        .unzip();

    constraints::boolean_less_than_or_equals(weights, bools, rhs, constraint_tag)
        .post(solver)
        .is_ok()
}

/// Creates an integer variable equal to `\sum objective`.
fn bind_objective(
    solver: &mut Solver,
    literals: &[Literal],
    objective: &[Term],
    constraint_tag: ConstraintTag,
) -> Option<DomainId> {
    let lower_bound = objective
        .iter()
        .map(|term| term.coefficient.min(0))
        .sum::<i32>();
    let upper_bound = objective
        .iter()
        .map(|term| term.coefficient.max(0))
        .sum::<i32>();

    let value = solver.new_named_bounded_integer(lower_bound, upper_bound, "objective");

    let (weights, bools): (Vec<i32>, Vec<Literal>) = objective
        .iter()
        .map(|term| (term.coefficient, literals[term.variable.index()]))
        .unzip();

    constraints::boolean_equals(weights, bools, value, constraint_tag)
        .post(solver)
        .is_ok()
        .then_some(value)
}
