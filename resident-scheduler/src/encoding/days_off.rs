use itertools::Itertools;

use super::week_windows;
use super::DecisionGrid;
use crate::model::BoolVar;
use crate::model::LinearConstraint;
use crate::model::Model;
use crate::model::Term;
use crate::model::VariableOrigin;
use crate::params::SchedulingParams;
use crate::params::HOURS_PER_DAY;
use crate::rule::Rule;

/// Every week window of at least a day contains `min_days_off_per_week` disjoint days off.
///
/// For every possible start `s` of a day inside the week an indicator `d[s]` is introduced which
/// implies that the resident is free during `[s, s + 24)`. At least `min_days_off_per_week`
/// indicators are true, and no two true indicators are less than a day apart.
pub(super) fn encode(grid: &DecisionGrid, params: &SchedulingParams, model: &mut Model) {
    let required = params.min_days_off_per_week();
    if required == 0 {
        return;
    }

    for resident in 0..grid.residents() {
        let row = grid.row(resident);

        for week in week_windows(grid.horizon_hours()).filter(|week| week.len() >= HOURS_PER_DAY) {
            let indicators = (week.start..=week.end - HOURS_PER_DAY)
                .map(|start| {
                    let day_off = model.new_variable(VariableOrigin::DayOff {
                        resident,
                        week_start: week.start,
                        start,
                    });

                    for &hour in &row[start..start + HOURS_PER_DAY] {
                        model.add_implication(Rule::MinDaysOff, day_off, hour);
                    }

                    day_off
                })
                .collect::<Vec<_>>();

            model.add_linear(
                Rule::MinDaysOff,
                LinearConstraint::greater_than_or_equals(units(&indicators), required as i32),
            );

            if indicators.len() <= HOURS_PER_DAY {
                model.add_linear(
                    Rule::MinDaysOff,
                    LinearConstraint::less_than_or_equals(units(&indicators), 1),
                );
            } else {
                for overlapping in indicators.windows(HOURS_PER_DAY) {
                    model.add_linear(
                        Rule::MinDaysOff,
                        LinearConstraint::less_than_or_equals(units(overlapping), 1),
                    );
                }
            }
        }
    }
}

fn units(variables: &[BoolVar]) -> Vec<Term> {
    variables.iter().copied().map(Term::unit).collect_vec()
}
