use super::DecisionGrid;
use crate::model::LinearConstraint;
use crate::model::Model;
use crate::model::Term;
use crate::params::SchedulingParams;
use crate::rule::Rule;

/// A shift which starts at hour `t` lasts at least `min_shift_length` hours.
///
/// With `C = min_shift_length`, a start at `t` (worked at `t`, free at `t - 1` or `t = 0`) forces
/// `x[t + 1..t + C]` to be worked:
///
/// `\sum x[t..t + C] - C * x[t] + C * x[t - 1] >= 0`.
///
/// A shift cannot start within the last `C - 1` hours of the horizon, since it would be cut short
/// by the horizon end.
pub(super) fn encode(grid: &DecisionGrid, params: &SchedulingParams, model: &mut Model) {
    let length = params.min_shift_length();
    if length <= 1 {
        return;
    }

    let horizon = grid.horizon_hours();
    for resident in 0..grid.residents() {
        let row = grid.row(resident);

        for hour in 0..horizon {
            let previous = hour.checked_sub(1).map(|previous| row[previous]);

            let constraint = if hour + length > horizon {
                let mut start = vec![Term::unit(row[hour])];
                start.extend(previous.map(|previous| Term::new(-1, previous)));
                LinearConstraint::less_than_or_equals(start, 0)
            } else {
                let mut run = vec![Term::new(1 - length as i32, row[hour])];
                run.extend(row[hour + 1..hour + length].iter().copied().map(Term::unit));
                run.extend(previous.map(|previous| Term::new(length as i32, previous)));
                LinearConstraint::greater_than_or_equals(run, 0)
            };

            model.add_linear(Rule::MinShiftLength, constraint);
        }
    }
}
