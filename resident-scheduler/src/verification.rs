//! Independent verification of a finished schedule.
//!
//! The checks in this module scan the grid directly: shifts and rest gaps are found from value
//! transitions and days off are counted as disjoint free days inside every week. They do not use
//! the constraints of the boolean model, so a verified schedule is evidence that the encoding is
//! sound.
use std::fmt::Display;
use std::fmt::Formatter;

use crate::params::HOURS_PER_DAY;
use crate::params::HOURS_PER_WEEK;
use crate::rule::Rule;
use crate::schedule::Schedule;

/// The part of the horizon in which a [`Violation`] occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Hour(usize),
    /// The hours in `[start, end)`.
    Hours { start: usize, end: usize },
    Horizon,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Hour(hour) => write!(f, "hour {hour}"),
            Location::Hours { start, end } => write!(f, "hours {start}..{end}"),
            Location::Horizon => write!(f, "the horizon"),
        }
    }
}

/// A rule which does not hold for a schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Violation {
    pub rule: Rule,
    /// The resident for whom the rule is violated; `None` for coverage.
    pub resident: Option<usize>,
    pub location: Location,
    /// The measured quantity, e.g. the number of residents on duty or the length of a shift.
    pub observed: usize,
    /// The bound which `observed` should respect.
    pub required: usize,
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule)?;
        if let Some(resident) = self.resident {
            write!(f, " for resident {resident}")?;
        }
        write!(
            f,
            " at {}: observed {}, required {}",
            self.location, self.observed, self.required
        )
    }
}

/// Returns every violation of the scheduling rules in `schedule`; the result is empty if and only
/// if all rules hold.
pub fn verify(schedule: &Schedule) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_coverage(schedule, &mut violations);
    for resident in 0..schedule.residents() {
        check_rest(schedule, resident, &mut violations);
        check_consecutive(schedule, resident, &mut violations);
        check_weekly(schedule, resident, &mut violations);
        check_teaching(schedule, resident, &mut violations);
        check_shift_length(schedule, resident, &mut violations);
        check_days_off(schedule, resident, &mut violations);
    }

    violations
}

fn check_coverage(schedule: &Schedule, violations: &mut Vec<Violation>) {
    let required = schedule.params().min_on_duty();

    for hour in 0..schedule.horizon_hours() {
        let on_duty = schedule.on_duty_count(hour);
        if on_duty < required {
            violations.push(Violation {
                rule: Rule::Coverage,
                resident: None,
                location: Location::Hour(hour),
                observed: on_duty,
                required,
            });
        }
    }
}

/// Only gaps between two shifts are checked; leading and trailing gaps are unbounded.
fn check_rest(schedule: &Schedule, resident: usize, violations: &mut Vec<Violation>) {
    let required = schedule.params().min_rest_hours();

    for gap in schedule.rest_gaps(resident) {
        let is_between_shifts = gap.start > 0 && gap.end < schedule.horizon_hours();
        if is_between_shifts && gap.len() < required {
            violations.push(Violation {
                rule: Rule::MinRest,
                resident: Some(resident),
                location: Location::Hours {
                    start: gap.start,
                    end: gap.end,
                },
                observed: gap.len(),
                required,
            });
        }
    }
}

fn check_consecutive(schedule: &Schedule, resident: usize, violations: &mut Vec<Violation>) {
    let limit = schedule.params().max_consecutive_hours();

    for shift in schedule.shifts(resident) {
        if shift.len() > limit {
            violations.push(Violation {
                rule: Rule::MaxConsecutive,
                resident: Some(resident),
                location: Location::Hours {
                    start: shift.start,
                    end: shift.end,
                },
                observed: shift.len(),
                required: limit,
            });
        }
    }
}

fn check_weekly(schedule: &Schedule, resident: usize, violations: &mut Vec<Violation>) {
    let limit = schedule.params().max_weekly_hours();

    for (index, week) in schedule.row(resident).chunks(HOURS_PER_WEEK).enumerate() {
        let worked = week.iter().filter(|&&value| value == 1).count();
        if worked > limit {
            let start = index * HOURS_PER_WEEK;
            violations.push(Violation {
                rule: Rule::MaxWeekly,
                resident: Some(resident),
                location: Location::Hours {
                    start,
                    end: start + week.len(),
                },
                observed: worked,
                required: limit,
            });
        }
    }
}

fn check_teaching(schedule: &Schedule, resident: usize, violations: &mut Vec<Violation>) {
    let required = schedule.params().min_teaching_hours();
    let attended = schedule.teaching_hours_count(resident);

    if attended < required {
        violations.push(Violation {
            rule: Rule::MinTeaching,
            resident: Some(resident),
            location: Location::Horizon,
            observed: attended,
            required,
        });
    }
}

/// A shift which runs into the end of the horizon is held to the same minimum.
fn check_shift_length(schedule: &Schedule, resident: usize, violations: &mut Vec<Violation>) {
    let required = schedule.params().min_shift_length();

    for shift in schedule.shifts(resident) {
        if shift.len() < required {
            violations.push(Violation {
                rule: Rule::MinShiftLength,
                resident: Some(resident),
                location: Location::Hours {
                    start: shift.start,
                    end: shift.end,
                },
                observed: shift.len(),
                required,
            });
        }
    }
}

/// Counts, per week of at least a day, how many disjoint free days fit into the free runs of the
/// week.
fn check_days_off(schedule: &Schedule, resident: usize, violations: &mut Vec<Violation>) {
    let required = schedule.params().min_days_off_per_week();

    for (index, week) in schedule.row(resident).chunks(HOURS_PER_WEEK).enumerate() {
        if week.len() < HOURS_PER_DAY {
            continue;
        }

        let days_off = week
            .split(|&value| value == 1)
            .map(|free_run| free_run.len() / HOURS_PER_DAY)
            .sum::<usize>();

        if days_off < required {
            let start = index * HOURS_PER_WEEK;
            violations.push(Violation {
                rule: Rule::MinDaysOff,
                resident: Some(resident),
                location: Location::Hours {
                    start,
                    end: start + week.len(),
                },
                observed: days_off,
                required,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RawParameters;
    use crate::schedule::tests::schedule_from;

    /// Parameters under which every grid is valid; tests tighten one rule at a time.
    fn lenient() -> RawParameters {
        RawParameters {
            residents: 1,
            horizon_hours: 1,
            min_on_duty: 0,
            min_rest_hours: 0,
            max_consecutive_hours: 1_000,
            max_weekly_hours: 1_000,
            teaching_hours: vec![],
            min_teaching_hours: 0,
            min_shift_length: 1,
            min_days_off_per_week: 0,
        }
    }

    fn rules_of(violations: &[Violation]) -> Vec<Rule> {
        violations.iter().map(|violation| violation.rule).collect()
    }

    #[test]
    fn lenient_parameters_accept_any_grid() {
        let schedule = schedule_from(lenient(), &["0110101", "1111111", "0000000"]);

        assert!(verify(&schedule).is_empty());
    }

    #[test]
    fn under_staffed_hours_are_reported() {
        let schedule = schedule_from(
            RawParameters {
                min_on_duty: 2,
                ..lenient()
            },
            &["1110", "0111"],
        );

        assert_eq!(
            verify(&schedule),
            vec![
                Violation {
                    rule: Rule::Coverage,
                    resident: None,
                    location: Location::Hour(0),
                    observed: 1,
                    required: 2,
                },
                Violation {
                    rule: Rule::Coverage,
                    resident: None,
                    location: Location::Hour(3),
                    observed: 1,
                    required: 2,
                },
            ]
        );
    }

    #[test]
    fn short_rest_between_shifts_is_reported() {
        let schedule = schedule_from(
            RawParameters {
                min_rest_hours: 3,
                ..lenient()
            },
            &["0011001000", "1000111000"],
        );

        let violations = verify(&schedule);

        assert_eq!(rules_of(&violations), vec![Rule::MinRest]);
        assert_eq!(violations[0].resident, Some(0));
        assert_eq!(violations[0].location, Location::Hours { start: 4, end: 6 });
        assert_eq!(violations[0].observed, 2);
    }

    #[test]
    fn long_shift_is_reported() {
        let schedule = schedule_from(
            RawParameters {
                max_consecutive_hours: 3,
                ..lenient()
            },
            &["0111101110"],
        );

        let violations = verify(&schedule);

        assert_eq!(rules_of(&violations), vec![Rule::MaxConsecutive]);
        assert_eq!(violations[0].location, Location::Hours { start: 1, end: 5 });
        assert_eq!(violations[0].observed, 4);
    }

    #[test]
    fn weekly_cap_is_checked_per_week() {
        let first_week_busy = format!("{}{}", "1".repeat(30), "0".repeat(170));
        let split_over_weeks = format!("{}{}{}", "0".repeat(150), "1".repeat(30), "0".repeat(20));
        let schedule = schedule_from(
            RawParameters {
                max_weekly_hours: 20,
                ..lenient()
            },
            &[first_week_busy.as_str(), split_over_weeks.as_str()],
        );

        let violations = verify(&schedule);

        assert_eq!(rules_of(&violations), vec![Rule::MaxWeekly]);
        assert_eq!(violations[0].resident, Some(0));
        assert_eq!(violations[0].location, Location::Hours { start: 0, end: 168 });
        assert_eq!(violations[0].observed, 30);
    }

    #[test]
    fn missing_teaching_attendance_is_reported() {
        let schedule = schedule_from(
            RawParameters {
                teaching_hours: vec![1, 3, 40],
                min_teaching_hours: 2,
                ..lenient()
            },
            &["010100", "010000"],
        );

        let violations = verify(&schedule);

        assert_eq!(
            violations,
            vec![Violation {
                rule: Rule::MinTeaching,
                resident: Some(1),
                location: Location::Horizon,
                observed: 1,
                required: 2,
            }]
        );
    }

    #[test]
    fn short_shift_at_the_horizon_end_is_reported() {
        let schedule = schedule_from(
            RawParameters {
                min_shift_length: 3,
                ..lenient()
            },
            &["11100011", "01110000"],
        );

        let violations = verify(&schedule);

        assert_eq!(rules_of(&violations), vec![Rule::MinShiftLength]);
        assert_eq!(violations[0].location, Location::Hours { start: 6, end: 8 });
    }

    #[test]
    fn days_off_are_counted_as_disjoint_days() {
        let one_and_a_half_days_free = format!("{}{}", "0".repeat(36), "1".repeat(12));
        let two_days_free = "0".repeat(48);
        let schedule = schedule_from(
            RawParameters {
                min_days_off_per_week: 2,
                ..lenient()
            },
            &[one_and_a_half_days_free.as_str(), two_days_free.as_str()],
        );

        let violations = verify(&schedule);

        assert_eq!(
            violations,
            vec![Violation {
                rule: Rule::MinDaysOff,
                resident: Some(0),
                location: Location::Hours { start: 0, end: 48 },
                observed: 1,
                required: 2,
            }]
        );
    }

    #[test]
    fn free_runs_split_by_work_do_not_combine() {
        let split = format!("{}1{}", "0".repeat(20), "0".repeat(27));
        let schedule = schedule_from(
            RawParameters {
                min_days_off_per_week: 1,
                ..lenient()
            },
            &[split.as_str()],
        );

        assert!(verify(&schedule).is_empty());

        let too_short = format!("{}1{}", "0".repeat(23), "0".repeat(23));
        let schedule = schedule_from(
            RawParameters {
                min_days_off_per_week: 1,
                ..lenient()
            },
            &[too_short.as_str()],
        );

        assert_eq!(rules_of(&verify(&schedule)), vec![Rule::MinDaysOff]);
    }

    #[test]
    fn weeks_shorter_than_a_day_need_no_day_off() {
        let row = format!("{}{}", "0".repeat(168), "1".repeat(20));
        let schedule = schedule_from(
            RawParameters {
                min_days_off_per_week: 1,
                ..lenient()
            },
            &[row.as_str()],
        );

        assert!(verify(&schedule).is_empty());
    }

    #[test]
    fn violations_are_readable() {
        let violation = Violation {
            rule: Rule::MinRest,
            resident: Some(2),
            location: Location::Hours { start: 4, end: 6 },
            observed: 2,
            required: 3,
        };

        assert_eq!(
            violation.to_string(),
            "min-rest for resident 2 at hours 4..6: observed 2, required 3"
        );
    }

    #[test]
    fn violations_are_copied_out_of_a_report() {
        let schedule = schedule_from(
            RawParameters {
                min_on_duty: 1,
                ..lenient()
            },
            &["0110", "0010"],
        );
        let violations = verify(&schedule);

        let uncovered = violations
            .iter()
            .copied()
            .filter(|violation| violation.rule == Rule::Coverage)
            .collect::<Vec<_>>();

        assert_eq!(uncovered.len(), 2);
        assert_eq!(uncovered[0].location, Location::Hour(0));
        assert_eq!(uncovered[1].location, Location::Hour(3));
        assert_eq!(uncovered, violations);
    }
}
