//! The finished duty grid and the read-only queries over it.
use std::ops::Range;

use itertools::Itertools;
use thiserror::Error;

use crate::params::SchedulingParams;

/// The reasons for which a grid does not fit its parameters.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("expected {expected} rows, one per resident, got {actual}")]
    RowCount { expected: usize, actual: usize },
    #[error("row {resident} has {actual} hours, expected {expected}")]
    RowLength {
        resident: usize,
        expected: usize,
        actual: usize,
    },
    #[error("resident {resident} has value {value} at hour {hour}, expected 0 or 1")]
    NonBinary {
        resident: usize,
        hour: usize,
        value: u8,
    },
}

/// An immutable duty grid together with the parameters it was produced for.
///
/// `grid[r][t]` is 1 if resident `r` works during hour `t`, and 0 otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    params: SchedulingParams,
    grid: Vec<Vec<u8>>,
}

impl Schedule {
    /// Creates a schedule from one row per resident, each holding one 0/1 value per hour.
    pub fn new(params: SchedulingParams, grid: Vec<Vec<u8>>) -> Result<Schedule, GridError> {
        if grid.len() != params.residents() {
            return Err(GridError::RowCount {
                expected: params.residents(),
                actual: grid.len(),
            });
        }

        for (resident, row) in grid.iter().enumerate() {
            if row.len() != params.horizon_hours() {
                return Err(GridError::RowLength {
                    resident,
                    expected: params.horizon_hours(),
                    actual: row.len(),
                });
            }

            if let Some((hour, &value)) = row.iter().find_position(|&&value| value > 1) {
                return Err(GridError::NonBinary {
                    resident,
                    hour,
                    value,
                });
            }
        }

        Ok(Schedule { params, grid })
    }

    pub fn params(&self) -> &SchedulingParams {
        &self.params
    }

    pub fn grid(&self) -> &[Vec<u8>] {
        &self.grid
    }

    pub fn residents(&self) -> usize {
        self.grid.len()
    }

    pub fn horizon_hours(&self) -> usize {
        self.params.horizon_hours()
    }

    pub fn row(&self, resident: usize) -> &[u8] {
        &self.grid[resident]
    }

    pub fn is_working(&self, resident: usize, hour: usize) -> bool {
        self.grid[resident][hour] == 1
    }

    /// The number of hours worked by `resident` over the whole horizon.
    pub fn working_hours(&self, resident: usize) -> usize {
        self.row(resident).iter().filter(|&&value| value == 1).count()
    }

    /// The number of residents working during `hour`.
    pub fn on_duty_count(&self, hour: usize) -> usize {
        self.grid.iter().filter(|row| row[hour] == 1).count()
    }

    /// The number of teaching hours inside the horizon worked by `resident`.
    pub fn teaching_hours_count(&self, resident: usize) -> usize {
        let row = self.row(resident);
        self.params
            .effective_teaching_hours()
            .filter(|&hour| row[hour] == 1)
            .count()
    }

    /// The maximal runs of worked hours of `resident`.
    pub fn shifts(&self, resident: usize) -> Vec<Range<usize>> {
        self.runs(resident, 1)
    }

    /// The maximal runs of free hours of `resident`.
    pub fn rest_gaps(&self, resident: usize) -> Vec<Range<usize>> {
        self.runs(resident, 0)
    }

    /// The length of the longest shift of `resident`, or 0 if they never work.
    pub fn longest_shift(&self, resident: usize) -> usize {
        self.shifts(resident)
            .iter()
            .map(ExactSizeIterator::len)
            .max()
            .unwrap_or(0)
    }

    /// The number of worked hours over all residents, which is the value being minimised.
    pub fn total_worked_hours(&self) -> usize {
        (0..self.residents())
            .map(|resident| self.working_hours(resident))
            .sum()
    }

    fn runs(&self, resident: usize, value: u8) -> Vec<Range<usize>> {
        self.row(resident)
            .iter()
            .enumerate()
            .chunk_by(|&(_, &cell)| cell)
            .into_iter()
            .filter(|(cell, _)| *cell == value)
            .filter_map(|(_, mut run)| {
                let (start, _) = run.next()?;
                let end = run.last().map_or(start, |(hour, _)| hour) + 1;
                Some(start..end)
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::params::tests::base_raw_parameters;
    use crate::params::RawParameters;

    /// Creates a schedule from rows written as strings of `0` and `1` characters.
    pub(crate) fn schedule_from(raw: RawParameters, rows: &[&str]) -> Schedule {
        let params = SchedulingParams::try_from(RawParameters {
            residents: rows.len() as i64,
            horizon_hours: rows[0].len() as i64,
            ..raw
        })
        .expect("valid parameters");
        let grid = rows
            .iter()
            .map(|row| row.bytes().map(|byte| byte - b'0').collect())
            .collect();

        Schedule::new(params, grid).expect("valid grid")
    }

    fn params(residents: i64, horizon_hours: i64) -> SchedulingParams {
        SchedulingParams::try_from(RawParameters {
            residents,
            horizon_hours,
            ..base_raw_parameters()
        })
        .expect("valid parameters")
    }

    #[test]
    fn wrong_row_count_is_rejected() {
        let result = Schedule::new(params(2, 3), vec![vec![0, 1, 0]]);

        assert_eq!(
            result,
            Err(GridError::RowCount {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn wrong_row_length_is_rejected() {
        let result = Schedule::new(params(2, 3), vec![vec![0, 1, 0], vec![1, 1]]);

        assert_eq!(
            result,
            Err(GridError::RowLength {
                resident: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn non_binary_value_is_rejected() {
        let error = Schedule::new(params(1, 3), vec![vec![0, 2, 1]]).expect_err("invalid grid");
        let reported = error;

        assert_eq!(
            reported,
            GridError::NonBinary {
                resident: 0,
                hour: 1,
                value: 2
            }
        );
        assert_eq!(
            error.to_string(),
            "resident 0 has value 2 at hour 1, expected 0 or 1"
        );
    }

    #[test]
    fn counts_agree_with_manual_sums() {
        let schedule = schedule_from(
            RawParameters {
                teaching_hours: vec![1, 2, 9, 50],
                ..base_raw_parameters()
            },
            &["0111001110", "1100000111", "0000000000"],
        );

        assert_eq!(schedule.working_hours(0), 6);
        assert_eq!(schedule.working_hours(2), 0);
        assert_eq!(schedule.on_duty_count(1), 2);
        assert_eq!(schedule.on_duty_count(4), 0);
        assert_eq!(schedule.teaching_hours_count(0), 2);
        assert_eq!(schedule.teaching_hours_count(1), 2);
        assert_eq!(schedule.total_worked_hours(), 11);

        for hour in 0..schedule.horizon_hours() {
            let manual = schedule.grid().iter().map(|row| usize::from(row[hour])).sum::<usize>();
            assert_eq!(schedule.on_duty_count(hour), manual);
        }
    }

    #[test]
    fn shifts_and_rest_gaps_partition_the_row() {
        let schedule = schedule_from(base_raw_parameters(), &["0111001110", "1111111111"]);

        assert_eq!(schedule.shifts(0), vec![1..4, 6..9]);
        assert_eq!(schedule.rest_gaps(0), vec![0..1, 4..6, 9..10]);
        assert_eq!(schedule.shifts(1), vec![0..10]);
        assert!(schedule.rest_gaps(1).is_empty());
    }

    #[test]
    fn longest_shift_of_an_idle_resident_is_zero() {
        let schedule = schedule_from(base_raw_parameters(), &["0110111000", "0000000000"]);

        assert_eq!(schedule.longest_shift(0), 3);
        assert_eq!(schedule.longest_shift(1), 0);
    }
}
