use clap::ValueEnum;
use resident_scheduler::HOURS_PER_DAY;

use crate::result::CliError;
use crate::result::CliResult;

/// The days of a week; a horizon starts on Sunday at midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub(crate) enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Returns the absolute hours of the first week which fall on one of `days` within the daily
/// window `[start_hour, end_hour)`, in ascending order.
pub(crate) fn build_teaching_hours(
    days: &[Weekday],
    start_hour: i64,
    end_hour: i64,
) -> CliResult<Vec<i64>> {
    if start_hour < 0 || end_hour > HOURS_PER_DAY as i64 || start_hour > end_hour {
        return Err(CliError::InvalidTeachingWindow {
            start_hour,
            end_hour,
        });
    }

    let mut days = days.to_vec();
    days.sort_unstable();
    days.dedup();

    Ok(days
        .into_iter()
        .flat_map(|day| {
            (start_hour..end_hour).map(move |hour| day as i64 * HOURS_PER_DAY as i64 + hour)
        })
        .collect())
}
