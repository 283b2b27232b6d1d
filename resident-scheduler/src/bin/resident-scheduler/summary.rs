use std::fmt::Write;

use itertools::Itertools;
use resident_scheduler::Schedule;
use resident_scheduler::Violation;
use resident_scheduler::HOURS_PER_WEEK;

const LABEL_WIDTH: usize = 10;

/// A table with the workload of every resident, followed by the outcome of the verification.
pub(crate) fn render_summary(schedule: &Schedule, violations: &[Violation]) -> String {
    let mut summary = String::new();

    let _ = writeln!(
        summary,
        "{:<LABEL_WIDTH$}{:>10}{:>14}{:>12}",
        "Resident", "Total hrs", "Teaching hrs", "Max consec"
    );
    for resident in 0..schedule.residents() {
        let _ = writeln!(
            summary,
            "{:<LABEL_WIDTH$}{:>10}{:>14}{:>12}",
            format!("R{resident}"),
            schedule.working_hours(resident),
            schedule.teaching_hours_count(resident),
            schedule.longest_shift(resident)
        );
    }
    let _ = writeln!(
        summary,
        "\nTotal worked hours: {}",
        schedule.total_worked_hours()
    );

    if violations.is_empty() {
        let _ = writeln!(summary, "All constraints satisfied.");
    } else {
        let _ = writeln!(summary, "Constraint violations:");
        for violation in violations {
            let _ = writeln!(summary, "  - {violation}");
        }
    }

    summary
}

/// One line per resident with `#` for worked and `.` for free hours, below a line which marks the
/// teaching hours with `T`. Weeks are separated by `|`.
pub(crate) fn render_heatmap(schedule: &Schedule) -> String {
    let mut teaching = vec![' '; schedule.horizon_hours()];
    for hour in schedule.params().effective_teaching_hours() {
        teaching[hour] = 'T';
    }

    let mut heatmap = String::new();
    let _ = writeln!(
        heatmap,
        "{:<LABEL_WIDTH$}{}",
        "Teaching",
        split_into_weeks(&teaching)
    );

    for resident in 0..schedule.residents() {
        let cells = schedule
            .row(resident)
            .iter()
            .map(|&value| if value == 1 { '#' } else { '.' })
            .collect_vec();
        let _ = writeln!(
            heatmap,
            "{:<LABEL_WIDTH$}{}",
            format!("R{resident}"),
            split_into_weeks(&cells)
        );
    }

    heatmap
}

fn split_into_weeks(cells: &[char]) -> String {
    cells
        .chunks(HOURS_PER_WEEK)
        .map(|week| week.iter().collect::<String>())
        .join("|")
}
