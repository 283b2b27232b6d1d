mod result;
mod summary;
mod teaching;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use log::error;
use log::info;
use log::LevelFilter;
use resident_scheduler::solve_with;
use resident_scheduler::verify;
use resident_scheduler::PumpkinEngine;
use resident_scheduler::RawParameters;
use resident_scheduler::SchedulingParams;
use result::CliResult;
use summary::render_heatmap;
use summary::render_summary;
use teaching::build_teaching_hours;
use teaching::Weekday;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    allow_negative_numbers = true
)]
struct Args {
    /// The number of residents available for duty.
    ///
    /// Possible values: i64
    #[arg(long = "residents", default_value_t = 10, verbatim_doc_comment)]
    residents: i64,

    /// The length of the scheduling horizon in hours. Weeks are consecutive blocks of 168 hours
    /// starting at hour 0; the last week may be shorter.
    ///
    /// Possible values: i64
    #[arg(long = "horizon-hours", default_value_t = 168, verbatim_doc_comment)]
    horizon_hours: i64,

    /// The minimum number of residents on duty during every hour.
    ///
    /// Possible values: i64
    #[arg(long = "min-on-duty", default_value_t = 3, verbatim_doc_comment)]
    min_on_duty: i64,

    /// The minimum number of free hours after a shift ends before the same resident works again.
    ///
    /// Possible values: i64
    #[arg(long = "min-rest", default_value_t = 10, verbatim_doc_comment)]
    min_rest_hours: i64,

    /// The maximum length of a shift in hours.
    ///
    /// Possible values: i64
    #[arg(long = "max-consecutive", default_value_t = 12, verbatim_doc_comment)]
    max_consecutive_hours: i64,

    /// The maximum number of hours a resident works within one week.
    ///
    /// Possible values: i64
    #[arg(long = "max-weekly", default_value_t = 60, verbatim_doc_comment)]
    max_weekly_hours: i64,

    /// The days of the first week on which teaching takes place, separated by commas.
    #[arg(
        long = "teaching-days",
        value_enum,
        value_delimiter = ',',
        default_values_t = [
            Weekday::Sunday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
        ]
    )]
    teaching_days: Vec<Weekday>,

    /// The first hour of the daily teaching window.
    ///
    /// Possible values: i64 in [0, 24]
    #[arg(long = "teaching-start", default_value_t = 12, verbatim_doc_comment)]
    teaching_start: i64,

    /// The hour at which the daily teaching window ends (exclusive).
    ///
    /// Possible values: i64 in [0, 24]
    #[arg(long = "teaching-end", default_value_t = 16, verbatim_doc_comment)]
    teaching_end: i64,

    /// Explicit absolute teaching hours, separated by commas. When given, the options
    /// "--teaching-days", "--teaching-start" and "--teaching-end" are ignored.
    ///
    /// Possible values: list of i64 (Optional)
    #[arg(long = "teaching-hours", value_delimiter = ',', verbatim_doc_comment)]
    teaching_hours: Option<Vec<i64>>,

    /// The minimum number of teaching hours every resident attends.
    ///
    /// Possible values: i64
    #[arg(long = "min-teaching", default_value_t = 10, verbatim_doc_comment)]
    min_teaching_hours: i64,

    /// The minimum length of a shift in hours.
    ///
    /// Possible values: i64
    #[arg(long = "min-shift-length", default_value_t = 6, verbatim_doc_comment)]
    min_shift_length: i64,

    /// The minimum number of disjoint 24-hour days off per week. Weeks shorter than a day are
    /// exempt.
    ///
    /// Possible values: i64
    #[arg(long = "min-days-off", default_value_t = 1, verbatim_doc_comment)]
    min_days_off_per_week: i64,

    /// The time budget for the solver, given in milliseconds.
    ///
    /// Possible values: u64
    #[arg(
        short = 't',
        long = "time-limit",
        default_value_t = 60_000,
        verbatim_doc_comment
    )]
    time_limit: u64,

    /// The random seed to use for the Pseudo Random Number Generator of the solver.
    ///
    /// Possible values: u64
    #[arg(
        short = 'r',
        long = "random-seed",
        default_value_t = 42,
        verbatim_doc_comment
    )]
    random_seed: u64,

    /// Prints the schedule as a text heatmap after the summary.
    ///
    /// Possible values: bool
    #[arg(long = "heatmap", verbatim_doc_comment)]
    heatmap: bool,

    /// Enables log message output, such as the size of the model and the solve time.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> CliResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose);

    let teaching_hours = match args.teaching_hours {
        Some(teaching_hours) => teaching_hours,
        None => build_teaching_hours(
            &args.teaching_days,
            args.teaching_start,
            args.teaching_end,
        )?,
    };

    let params = SchedulingParams::try_from(RawParameters {
        residents: args.residents,
        horizon_hours: args.horizon_hours,
        min_on_duty: args.min_on_duty,
        min_rest_hours: args.min_rest_hours,
        max_consecutive_hours: args.max_consecutive_hours,
        max_weekly_hours: args.max_weekly_hours,
        teaching_hours,
        min_teaching_hours: args.min_teaching_hours,
        min_shift_length: args.min_shift_length,
        min_days_off_per_week: args.min_days_off_per_week,
    })?;
    info!("Solving with parameters {params:?}");

    let mut engine = PumpkinEngine::with_seed(args.random_seed);
    let time_budget = Duration::from_millis(args.time_limit);

    match solve_with(&mut engine, &params, time_budget)? {
        Some(schedule) => {
            print!("{}", render_summary(&schedule, &verify(&schedule)));
            if args.heatmap {
                println!();
                print!("{}", render_heatmap(&schedule));
            }
        }
        None => println!("No feasible schedule found within the time limit."),
    }

    Ok(())
}
