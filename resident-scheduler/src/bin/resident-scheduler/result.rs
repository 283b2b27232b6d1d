use resident_scheduler::ParameterError;
use resident_scheduler::SchedulingError;
use thiserror::Error;

pub(crate) type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("Invalid parameters, more details: {0}")]
    InvalidParameters(#[from] ParameterError),
    #[error("The daily teaching window {start_hour}..{end_hour} does not lie within a day")]
    InvalidTeachingWindow { start_hour: i64, end_hour: i64 },
    #[error("Failed to produce a valid schedule, more details: {0}")]
    Scheduling(#[from] SchedulingError),
}
