//! Helpers to run the `resident-scheduler` binary from integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::io::Read;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// The exit status and output of one run of the binary.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) exit_code: Option<i32>,
    pub(crate) stdout: String,
}

/// Runs the scheduler with the given arguments and waits for it to terminate.
///
/// Panics if the process does not terminate within [`TEST_TIMEOUT`].
pub(crate) fn run_scheduler<'a>(args: impl IntoIterator<Item = &'a str>) -> Run {
    let scheduler = PathBuf::from(env!("CARGO_BIN_EXE_resident-scheduler"));

    let mut child = Command::new(scheduler)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to run resident-scheduler");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            // The process did not terminate in time.
            child.kill().expect("Failed to kill resident-scheduler");
            panic!("resident-scheduler did not terminate within {TEST_TIMEOUT:?}");
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("Error while waiting for resident-scheduler: {e}"),
    };

    let mut stdout = String::new();
    let _ = child
        .stdout
        .take()
        .expect("stdout is piped")
        .read_to_string(&mut stdout)
        .expect("stdout is valid UTF-8");

    Run {
        exit_code: status.code(),
        stdout,
    }
}

/// The arguments of a small instance which the scheduler solves quickly.
pub(crate) fn small_instance() -> Vec<&'static str> {
    vec![
        "--residents",
        "6",
        "--horizon-hours",
        "48",
        "--min-on-duty",
        "2",
        "--min-rest",
        "4",
        "--max-consecutive",
        "8",
        "--max-weekly",
        "80",
        "--teaching-days",
        "sunday",
        "--teaching-start",
        "8",
        "--teaching-end",
        "16",
        "--min-teaching",
        "2",
        "--min-shift-length",
        "4",
        "--min-days-off",
        "0",
        "--time-limit",
        "5000",
    ]
}

/// Replaces the value of `option` in `args`, which must contain it.
pub(crate) fn set_option<'a>(args: &mut [&'a str], option: &str, value: &'a str) {
    let position = args
        .iter()
        .position(|&arg| arg == option)
        .expect("the option is present");
    args[position + 1] = value;
}
