// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome tracking around a job body.

use std::any::Any;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use joblog_core::format_elapsed_secs;

use crate::logger::{Control, Logger};

/// Run `job`, timing it and recording its outcome on `control`.
///
/// Logs a start line, then either a completion line with the elapsed time
/// (outcome success) or the error and its causes (outcome failure). The job's
/// error is returned unchanged. A panic in the job is logged, recorded as a failure,
/// and then resumed.
pub fn run_job<T, E, F>(name: &str, logger: &Logger, control: &Control, job: F) -> Result<T, E>
where
    F: FnOnce(&Logger) -> Result<T, E>,
    E: Error,
{
    let start = Instant::now();
    logger.info(format!("Starting {name}..."));

    match panic::catch_unwind(AssertUnwindSafe(|| job(logger))) {
        Ok(Ok(value)) => {
            logger.info(format!(
                "Finished {name} in {} seconds",
                format_elapsed_secs(start.elapsed())
            ));
            control.set_outcome(true);
            Ok(value)
        }
        Ok(Err(e)) => {
            logger.error(format!("Error in {name}: {}", error_chain(&e)));
            control.set_outcome(false);
            Err(e)
        }
        Err(payload) => {
            logger.critical(format!("Panic in {name}: {}", panic_message(&*payload)));
            control.set_outcome(false);
            panic::resume_unwind(payload)
        }
    }
}

/// Render `err` followed by each source not already part of the text.
fn error_chain(err: &dyn Error) -> String {
    let mut text = err.to_string();
    let mut cause = err.source();
    while let Some(source) = cause {
        let part = source.to_string();
        if !text.contains(&part) {
            text.push_str(": ");
            text.push_str(&part);
        }
        cause = source.source();
    }
    text
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
#[path = "wrapper_tests.rs"]
mod tests;
