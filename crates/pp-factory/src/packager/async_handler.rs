use super::{
    core::{resolve_outcome, run_job},
    types::{JobOutcome, JobStatus, PackagingRequest},
    utils::validate_request,
};
use crate::{config::PackagerConfig, error::PackError};
use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::mpsc::Sender,
    thread,
};

/// Sends `Finished` when dropped, so the UI is released even if the worker panics.
struct FinishGuard(Sender<JobStatus>);

impl Drop for FinishGuard {
    fn drop(&mut self) {
        let _ = self.0.send(JobStatus::Finished);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "packaging worker panicked".into()
    }
}

/// Runs `job` and turns its result, or its panic, into the terminal report.
fn report<J>(job: J) -> JobStatus
where
    J: FnOnce() -> Result<JobOutcome, PackError>,
{
    match panic::catch_unwind(AssertUnwindSafe(job)) {
        Ok(Ok(outcome)) => match resolve_outcome(&outcome) {
            Ok(_) => JobStatus::Succeeded(outcome),
            Err(e) => JobStatus::Failed(e),
        },
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "packaging run aborted");
            JobStatus::Failed(e)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(%message, "packaging worker panicked");
            JobStatus::Failed(PackError::Unexpected(message))
        }
    }
}

/// Validates the request, then runs the job on a detached worker thread.
///
/// An `InvalidInput` error is returned synchronously and no thread is started.
/// Every other outcome arrives on `sender`, followed by `JobStatus::Finished`.
pub fn run_async(
    config: PackagerConfig,
    request: PackagingRequest,
    sender: Sender<JobStatus>,
) -> Result<(), PackError> {
    validate_request(&request)?;

    thread::spawn(move || {
        let _finished = FinishGuard(sender.clone());
        let tx_callback = sender.clone();

        let status = report(|| {
            run_job(&config, &request, move |status| {
                let _ = tx_callback.send(status);
            })
        });
        let _ = sender.send(status);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn panicking_job_reports_unexpected_failure() {
        let status = report(|| panic!("pipe exploded"));
        match status {
            JobStatus::Failed(PackError::Unexpected(msg)) => assert_eq!(msg, "pipe exploded"),
            other => panic!("unexpected status: {:?}", other),
        }
    }

    #[test]
    fn formatted_panic_message_is_kept() {
        let code = 7;
        let status = report(|| panic!("bad exit {}", code));
        assert!(matches!(
            status,
            JobStatus::Failed(PackError::Unexpected(ref m)) if m == "bad exit 7"
        ));
    }

    #[test]
    fn non_zero_outcome_reports_packaging_failure() {
        let status = report(|| {
            Ok(JobOutcome {
                exit_code: 2,
                artifact: None,
                log_lines: vec![],
            })
        });
        assert!(matches!(
            status,
            JobStatus::Failed(PackError::PackagingFailure { exit_code: 2 })
        ));
    }

    #[test]
    fn zero_outcome_reports_success() {
        let status = report(|| {
            Ok(JobOutcome {
                exit_code: 0,
                artifact: Some(PathBuf::from("/out/app")),
                log_lines: vec![],
            })
        });
        assert!(matches!(status, JobStatus::Succeeded(_)));
    }
}
