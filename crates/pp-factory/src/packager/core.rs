use super::types::{JobOutcome, JobStatus, PackagingRequest};
use super::utils::{artifact_path, cleanup_scratch, format_command, locate_tool, work_dir};
use crate::{config::PackagerConfig, error::PackError};
use std::{
    ffi::{OsStr, OsString},
    io::{self, BufRead, BufReader, Read},
    path::PathBuf,
    process::{Command, ExitStatus, Stdio},
};

/// Argument list for the packaging tool, tool name first.
///
/// `<tool> --clean --distpath <out> [--onefile] (--windowed|--console) <script>`
pub fn build_command(tool: &OsStr, request: &PackagingRequest) -> Vec<OsString> {
    let mut cmd: Vec<OsString> = vec![
        tool.to_os_string(),
        "--clean".into(),
        "--distpath".into(),
        request.output_dir.clone().into_os_string(),
    ];

    if request.one_file {
        cmd.push("--onefile".into());
    }

    if request.windowed {
        cmd.push("--windowed".into());
    } else {
        cmd.push("--console".into());
    }

    cmd.push(request.script_path.clone().into_os_string());
    cmd
}

/// Forwards every line of `source` until EOF. Invalid UTF-8 is replaced, never fatal.
fn pump_lines<R, S>(source: R, mut sink: S)
where
    R: Read,
    S: FnMut(String),
{
    let mut reader = BufReader::new(source);
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        match reader.read_until(b'\n', &mut buffer) {
            Ok(0) => break,
            Ok(_) => {
                while matches!(buffer.last(), Some(b'\n' | b'\r')) {
                    buffer.pop();
                }
                sink(String::from_utf8_lossy(&buffer).into_owned());
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::debug!(error = %e, "output pipe closed with error");
                break;
            }
        }
    }
}

fn spawn_error(tool: &str, e: io::Error) -> PackError {
    if e.kind() == io::ErrorKind::NotFound {
        PackError::ToolNotFound {
            tool: tool.to_string(),
        }
    } else {
        PackError::Unexpected(e.to_string())
    }
}

/// Runs the packaging tool to completion and cleans up its scratch artifacts.
///
/// Returns an outcome for any exit code; the caller decides how to report a
/// non-zero one. `Err` means the tool never ran or its output could not be
/// collected. Blocks until the subprocess exits; there is no timeout.
pub fn run_job<F>(
    config: &PackagerConfig,
    request: &PackagingRequest,
    callback: F,
) -> Result<JobOutcome, PackError>
where
    F: Fn(JobStatus),
{
    let program = locate_tool(&config.tool)?;
    let command = build_command(OsStr::new(&config.tool), request);

    callback(JobStatus::Started {
        command: format_command(&command),
    });
    tracing::info!(tool = %program.display(), script = %request.script_path.display(), "packaging started");

    // stdout and stderr share one pipe, so lines keep their emission order
    let (reader, writer) = io::pipe().map_err(|e| PackError::Unexpected(e.to_string()))?;
    let writer_err = writer
        .try_clone()
        .map_err(|e| PackError::Unexpected(e.to_string()))?;

    let mut cmd = Command::new(&program);
    cmd.args(&command[1..])
        .current_dir(work_dir(&request.script_path))
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(writer_err);

    let spawned = cmd.spawn();
    // the parent must not hold a write end, or the reader never sees EOF
    drop(cmd);
    let mut child = spawned.map_err(|e| spawn_error(&config.tool, e))?;

    let mut log_lines = Vec::new();
    pump_lines(reader, |line| {
        callback(JobStatus::Output(line.clone()));
        log_lines.push(line);
    });

    finish_run(child.wait(), request, log_lines, &callback)
}

/// Cleans up after the subprocess, whether or not waiting on it succeeded.
fn finish_run<F>(
    waited: io::Result<ExitStatus>,
    request: &PackagingRequest,
    log_lines: Vec<String>,
    callback: &F,
) -> Result<JobOutcome, PackError>
where
    F: Fn(JobStatus),
{
    callback(JobStatus::Cleaning);
    cleanup_scratch(&request.script_path);

    let status = waited.map_err(|e| PackError::Unexpected(e.to_string()))?;

    // killed by a signal -> no code
    let exit_code = status.code().unwrap_or(-1);
    tracing::info!(exit_code, "packaging tool exited");

    let artifact = (exit_code == 0).then(|| artifact_path(request));

    Ok(JobOutcome {
        exit_code,
        artifact,
        log_lines,
    })
}

/// Maps a finished run to the artifact path or a `PackagingFailure`.
pub fn resolve_outcome(outcome: &JobOutcome) -> Result<PathBuf, PackError> {
    match &outcome.artifact {
        Some(path) if outcome.success() => Ok(path.clone()),
        _ => Err(PackError::PackagingFailure {
            exit_code: outcome.exit_code,
        }),
    }
}
