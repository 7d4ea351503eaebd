//! Child process execution with normalized text outcomes.
//!
//! Every invocation collapses into a [`CommandResult`]: captured stdout on
//! success, or a prefixed error description otherwise. No raw status or
//! I/O error object crosses this boundary, so callers can treat the result
//! as plain printable text.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use tracing::{debug, error, instrument, warn};
use wait_timeout::ChildExt;

/// Outcome of one external-process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub succeeded: bool,
    /// Captured stdout when `succeeded`, a formatted error description
    /// otherwise. Always printable.
    pub output: String,
}

/// Seam for command execution. Tests substitute scripted runners that
/// record the argv without spawning anything.
pub trait CommandRunner {
    fn execute(&self, argv: &[String]) -> CommandResult;
}

impl<R: CommandRunner> CommandRunner for &R {
    fn execute(&self, argv: &[String]) -> CommandResult {
        (*self).execute(argv)
    }
}

/// Runner that spawns a real child process.
///
/// Arguments are passed as discrete tokens with no shell interpretation,
/// so untrusted substrings (e.g. a mutant identifier containing shell
/// metacharacters) cannot inject commands.
#[derive(Debug, Default, Clone)]
pub struct ProcessRunner {
    /// Bound on the child wait. `None` blocks until the child exits.
    pub timeout: Option<Duration>,
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip_all, fields(program = argv.first().map_or("", String::as_str)))]
    fn execute(&self, argv: &[String]) -> CommandResult {
        let Some((program, args)) = argv.split_first() else {
            return CommandResult {
                succeeded: false,
                output: "Exception occurred: empty command".to_string(),
            };
        };

        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());

        debug!("spawning child process");
        let result = match self.timeout {
            Some(timeout) => run_bounded(cmd, timeout),
            None => run_unbounded(cmd),
        };
        debug!(succeeded = result.succeeded, "command finished");
        result
    }
}

fn run_unbounded(mut cmd: Command) -> CommandResult {
    match cmd.output() {
        Ok(out) => normalize(out.status.success(), &out.stdout, &out.stderr),
        Err(err) => launch_fault(&err),
    }
}

/// Wait with a bound, draining stdout/stderr on reader threads so a chatty
/// child cannot deadlock on a full pipe while we wait.
fn run_bounded(mut cmd: Command, timeout: Duration) -> CommandResult {
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => return launch_fault(&err),
    };

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let stdout_handle = thread::spawn(move || read_to_end(stdout));
    let stderr_handle = thread::spawn(move || read_to_end(stderr));

    let status = match child.wait_timeout(timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            warn!(timeout_secs = timeout.as_secs(), "command timed out, killing");
            let _ = child.kill();
            let _ = child.wait();
            let _ = stdout_handle.join();
            let _ = stderr_handle.join();
            return CommandResult {
                succeeded: false,
                output: format!("Error: command timed out after {}s", timeout.as_secs()),
            };
        }
        Err(err) => {
            let _ = child.kill();
            let _ = child.wait();
            return CommandResult {
                succeeded: false,
                output: format!("Exception occurred: {err}"),
            };
        }
    };

    let stdout = join_reader(stdout_handle, "stdout");
    let stderr = join_reader(stderr_handle, "stderr");
    normalize(status.success(), &stdout, &stderr)
}

fn join_reader(handle: thread::JoinHandle<Vec<u8>>, stream: &str) -> Vec<u8> {
    match handle.join() {
        Ok(buf) => buf,
        Err(_) => {
            warn!(stream, "output reader thread panicked");
            Vec::new()
        }
    }
}

fn read_to_end<R: Read>(stream: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        let _ = stream.read_to_end(&mut buf);
    }
    buf
}

fn normalize(success: bool, stdout: &[u8], stderr: &[u8]) -> CommandResult {
    if success {
        CommandResult {
            succeeded: true,
            output: String::from_utf8_lossy(stdout).into_owned(),
        }
    } else {
        CommandResult {
            succeeded: false,
            output: format!("Error: {}", String::from_utf8_lossy(stderr)),
        }
    }
}

fn launch_fault(err: &std::io::Error) -> CommandResult {
    error!(err = %err, "failed to spawn command");
    CommandResult {
        succeeded: false,
        output: format!("Exception occurred: {err}"),
    }
}
