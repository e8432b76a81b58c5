use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::Error;

/// Exit code reported when the compiler terminated without one and no signal is known
pub const UNKNOWN_EXIT_CODE: i32 = 101;

/// What the compiler left behind
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Bytes written to standard output
    pub stdout: Vec<u8>,
    /// Bytes written to standard error
    pub stderr: Vec<u8>,
    /// Exit code, see [`exit_code`]
    pub code: i32,
}

/// A single compiler invocation: `launcher subcommand args...`
#[derive(Clone, Copy, Debug)]
pub struct Invocation<'a> {
    launcher: &'a str,
    subcommand: &'a str,
    args: &'a [String],
}

impl<'a> Invocation<'a> {
    /// Describes an invocation without starting it
    pub fn new(launcher: &'a str, subcommand: &'a str, args: &'a [String]) -> Self {
        Invocation {
            launcher,
            subcommand,
            args,
        }
    }

    /// Renders the invocation as a single space separated command line
    pub fn command_line(&self) -> String {
        let mut line = format!("{} {}", self.launcher, self.subcommand);
        for arg in self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Runs the compiler to completion, capturing its stdout and stderr
    ///
    /// The arguments go straight to the OS; there is no shell in between. Stdin is inherited.
    pub fn execute(&self) -> Result<CapturedOutput, Error> {
        let child = Command::new(self.launcher)
            .arg(self.subcommand)
            .args(self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|cause| Error::Launch {
                program: self.launcher.to_owned(),
                cause,
            })?;

        debug!(pid = child.id(), "compiler started");

        // drains both pipes while waiting
        let output = child.wait_with_output().map_err(|cause| Error::Wait {
            program: self.launcher.to_owned(),
            cause,
        })?;

        let code = exit_code(output.status);
        debug!(
            code,
            stdout = output.stdout.len(),
            stderr = output.stderr.len(),
            "compiler exited"
        );

        Ok(CapturedOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            code,
        })
    }
}

/// Maps the compiler's exit status to the proxy's exit code
///
/// On Unix a compiler killed by a signal maps to `128 + signal`, like a shell does.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            warn!(signal, "compiler killed by a signal");
            return 128 + signal;
        }
    }

    UNKNOWN_EXIT_CODE
}

#[cfg(test)]
#[path = "child_tests.rs"]
mod tests;
