//! Transparent compiler shim
//!
//! `compile-proxy` stands in for the compiler: it records the arguments it receives and the
//! response file they reference, runs the real compiler (`dotnet csc <args...>`) with its output
//! captured, records and echoes that output, and reports the compiler's exit code as its own.
//!
//! The second argument must be a response file reference, `@<path>`. Four artifacts are written
//! to the configured directory:
//!
//! - `cscparameters`, the arguments, one per line
//! - `rspfile`, a verbatim copy of the response file
//! - `std_output` and `std_error`, the compiler's captured streams

#![deny(missing_docs)]

use std::{
    ffi::OsString,
    io::{self, Write},
    path::PathBuf,
};

use tracing::{debug, info};

mod args;
mod artifacts;
mod child;
mod error;

pub use crate::{
    args::{Arguments, RESPONSE_FILE_MARKER},
    artifacts::{Artifacts, Stream, WritePolicy, PARAMETERS, RESPONSE_FILE, STDERR, STDOUT},
    child::{exit_code, CapturedOutput, Invocation, UNKNOWN_EXIT_CODE},
    error::{Error, ErrorKind},
};

/// Default artifact directory
pub const DEFAULT_ARTIFACT_DIR: &str = "bin";
/// Default launcher executable
pub const DEFAULT_LAUNCHER: &str = "dotnet";
/// Default sub-command passed to the launcher
pub const DEFAULT_SUBCOMMAND: &str = "csc";

/// Deployment settings, fixed when the proxy is built
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory the artifacts are written to
    pub artifact_dir: PathBuf,
    /// When the stream artifacts get written
    pub write_policy: WritePolicy,
    /// Executable that is spawned
    pub launcher: String,
    /// First argument handed to the launcher, ahead of the forwarded arguments
    pub subcommand: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            artifact_dir: PathBuf::from(DEFAULT_ARTIFACT_DIR),
            write_policy: WritePolicy::default(),
            launcher: DEFAULT_LAUNCHER.to_owned(),
            subcommand: DEFAULT_SUBCOMMAND.to_owned(),
        }
    }
}

/// Proxies a compiler invocation using the process's own stdout and stderr
///
/// `args` excludes the program name. Returns the compiler's exit code.
pub fn run<I>(config: &Config, args: I) -> Result<i32, Error>
where
    I: IntoIterator<Item = OsString>,
{
    let args = Arguments::from_os(args)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(config, &args, &mut stdout.lock(), &mut stderr.lock())
}

/// Proxies a compiler invocation, echoing the captured streams to `stdout` and `stderr`
///
/// Nothing is spawned until both input artifacts have been written.
pub fn run_with<O, E>(
    config: &Config,
    args: &Arguments,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<i32, Error>
where
    O: Write,
    E: Write,
{
    let artifacts = Artifacts::new(&config.artifact_dir);

    artifacts.record_parameters(args)?;
    artifacts.record_response_file(args.response_file())?;

    let invocation = Invocation::new(&config.launcher, &config.subcommand, args.as_slice());
    info!(command = %invocation.command_line(), "invoking compiler");

    let output = invocation.execute()?;

    report(&artifacts, config.write_policy, Stream::Stderr, &output.stderr, stderr)?;
    report(&artifacts, config.write_policy, Stream::Stdout, &output.stdout, stdout)?;

    info!(code = output.code, "compiler finished");
    Ok(output.code)
}

// records one stream, then echoes it if there is anything to echo
fn report<W>(
    artifacts: &Artifacts,
    policy: WritePolicy,
    stream: Stream,
    bytes: &[u8],
    console: &mut W,
) -> Result<(), Error>
where
    W: Write,
{
    artifacts.record_stream(stream, bytes, policy)?;

    if bytes.is_empty() {
        debug!(stream = stream.name(), "nothing to mirror");
        return Ok(());
    }

    console
        .write_all(bytes)
        .and_then(|_| console.flush())
        .map_err(|cause| Error::Mirror {
            stream: stream.name(),
            cause,
        })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
