use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{Arguments, Error};

/// Artifact holding the argument list, one argument per line
pub const PARAMETERS: &str = "cscparameters";
/// Artifact holding a verbatim copy of the response file
pub const RESPONSE_FILE: &str = "rspfile";
/// Artifact holding the compiler's standard output
pub const STDOUT: &str = "std_output";
/// Artifact holding the compiler's standard error
pub const STDERR: &str = "std_error";

/// When the stream artifacts get written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritePolicy {
    /// Always write the file; an empty stream produces an empty file
    Always,
    /// Only write the file when the stream is non-empty; older files are left untouched
    NonEmptyOnly,
}

impl Default for WritePolicy {
    fn default() -> Self {
        WritePolicy::Always
    }
}

/// One of the compiler's output streams
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
}

impl Stream {
    /// Returns the conventional name of the stream
    pub fn name(self) -> &'static str {
        match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }

    fn artifact(self) -> &'static str {
        match self {
            Stream::Stdout => STDOUT,
            Stream::Stderr => STDERR,
        }
    }
}

/// The fixed set of artifact files inside one directory
///
/// The directory is never created; a missing directory surfaces as [`Error::WriteArtifact`].
#[derive(Clone, Debug)]
pub struct Artifacts {
    dir: PathBuf,
}

impl Artifacts {
    /// Places the artifacts in `dir`
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Artifacts { dir: dir.into() }
    }

    /// Returns the directory the artifacts are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the argument list artifact
    pub fn parameters(&self) -> PathBuf {
        self.dir.join(PARAMETERS)
    }

    /// Path of the response file copy
    pub fn response_file(&self) -> PathBuf {
        self.dir.join(RESPONSE_FILE)
    }

    /// Path of the artifact recording `stream`
    pub fn stream(&self, stream: Stream) -> PathBuf {
        self.dir.join(stream.artifact())
    }

    /// Writes the argument list
    pub fn record_parameters(&self, args: &Arguments) -> Result<PathBuf, Error> {
        let path = self.parameters();
        write(&path, args.to_lines().as_bytes())?;
        Ok(path)
    }

    /// Copies the contents of the response file at `src`
    pub fn record_response_file(&self, src: &Path) -> Result<PathBuf, Error> {
        let contents = fs::read(src).map_err(|cause| Error::ReadResponseFile {
            path: src.display().to_string(),
            cause,
        })?;

        let path = self.response_file();
        write(&path, &contents)?;
        Ok(path)
    }

    /// Writes a captured stream according to `policy`
    ///
    /// Returns the path written to, or `None` if the policy skipped the write.
    pub fn record_stream(
        &self,
        stream: Stream,
        bytes: &[u8],
        policy: WritePolicy,
    ) -> Result<Option<PathBuf>, Error> {
        if bytes.is_empty() && policy == WritePolicy::NonEmptyOnly {
            debug!(stream = stream.name(), "empty stream, artifact not written");
            return Ok(None);
        }

        let path = self.stream(stream);
        write(&path, bytes)?;
        Ok(Some(path))
    }
}

fn write(path: &Path, contents: &[u8]) -> Result<(), Error> {
    fs::write(path, contents).map_err(|cause| Error::WriteArtifact {
        path: path.display().to_string(),
        cause,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "artifact written");
    Ok(())
}

#[cfg(test)]
#[path = "artifacts_tests.rs"]
mod tests;
