use std::io;

use failure::Fail;

/// Errors raised by the proxy itself
///
/// A non-zero exit of the compiler is *not* an error; it is returned as the proxy's exit code.
#[derive(Debug, Fail)]
pub enum Error {
    /// Fewer than two arguments were supplied
    #[fail(
        display = "expected at least 2 arguments, the second being `@<response file>`, got {}",
        count
    )]
    MissingResponseFile {
        /// Number of arguments received
        count: usize,
    },

    /// The second argument is not a marker-prefixed path
    #[fail(
        display = "`{}` is not a response file reference, expected `{}<path>`",
        argument, marker
    )]
    MalformedResponseFile {
        /// The offending argument
        argument: String,
        /// The marker that was expected in front of the path
        marker: char,
    },

    /// An argument is not valid Unicode
    #[fail(display = "argument {} is not valid unicode: {}", index, lossy)]
    NonUnicodeArgument {
        /// Position of the argument (program name excluded)
        index: usize,
        /// Lossy rendering of the argument
        lossy: String,
    },

    /// The response file could not be read
    #[fail(display = "cannot read response file {}: {}", path, cause)]
    ReadResponseFile {
        /// Path of the response file
        path: String,
        /// Underlying I/O error
        #[cause]
        cause: io::Error,
    },

    /// An artifact file could not be written
    #[fail(display = "cannot write artifact {}: {}", path, cause)]
    WriteArtifact {
        /// Path of the artifact
        path: String,
        /// Underlying I/O error
        #[cause]
        cause: io::Error,
    },

    /// The compiler could not be started
    #[fail(display = "failed to launch `{}`: {}", program, cause)]
    Launch {
        /// Launcher executable
        program: String,
        /// Underlying I/O error
        #[cause]
        cause: io::Error,
    },

    /// Waiting for the compiler or draining its pipes failed
    #[fail(display = "failed to collect the output of `{}`: {}", program, cause)]
    Wait {
        /// Launcher executable
        program: String,
        /// Underlying I/O error
        #[cause]
        cause: io::Error,
    },

    /// A captured stream could not be echoed to the proxy's own stream
    #[fail(display = "cannot mirror the compiler's {}: {}", stream, cause)]
    Mirror {
        /// `stdout` or `stderr`
        stream: &'static str,
        /// Underlying I/O error
        #[cause]
        cause: io::Error,
    },
}

/// Coarse classification of [`Error`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad command line; nothing was written or spawned
    Argument,
    /// An input could not be read or an artifact could not be written
    Filesystem,
    /// The compiler executable could not be started
    Launch,
    /// The compiler ran but its output could not be collected or echoed
    Capture,
}

impl Error {
    /// Returns the classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingResponseFile { .. }
            | Error::MalformedResponseFile { .. }
            | Error::NonUnicodeArgument { .. } => ErrorKind::Argument,
            Error::ReadResponseFile { .. } | Error::WriteArtifact { .. } => ErrorKind::Filesystem,
            Error::Launch { .. } => ErrorKind::Launch,
            Error::Wait { .. } | Error::Mirror { .. } => ErrorKind::Capture,
        }
    }

    /// Returns the exit code the proxy terminates with when failing with this error
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Argument => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
