use std::{ffi::OsString, path::Path};

use crate::Error;

/// Character that prefixes the response file path on the command line
pub const RESPONSE_FILE_MARKER: char = '@';

/// The compiler arguments, exactly as received
///
/// Construction validates that the second argument references a response file, so
/// [`Arguments::response_file`] never fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arguments {
    args: Vec<String>,
}

impl Arguments {
    /// Validates an argument vector (program name excluded)
    pub fn new(args: Vec<String>) -> Result<Self, Error> {
        let reference = match args.get(1) {
            Some(arg) => arg,
            None => return Err(Error::MissingResponseFile { count: args.len() }),
        };

        match reference.strip_prefix(RESPONSE_FILE_MARKER) {
            Some(path) if !path.is_empty() => {}
            _ => {
                return Err(Error::MalformedResponseFile {
                    argument: reference.clone(),
                    marker: RESPONSE_FILE_MARKER,
                })
            }
        }

        Ok(Arguments { args })
    }

    /// Converts raw OS arguments (program name excluded)
    pub fn from_os<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .enumerate()
            .map(|(index, arg)| {
                arg.into_string().map_err(|arg| Error::NonUnicodeArgument {
                    index,
                    lossy: arg.to_string_lossy().into_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Arguments::new(args)
    }

    /// Returns the arguments in their original order
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// Returns the response file path, i.e. the second argument without its marker
    pub fn response_file(&self) -> &Path {
        Path::new(&self.args[1][RESPONSE_FILE_MARKER.len_utf8()..])
    }

    /// Renders the arguments one per line, each line terminated by `\n`
    pub fn to_lines(&self) -> String {
        let mut lines = String::new();
        for arg in &self.args {
            lines.push_str(arg);
            lines.push('\n');
        }
        lines
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
